//! # Validation Module
//!
//! Fail-fast validation of submitted receipts.
//!
//! ## Rule Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Receipt Validation                                 │
//! │                                                                         │
//! │  1. has_required_fields ──────────────── ✗ → MissingFields              │
//! │           │                                                             │
//! │  2. is_valid_retailer ─────────────────── ✗ → InvalidRetailer           │
//! │           │                                                             │
//! │  3. is_valid_purchase_date ────────────── ✗ → InvalidDate               │
//! │           │                                                             │
//! │  4. is_valid_purchase_time ────────────── ✗ → InvalidTime               │
//! │           │                                                             │
//! │  5. for each item, in order:                                            │
//! │       is_valid_item_description ───────── ✗ → InvalidItemDescription   │
//! │       is_valid_amount(price) ──────────── ✗ → InvalidItemPrice         │
//! │           │                                                             │
//! │  6. is_valid_amount(total) ────────────── ✗ → InvalidTotal              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │          OK                                                             │
//! │                                                                         │
//! │  The first failing rule is the one reported.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Character Classes
//! All classes are ASCII: a word character is `[A-Za-z0-9_]`, whitespace is
//! `[\t\n\f\r ]` and a digit is `[0-9]`. Non-ASCII letters are rejected.
//!
//! ## Usage
//! ```rust
//! use receipt_core::validation::{is_valid_amount, is_valid_retailer};
//!
//! assert!(is_valid_retailer("M&M Corner Market"));
//! assert!(!is_valid_retailer("Target!"));
//! assert!(is_valid_amount("6.49"));
//! assert!(!is_valid_amount("6.4"));
//! ```

use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;
use crate::types::Receipt;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Patterns
// =============================================================================

static RETAILER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_\t\n\x0C\r \-&]+$").expect("retailer pattern compiles")
});

static DESCRIPTION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_\t\n\x0C\r \-]+$").expect("description pattern compiles")
});

static AMOUNT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+\.[0-9]{2}$").expect("amount pattern compiles"));

// chrono alone accepts single-digit months and hours, so the shape is pinned first.
static DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern compiles"));

static TIME_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}$").expect("time pattern compiles"));

// =============================================================================
// Field Predicates
// =============================================================================

/// True when every required field is present.
///
/// ## Rules
/// - retailer, purchaseDate, purchaseTime and total are non-empty
/// - items has at least one entry
pub fn has_required_fields(receipt: &Receipt) -> bool {
    !receipt.retailer.is_empty()
        && !receipt.purchase_date.is_empty()
        && !receipt.purchase_time.is_empty()
        && !receipt.items.is_empty()
        && !receipt.total.is_empty()
}

/// Retailer names allow word characters, whitespace, `-` and `&`.
///
/// ## Example
/// ```rust
/// use receipt_core::validation::is_valid_retailer;
///
/// assert!(is_valid_retailer("M&M Corner Market"));
/// assert!(is_valid_retailer("Walgreens - Store 12"));
/// assert!(!is_valid_retailer("Joe's Diner"));
/// ```
pub fn is_valid_retailer(retailer: &str) -> bool {
    RETAILER_PATTERN.is_match(retailer)
}

/// Item descriptions allow word characters, whitespace and `-`.
pub fn is_valid_item_description(description: &str) -> bool {
    DESCRIPTION_PATTERN.is_match(description)
}

/// Amounts are digits, a dot, and exactly two digits: `"6.49"`.
pub fn is_valid_amount(amount: &str) -> bool {
    AMOUNT_PATTERN.is_match(amount)
}

/// True when the string is a real calendar date in `YYYY-MM-DD` form.
pub fn is_valid_purchase_date(date: &str) -> bool {
    parse_purchase_date(date).is_some()
}

/// True when the string is a 24-hour `HH:MM` time.
pub fn is_valid_purchase_time(time: &str) -> bool {
    parse_purchase_time(time).is_some()
}

// =============================================================================
// Parsers
// =============================================================================

/// Parses a `YYYY-MM-DD` purchase date.
///
/// Returns `None` for the wrong shape (`2022-1-1`) and for dates that do not
/// exist (`2022-02-30`).
pub fn parse_purchase_date(date: &str) -> Option<NaiveDate> {
    if !DATE_SHAPE.is_match(date) {
        return None;
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Parses an `HH:MM` purchase time (`00:00` through `23:59`).
pub fn parse_purchase_time(time: &str) -> Option<NaiveTime> {
    if !TIME_SHAPE.is_match(time) {
        return None;
    }
    NaiveTime::parse_from_str(time, "%H:%M").ok()
}

// =============================================================================
// Receipt Validator
// =============================================================================

/// Validates a receipt, reporting the first rule that fails.
///
/// ## Example
/// ```rust
/// use receipt_core::validation::validate_receipt;
/// use receipt_core::{Receipt, ValidationError};
///
/// let empty = Receipt::default();
/// assert_eq!(validate_receipt(&empty), Err(ValidationError::MissingFields));
/// ```
pub fn validate_receipt(receipt: &Receipt) -> ValidationResult<()> {
    if !has_required_fields(receipt) {
        return Err(ValidationError::MissingFields);
    }

    if !is_valid_retailer(&receipt.retailer) {
        return Err(ValidationError::InvalidRetailer);
    }

    if !is_valid_purchase_date(&receipt.purchase_date) {
        return Err(ValidationError::InvalidDate);
    }

    if !is_valid_purchase_time(&receipt.purchase_time) {
        return Err(ValidationError::InvalidTime);
    }

    for (index, item) in receipt.items.iter().enumerate() {
        if !is_valid_item_description(&item.short_description) {
            return Err(ValidationError::InvalidItemDescription { index });
        }
        if !is_valid_amount(&item.price) {
            return Err(ValidationError::InvalidItemPrice { index });
        }
    }

    if !is_valid_amount(&receipt.total) {
        return Err(ValidationError::InvalidTotal);
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Item;

    fn item(description: &str, price: &str) -> Item {
        Item {
            short_description: description.to_string(),
            price: price.to_string(),
        }
    }

    fn target_receipt() -> Receipt {
        Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            items: vec![item("Mountain Dew 12PK", "6.49")],
            total: "6.49".to_string(),
        }
    }

    #[test]
    fn test_valid_receipt_passes() {
        assert_eq!(validate_receipt(&target_receipt()), Ok(()));
    }

    #[test]
    fn test_each_missing_field_is_reported() {
        let mut r = target_receipt();
        r.retailer.clear();
        assert_eq!(validate_receipt(&r), Err(ValidationError::MissingFields));

        let mut r = target_receipt();
        r.purchase_date.clear();
        assert_eq!(validate_receipt(&r), Err(ValidationError::MissingFields));

        let mut r = target_receipt();
        r.purchase_time.clear();
        assert_eq!(validate_receipt(&r), Err(ValidationError::MissingFields));

        let mut r = target_receipt();
        r.items.clear();
        assert_eq!(validate_receipt(&r), Err(ValidationError::MissingFields));

        let mut r = target_receipt();
        r.total.clear();
        assert_eq!(validate_receipt(&r), Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_missing_fields_wins_over_other_failures() {
        let r = Receipt {
            retailer: String::new(),
            purchase_date: "not a date".to_string(),
            purchase_time: "25:99".to_string(),
            items: vec![item("bad!", "x")],
            total: "6.4".to_string(),
        };
        assert_eq!(validate_receipt(&r), Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_retailer_pattern() {
        assert!(is_valid_retailer("Target"));
        assert!(is_valid_retailer("M&M Corner Market"));
        assert!(is_valid_retailer("Shop-Rite_2"));
        assert!(is_valid_retailer("   "));

        assert!(!is_valid_retailer(""));
        assert!(!is_valid_retailer("Joe's"));
        assert!(!is_valid_retailer("Target."));
        assert!(!is_valid_retailer("Café"));

        let mut r = target_receipt();
        r.retailer = "Target!".to_string();
        assert_eq!(validate_receipt(&r), Err(ValidationError::InvalidRetailer));
    }

    #[test]
    fn test_purchase_date() {
        assert!(is_valid_purchase_date("2022-01-01"));
        assert!(is_valid_purchase_date("2024-02-29"));

        assert!(!is_valid_purchase_date("2022-1-1"));
        assert!(!is_valid_purchase_date("2022-02-30"));
        assert!(!is_valid_purchase_date("2023-02-29"));
        assert!(!is_valid_purchase_date("01/01/2022"));
        assert!(!is_valid_purchase_date("22-01-01"));

        let mut r = target_receipt();
        r.purchase_date = "2022-13-01".to_string();
        assert_eq!(validate_receipt(&r), Err(ValidationError::InvalidDate));
    }

    #[test]
    fn test_purchase_time() {
        assert!(is_valid_purchase_time("00:00"));
        assert!(is_valid_purchase_time("13:01"));
        assert!(is_valid_purchase_time("23:59"));

        assert!(!is_valid_purchase_time("24:00"));
        assert!(!is_valid_purchase_time("12:60"));
        assert!(!is_valid_purchase_time("1:05"));
        assert!(!is_valid_purchase_time("9:05"));
        assert!(is_valid_purchase_time("09:05"));
        assert!(!is_valid_purchase_time("13:01:00"));
        assert!(!is_valid_purchase_time("1pm"));

        let mut r = target_receipt();
        r.purchase_time = "25:00".to_string();
        assert_eq!(validate_receipt(&r), Err(ValidationError::InvalidTime));
    }

    #[test]
    fn test_item_description_and_price() {
        assert!(is_valid_item_description("Mountain Dew 12PK"));
        assert!(is_valid_item_description("Klarbrunn 12-PK"));
        assert!(!is_valid_item_description("Emils Cheese & Pizza"));
        assert!(!is_valid_item_description("12 FL. OZ"));

        let mut r = target_receipt();
        r.items.push(item("Gatorade", "2.25"));
        r.items.push(item("Bad & Item", "1.00"));
        assert_eq!(
            validate_receipt(&r),
            Err(ValidationError::InvalidItemDescription { index: 2 })
        );

        let mut r = target_receipt();
        r.items.push(item("Gatorade", "2.5"));
        assert_eq!(
            validate_receipt(&r),
            Err(ValidationError::InvalidItemPrice { index: 1 })
        );
    }

    #[test]
    fn test_first_failing_item_wins() {
        let mut r = target_receipt();
        r.items = vec![item("ok", "1.0"), item("bad!", "1.00")];
        assert_eq!(
            validate_receipt(&r),
            Err(ValidationError::InvalidItemPrice { index: 0 })
        );
    }

    #[test]
    fn test_total_amount() {
        assert!(is_valid_amount("0.00"));
        assert!(is_valid_amount("1234.56"));
        assert!(!is_valid_amount("6.4"));
        assert!(!is_valid_amount("6"));
        assert!(!is_valid_amount(".49"));
        assert!(!is_valid_amount("-6.49"));
        assert!(!is_valid_amount("6.499"));

        let mut r = target_receipt();
        r.total = "6.4".to_string();
        assert_eq!(validate_receipt(&r), Err(ValidationError::InvalidTotal));
    }

    #[test]
    fn test_items_checked_before_total() {
        let mut r = target_receipt();
        r.items[0].price = "abc".to_string();
        r.total = "abc".to_string();
        assert_eq!(
            validate_receipt(&r),
            Err(ValidationError::InvalidItemPrice { index: 0 })
        );
    }
}
