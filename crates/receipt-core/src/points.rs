//! # Points Module
//!
//! Computes the reward points a receipt earns.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Rule                                         Points                    │
//! │  ───────────────────────────────────────────  ───────────────────────   │
//! │  ASCII letter or digit in retailer name       +1 each                   │
//! │  Total is a whole amount (x.00)               +50                       │
//! │  Total is a multiple of 0.25                  +25                       │
//! │  Every two items                              +5                        │
//! │  Trimmed description length % 3 == 0          +ceil(price × 0.2)        │
//! │  Purchase day-of-month is odd                 +6                        │
//! │  Purchase time in [14:00, 16:00)              +10                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rules are independent and additive. The calculator never fails: a field
//! that does not parse simply earns nothing for the rule that reads it.
//!
//! ## Example
//! ```rust
//! use receipt_core::{points, Item, Receipt};
//!
//! let receipt = Receipt {
//!     retailer: "M&M Corner Market".to_string(),
//!     purchase_date: "2022-03-20".to_string(),
//!     purchase_time: "14:33".to_string(),
//!     items: vec![
//!         Item { short_description: "Gatorade".to_string(), price: "2.25".to_string() },
//!         Item { short_description: "Gatorade".to_string(), price: "2.25".to_string() },
//!         Item { short_description: "Gatorade".to_string(), price: "2.25".to_string() },
//!         Item { short_description: "Gatorade".to_string(), price: "2.25".to_string() },
//!     ],
//!     total: "9.00".to_string(),
//! };
//!
//! assert_eq!(points::compute(&receipt), 109);
//! ```

use chrono::{Datelike, NaiveTime, Timelike};

use crate::money::{self, Money, ParseMoneyError};
use crate::types::{Item, Receipt};

// =============================================================================
// Business Constants
// =============================================================================

/// Bonus for a total with no cents.
pub const ROUND_TOTAL_POINTS: u64 = 50;

/// Bonus for a total that is a multiple of [`QUARTER`].
pub const QUARTER_TOTAL_POINTS: u64 = 25;

/// Points per pair of items.
pub const ITEM_PAIR_POINTS: u64 = 5;

/// Bonus for an odd purchase day.
pub const ODD_DAY_POINTS: u64 = 6;

/// Bonus for buying inside the afternoon window.
pub const AFTERNOON_POINTS: u64 = 10;

/// Step for the quarter rule.
pub const QUARTER: Money = Money::from_cents(25);

/// Description lengths that are a multiple of this earn the price bonus.
pub const DESCRIPTION_LENGTH_DIVISOR: usize = 3;

/// ceil(price × 0.2) in points is ceil(cents / 500).
const CENTS_PER_DESCRIPTION_POINT: u128 = 500;

/// Afternoon window start (inclusive): 14:00.
const AFTERNOON_START_HOUR: u32 = 14;

/// Afternoon window end (exclusive): 16:00.
const AFTERNOON_END_HOUR: u32 = 16;

// =============================================================================
// Breakdown
// =============================================================================

/// Points earned by each rule for a single receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointsBreakdown {
    pub retailer_name: u64,
    pub round_total: u64,
    pub quarter_total: u64,
    pub item_pairs: u64,
    pub item_descriptions: u64,
    pub odd_day: u64,
    pub afternoon: u64,
}

impl PointsBreakdown {
    /// Sum of every rule, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        [
            self.retailer_name,
            self.round_total,
            self.quarter_total,
            self.item_pairs,
            self.item_descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }
}

// =============================================================================
// Calculator
// =============================================================================

/// Total points for a receipt.
pub fn compute(receipt: &Receipt) -> u64 {
    compute_breakdown(receipt).total()
}

/// Points for a receipt, itemized by rule.
pub fn compute_breakdown(receipt: &Receipt) -> PointsBreakdown {
    // both total rules depend only on the cents, so the dollars may be any size
    let total_cents = money::fractional_part(&receipt.total).ok();

    PointsBreakdown {
        retailer_name: retailer_name_points(&receipt.retailer),
        round_total: total_cents.map_or(0, round_total_points),
        quarter_total: total_cents.map_or(0, quarter_total_points),
        item_pairs: item_pair_points(receipt.items.len()),
        item_descriptions: receipt
            .items
            .iter()
            .map(item_description_points)
            .fold(0, u64::saturating_add),
        odd_day: receipt
            .parsed_purchase_date()
            .map_or(0, |date| odd_day_points(date.day())),
        afternoon: receipt.parsed_purchase_time().map_or(0, afternoon_points),
    }
}

// =============================================================================
// Individual Rules
// =============================================================================

/// One point per ASCII letter or digit.
///
/// Non-ASCII letters do not count.
pub fn retailer_name_points(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

pub fn round_total_points(total: Money) -> u64 {
    if total.is_whole() {
        ROUND_TOTAL_POINTS
    } else {
        0
    }
}

pub fn quarter_total_points(total: Money) -> u64 {
    if total.is_multiple_of(QUARTER) {
        QUARTER_TOTAL_POINTS
    } else {
        0
    }
}

pub fn item_pair_points(item_count: usize) -> u64 {
    (item_count / 2) as u64 * ITEM_PAIR_POINTS
}

/// `ceil(price × 0.2)` when the trimmed description length is a multiple of 3.
///
/// Prices too large for a `u64` point count saturate at `u64::MAX`.
///
/// ## Example
/// ```rust
/// use receipt_core::points::item_description_points;
/// use receipt_core::Item;
///
/// let item = Item {
///     short_description: "   Klarbrunn 12-PK 12 FL OZ  ".to_string(),
///     price: "12.00".to_string(),
/// };
/// // "Klarbrunn 12-PK 12 FL OZ" is 24 chars; 12.00 × 0.2 = 2.4 → 3
/// assert_eq!(item_description_points(&item), 3);
/// ```
pub fn item_description_points(item: &Item) -> u64 {
    if item.short_description.trim().chars().count() % DESCRIPTION_LENGTH_DIVISOR != 0 {
        return 0;
    }

    match money::wide_cents(&item.price) {
        Ok(cents) => {
            u64::try_from(cents.div_ceil(CENTS_PER_DESCRIPTION_POINT)).unwrap_or(u64::MAX)
        }
        Err(ParseMoneyError::Overflow(_)) => u64::MAX,
        Err(_) => 0,
    }
}

pub fn odd_day_points(day_of_month: u32) -> u64 {
    if day_of_month % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    }
}

/// Ten points for 14:00 through 15:59.
pub fn afternoon_points(time: NaiveTime) -> u64 {
    if (AFTERNOON_START_HOUR..AFTERNOON_END_HOUR).contains(&time.hour()) {
        AFTERNOON_POINTS
    } else {
        0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(description: &str, price: &str) -> Item {
        Item {
            short_description: description.to_string(),
            price: price.to_string(),
        }
    }

    #[test]
    fn test_target_mountain_dew_scores_12() {
        let receipt = Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            items: vec![item("Mountain Dew 12PK", "6.49")],
            total: "6.49".to_string(),
        };

        let breakdown = compute_breakdown(&receipt);
        assert_eq!(
            breakdown,
            PointsBreakdown {
                retailer_name: 6,
                round_total: 0,
                quarter_total: 0,
                item_pairs: 0,
                item_descriptions: 0,
                odd_day: 6,
                afternoon: 0,
            }
        );
        // "Mountain Dew 12PK" is 17 characters, so the description rule is skipped
        assert_eq!(compute(&receipt), 12);
    }

    #[test]
    fn test_target_five_items_scores_28() {
        let receipt = Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            items: vec![
                item("Mountain Dew 12PK", "6.49"),
                item("Emils Cheese Pizza", "12.25"),
                item("Knorr Creamy Chicken", "1.26"),
                item("Doritos Nacho Cheese", "3.35"),
                item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ],
            total: "35.35".to_string(),
        };

        // 6 retailer + 10 pairs + 3 + 3 descriptions + 6 odd day
        assert_eq!(compute(&receipt), 28);
    }

    #[test]
    fn test_corner_market_scores_109() {
        let receipt = Receipt {
            retailer: "M&M Corner Market".to_string(),
            purchase_date: "2022-03-20".to_string(),
            purchase_time: "14:33".to_string(),
            items: vec![item("Gatorade", "2.25"); 4],
            total: "9.00".to_string(),
        };

        let breakdown = compute_breakdown(&receipt);
        assert_eq!(breakdown.retailer_name, 14);
        assert_eq!(breakdown.round_total, 50);
        assert_eq!(breakdown.quarter_total, 25);
        assert_eq!(breakdown.item_pairs, 10);
        assert_eq!(breakdown.item_descriptions, 0);
        assert_eq!(breakdown.odd_day, 0);
        assert_eq!(breakdown.afternoon, 10);
        assert_eq!(breakdown.total(), 109);
    }

    #[test]
    fn test_retailer_name_counts_ascii_alphanumerics_only() {
        assert_eq!(retailer_name_points("Target"), 6);
        assert_eq!(retailer_name_points("M&M Corner Market"), 14);
        assert_eq!(retailer_name_points("7-Eleven"), 7);
        assert_eq!(retailer_name_points("Café"), 3);
        assert_eq!(retailer_name_points(" - & _ "), 0);
    }

    #[test]
    fn test_total_rules() {
        assert_eq!(round_total_points(Money::from_cents(900)), 50);
        assert_eq!(round_total_points(Money::from_cents(925)), 0);

        assert_eq!(quarter_total_points(Money::from_cents(925)), 25);
        assert_eq!(quarter_total_points(Money::from_cents(900)), 25);
        assert_eq!(quarter_total_points(Money::from_cents(910)), 0);
    }

    #[test]
    fn test_item_pairs() {
        assert_eq!(item_pair_points(0), 0);
        assert_eq!(item_pair_points(1), 0);
        assert_eq!(item_pair_points(2), 5);
        assert_eq!(item_pair_points(5), 10);
    }

    #[test]
    fn test_item_description_uses_exact_ceiling() {
        // 15.00 × 0.2 is exactly 3, not 3.0000000000000004
        assert_eq!(item_description_points(&item("abc", "15.00")), 3);
        assert_eq!(item_description_points(&item("abc", "15.01")), 4);
        assert_eq!(item_description_points(&item("abc", "0.00")), 0);
        assert_eq!(item_description_points(&item("abc", "0.01")), 1);
        // length 4 earns nothing
        assert_eq!(item_description_points(&item("abcd", "15.00")), 0);
        // unparseable price earns nothing
        assert_eq!(item_description_points(&item("abc", "n/a")), 0);
    }

    #[test]
    fn test_odd_day_and_afternoon() {
        assert_eq!(odd_day_points(1), 6);
        assert_eq!(odd_day_points(20), 0);
        assert_eq!(odd_day_points(31), 6);

        let at = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
        assert_eq!(afternoon_points(at(13, 59)), 0);
        assert_eq!(afternoon_points(at(14, 0)), 10);
        assert_eq!(afternoon_points(at(15, 59)), 10);
        assert_eq!(afternoon_points(at(16, 0)), 0);
    }

    #[test]
    fn test_malformed_fields_contribute_zero() {
        let receipt = Receipt {
            retailer: "Shop".to_string(),
            purchase_date: "yesterday".to_string(),
            purchase_time: "later".to_string(),
            items: vec![item("abc", "free")],
            total: "lots".to_string(),
        };

        let breakdown = compute_breakdown(&receipt);
        assert_eq!(breakdown.retailer_name, 4);
        assert_eq!(breakdown.total(), 4);
    }

    #[test]
    fn test_amounts_beyond_i64_still_score() {
        let receipt = Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:00".to_string(),
            items: vec![item("abc", "1000000000000000000.00")],
            total: "100000000000000000000.00".to_string(),
        };
        assert_eq!(crate::validation::validate_receipt(&receipt), Ok(()));

        let breakdown = compute_breakdown(&receipt);
        assert_eq!(breakdown.round_total, 50);
        assert_eq!(breakdown.quarter_total, 25);
        // 10^20 cents / 500
        assert_eq!(breakdown.item_descriptions, 200_000_000_000_000_000);
        assert_eq!(breakdown.total(), 200_000_000_000_000_087);
    }

    #[test]
    fn test_oversized_price_saturates() {
        let price = format!("{}.00", "9".repeat(40));
        let receipt = Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:00".to_string(),
            items: vec![item("abc", &price), item("xyz", &price)],
            total: price.clone(),
        };

        let breakdown = compute_breakdown(&receipt);
        assert_eq!(breakdown.item_descriptions, u64::MAX);
        assert_eq!(breakdown.round_total, 50);
        assert_eq!(compute(&receipt), u64::MAX);
    }

    #[test]
    fn test_empty_receipt_scores_zero() {
        assert_eq!(compute(&Receipt::default()), 0);
    }
}
