//! # Money Module
//!
//! Provides the `Money` type for the amounts printed on a receipt.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With f64:                                                              │
//! │    15.00 * 0.2 = 3.0000000000000004  → ceil() = 4  ❌ WRONG!            │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "15.00" → 1500 cents                                                 │
//! │    ceil(1500 / 500) = 3                                     ✅          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Receipts carry amounts as strings like `"6.49"`. They are parsed once into
//! cents and every points rule works on the integer.
//!
//! ## Usage
//! ```rust
//! use receipt_core::money::Money;
//!
//! let total: Money = "35.25".parse().unwrap();
//! assert_eq!(total.cents(), 3525);
//! assert!(total.is_multiple_of(Money::from_cents(25)));
//! assert!(!total.is_whole());
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// Parsed values are never negative: the receipt format has no sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// let price = Money::from_cents(649); // Represents $6.49
    /// assert_eq!(price.cents(), 649);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// True when the amount has no fractional cents (e.g. `"9.00"`).
    #[inline]
    pub const fn is_whole(&self) -> bool {
        self.0 % 100 == 0
    }

    /// True when the amount divides evenly into steps of `step`.
    ///
    /// A zero step never divides anything.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// let quarter = Money::from_cents(25);
    /// assert!(Money::from_cents(1275).is_multiple_of(quarter));
    /// assert!(!Money::from_cents(1276).is_multiple_of(quarter));
    /// ```
    #[inline]
    pub const fn is_multiple_of(&self, step: Money) -> bool {
        step.0 != 0 && self.0 % step.0 == 0
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Why a string could not be read as an amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoneyError {
    #[error("amount is empty")]
    Empty,

    #[error("amount '{0}' is not a decimal number with at most two fractional digits")]
    Malformed(String),

    #[error("amount '{0}' is too large")]
    Overflow(String),
}

/// Parses `"<digits>"`, `"<digits>.<d>"` or `"<digits>.<dd>"` into cents.
///
/// Accepts more than the receipt validation pattern, which requires exactly
/// two fractional digits.
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (whole, fraction_cents) = split_amount(s)?;

        let overflow = || ParseMoneyError::Overflow(s.to_string());
        let whole: i64 = whole.parse().map_err(|_| overflow())?;
        whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(fraction_cents))
            .map(Money)
            .ok_or_else(overflow)
    }
}

/// Cents past the last whole dollar (0-99) of an amount string.
///
/// The dollar digits are checked but never converted, so this works for
/// amounts far beyond what [`Money`] can hold.
///
/// ## Example
/// ```rust
/// use receipt_core::money::{fractional_part, Money};
///
/// let cents = fractional_part("100000000000000000000.25").unwrap();
/// assert_eq!(cents, Money::from_cents(25));
/// ```
pub fn fractional_part(s: &str) -> Result<Money, ParseMoneyError> {
    split_amount(s).map(|(_, cents)| Money(cents))
}

/// Total cents of an amount string as `u128`.
///
/// Holds any amount with up to 36 dollar digits; longer ones are `Overflow`.
pub fn wide_cents(s: &str) -> Result<u128, ParseMoneyError> {
    let (whole, fraction_cents) = split_amount(s)?;

    let overflow = || ParseMoneyError::Overflow(s.to_string());
    let whole: u128 = whole.parse().map_err(|_| overflow())?;
    whole
        .checked_mul(100)
        .and_then(|c| c.checked_add(fraction_cents as u128))
        .ok_or_else(overflow)
}

/// Splits an amount into its dollar digits and its cents.
fn split_amount(s: &str) -> Result<(&str, i64), ParseMoneyError> {
    if s.is_empty() {
        return Err(ParseMoneyError::Empty);
    }

    let malformed = || ParseMoneyError::Malformed(s.to_string());
    let (whole, fraction) = match s.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (s, None),
    };

    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }

    let fraction_cents = match fraction {
        None => 0,
        Some(f) if (1..=2).contains(&f.len()) && f.bytes().all(|b| b.is_ascii_digit()) => {
            // "5" means 50 cents, "05" means 5 cents
            let value: i64 = f.parse().map_err(|_| malformed())?;
            if f.len() == 1 {
                value * 10
            } else {
                value
            }
        }
        Some(_) => return Err(malformed()),
    };

    Ok((whole, fraction_cents))
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders the amount the way receipts print it: `"6.49"`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
