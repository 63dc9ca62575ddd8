//! # Domain Types
//!
//! Core domain types used throughout the receipt processor.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐        ┌─────────────────────┐                │
//! │  │      Receipt        │ 1    n │        Item         │                │
//! │  │  ─────────────────  │───────►│  ─────────────────  │                │
//! │  │  retailer           │        │  shortDescription   │                │
//! │  │  purchaseDate       │        │  price  ("6.49")    │                │
//! │  │  purchaseTime       │        └─────────────────────┘                │
//! │  │  total   ("6.49")   │                                                │
//! │  └─────────────────────┘        ┌─────────────────────┐                │
//! │                                 │     ReceiptId       │                │
//! │                                 │  UUID v4 (opaque)   │                │
//! │                                 └─────────────────────┘                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Raw Strings on Purpose
//! Every receipt field is kept exactly as submitted. Validation decides
//! whether the strings are well-formed; the points rules parse them again
//! through [`Receipt::total_amount`], [`Item::price_amount`] and the
//! `parsed_*` accessors.

use std::borrow::Borrow;
use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;
use crate::validation::{parse_purchase_date, parse_purchase_time};

// =============================================================================
// Receipt
// =============================================================================

/// A purchase receipt as submitted by a client.
///
/// Fields missing from the JSON body deserialize to empty values so that
/// the validator reports them as `MissingFields`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct Receipt {
    /// Store name, e.g. `"M&M Corner Market"`.
    pub retailer: String,

    /// Purchase date, `YYYY-MM-DD`.
    pub purchase_date: String,

    /// Purchase time, 24-hour `HH:MM`.
    pub purchase_time: String,

    /// Purchased items in receipt order.
    pub items: Vec<Item>,

    /// Amount paid, two decimals.
    pub total: String,
}

impl Receipt {
    /// Parsed total, or `None` when the string is not an amount.
    pub fn total_amount(&self) -> Option<Money> {
        self.total.parse().ok()
    }

    /// Parsed purchase date, or `None` when it is not a `YYYY-MM-DD` date.
    pub fn parsed_purchase_date(&self) -> Option<NaiveDate> {
        parse_purchase_date(&self.purchase_date)
    }

    /// Parsed purchase time, or `None` when it is not an `HH:MM` time.
    pub fn parsed_purchase_time(&self) -> Option<NaiveTime> {
        parse_purchase_time(&self.purchase_time)
    }
}

// =============================================================================
// Item
// =============================================================================

/// One line on a receipt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct Item {
    /// Product description, e.g. `"Mountain Dew 12PK"`.
    pub short_description: String,

    /// Line price, two decimals.
    pub price: String,
}

impl Item {
    /// Parsed price, or `None` when the string is not an amount.
    pub fn price_amount(&self) -> Option<Money> {
        self.price.parse().ok()
    }
}

// =============================================================================
// Receipt Identifier
// =============================================================================

/// Opaque identifier assigned to a receipt when it is stored.
///
/// Generated as a random UUID v4. Callers treat it as an opaque token and
/// never parse it; lookups accept any string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReceiptId(String);

impl ReceiptId {
    /// Generates a fresh identifier.
    pub fn generate() -> Self {
        ReceiptId(Uuid::new_v4().to_string())
    }

    /// Returns the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the identifier, returning its text.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for ReceiptId {
    fn from(id: String) -> Self {
        ReceiptId(id)
    }
}

impl From<&str> for ReceiptId {
    fn from(id: &str) -> Self {
        ReceiptId(id.to_string())
    }
}

/// Lets `HashMap<ReceiptId, _>` be queried with a plain `&str`.
impl Borrow<str> for ReceiptId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
