//! # Error Types
//!
//! Domain-specific error types for receipt-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  receipt-core errors (this file)                                       │
//! │  ├── CoreError        - Service-level failures (lookup miss)           │
//! │  └── ValidationError  - First failing validation rule                  │
//! │                                                                         │
//! │  receipt-api errors (app crate)                                        │
//! │  └── ApiError         - What HTTP clients see (code + message)         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → HTTP status + JSON     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. One variant per rule, so callers never match on message text
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors returned by the receipt service operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// No receipt was ever stored under this identifier.
    #[error("No receipt found for that ID: {0}")]
    ReceiptNotFound(String),

    /// The submitted receipt failed validation and was not stored.
    #[error("The receipt is invalid: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Receipt validation failures.
///
/// Exactly one variant is reported per rejected receipt: the first rule that
/// fails, in the order the validator checks them.
///
/// ## Rule Order
/// ```text
/// MissingFields → InvalidRetailer → InvalidDate → InvalidTime
///     → (per item) InvalidItemDescription / InvalidItemPrice
///     → InvalidTotal
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is empty, or the receipt has no items.
    #[error("missing required fields")]
    MissingFields,

    /// Retailer contains characters other than word chars, spaces, `-` and `&`.
    #[error("invalid retailer name")]
    InvalidRetailer,

    /// Purchase date is not a real `YYYY-MM-DD` calendar date.
    #[error("invalid purchase date format (expected YYYY-MM-DD)")]
    InvalidDate,

    /// Purchase time is not a 24-hour `HH:MM` time.
    #[error("invalid purchase time format (expected HH:MM)")]
    InvalidTime,

    /// An item description contains disallowed characters.
    #[error("invalid description for item {index}")]
    InvalidItemDescription { index: usize },

    /// An item price is not a two-decimal amount.
    #[error("invalid price format for item {index} (expected XX.XX)")]
    InvalidItemPrice { index: usize },

    /// Total is not a two-decimal amount.
    #[error("invalid total amount format (expected XX.XX)")]
    InvalidTotal,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
