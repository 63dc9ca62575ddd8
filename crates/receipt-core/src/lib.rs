//! # receipt-core: Pure Business Logic for the Receipt Processor
//!
//! This crate holds the rules of the receipt processor as pure functions with
//! zero I/O dependencies: what a well-formed receipt looks like, and how many
//! reward points a receipt earns.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Receipt Processor Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP API (apps/api, axum)                    │   │
//! │  │    POST /receipts/process        GET /receipts/{id}/points     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    ReceiptService                               │   │
//! │  │    validate → generate id → save        get → compute points   │   │
//! │  └──────────────┬──────────────────────────────────┬───────────────┘   │
//! │                 │                                  │                    │
//! │  ┌──────────────▼──────────────────┐  ┌────────────▼───────────────┐   │
//! │  │   ★ receipt-core (THIS CRATE) ★ │  │   receipt-store            │   │
//! │  │                                 │  │   RwLock<HashMap<Id, ..>>  │   │
//! │  │  types · money · validation ·   │  └────────────────────────────┘   │
//! │  │  points · error                 │                                   │
//! │  │                                 │                                   │
//! │  │  NO I/O • NO STORAGE • PURE     │                                   │
//! │  └─────────────────────────────────┘                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Receipt, Item and ReceiptId
//! - [`money`] - Money type parsed from two-decimal strings into integer cents
//! - [`validation`] - Fail-fast receipt validation
//! - [`points`] - Reward points rules
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same receipt in, same points out
//! 2. **No I/O**: storage and transport live in other crates
//! 3. **Integer Money**: amounts are cents (i64), never floats
//! 4. **Explicit Errors**: every rejection names the rule that failed
//!
//! ## Example Usage
//!
//! ```rust
//! use receipt_core::{points, validation, Item, Receipt};
//!
//! let receipt = Receipt {
//!     retailer: "Target".to_string(),
//!     purchase_date: "2022-01-01".to_string(),
//!     purchase_time: "13:01".to_string(),
//!     items: vec![Item {
//!         short_description: "Mountain Dew 12PK".to_string(),
//!         price: "6.49".to_string(),
//!     }],
//!     total: "6.49".to_string(),
//! };
//!
//! validation::validate_receipt(&receipt).unwrap();
//! assert_eq!(points::compute(&receipt), 12);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod points;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use points::PointsBreakdown;
pub use types::*;
