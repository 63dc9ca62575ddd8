//! Service layer between HTTP handlers and storage.
//!
//! This module contains the services the Receipt API routes call into.

pub mod health_service;
pub mod receipt_service;

pub use health_service::{HealthReport, HealthService};
pub use receipt_service::ReceiptService;
