//! # Receipt API
//!
//! HTTP server for the receipt processor.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Receipt API                                     │
//! │                                                                         │
//! │  main.rs                                                                │
//! │    ├── logging::init(LogFormat)                                         │
//! │    ├── ApiConfig::load()            BIND_ADDR, HTTP_PORT, LOG_FORMAT    │
//! │    ├── InMemoryReceiptStore                                             │
//! │    ├── AppState { receipts, health }                                    │
//! │    └── axum::serve(routes::router(state))                               │
//! │                                                                         │
//! │  routes ──► services::ReceiptService ──► dyn ReceiptStore               │
//! │    │              │                                                     │
//! │    │              └── receipt_core::{validation, points}                │
//! │    └── error::ApiError  (CoreError → status + {"code", "message"})      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::Router;
use receipt_store::ReceiptStore;

use crate::services::{HealthService, ReceiptService};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub receipts: ReceiptService,
    pub health: HealthService,
}

impl AppState {
    /// Wires the services over `store`.
    pub fn new(store: Arc<dyn ReceiptStore>) -> Self {
        let receipts = ReceiptService::new(store);
        let health = HealthService::new(receipts.clone());
        AppState { receipts, health }
    }
}

/// Builds the full application over `store`.
pub fn app(store: Arc<dyn ReceiptStore>) -> Router {
    routes::router(Arc::new(AppState::new(store)))
}
