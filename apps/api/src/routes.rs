//! # HTTP Routes
//!
//! Axum router and handlers for the receipt endpoints.
//!
//! ## Endpoints
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Receipt API Routes                               │
//! │                                                                         │
//! │  POST /receipts/process      body: Receipt JSON                         │
//! │       ├── 200 {"id": "7fb1377b-…"}                                      │
//! │       ├── 422 MISSING_FIELDS                                            │
//! │       └── 400 INVALID_* / INVALID_PAYLOAD                               │
//! │                                                                         │
//! │  GET  /receipts/{id}/points                                             │
//! │       ├── 200 {"points": 28}                                            │
//! │       └── 404 NOT_FOUND                                                 │
//! │                                                                         │
//! │  GET  /health                                                           │
//! │       └── 200 {"status": "ok", "receipts": 3, "uptimeSecs": 42}         │
//! │                                                                         │
//! │  Every route runs inside recover_panics: a panicking handler becomes   │
//! │  500 INTERNAL and the server keeps serving.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Request, State},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use futures_util::FutureExt;
use receipt_core::{Receipt, ReceiptId};
use serde::{Deserialize, Serialize};
use tracing::error;
use ts_rs::TS;

use crate::error::ApiError;
use crate::services::HealthReport;
use crate::AppState;

// =============================================================================
// Response Bodies
// =============================================================================

/// Body returned by `POST /receipts/process`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProcessReceiptResponse {
    pub id: ReceiptId,
}

/// Body returned by `GET /receipts/{id}/points`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PointsResponse {
    #[ts(type = "number")]
    pub points: u64,
}

// =============================================================================
// Router
// =============================================================================

/// Builds the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt_handler))
        .route("/receipts/{id}/points", get(points_handler))
        .route("/health", get(health_handler))
        .layer(middleware::from_fn(recover_panics))
        .with_state(state)
}

// =============================================================================
// Handlers
// =============================================================================

/// Validates and stores a receipt.
///
/// The body is parsed by hand rather than through the `Json` extractor so
/// a missing or wrong `Content-Type` header is not itself an error.
async fn process_receipt_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ProcessReceiptResponse>, ApiError> {
    let receipt: Receipt = serde_json::from_slice(&body)?;
    let id = state.receipts.process_receipt(receipt).await?;
    Ok(Json(ProcessReceiptResponse { id }))
}

/// Scores a stored receipt.
async fn points_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    let points = state.receipts.get_receipt_points(&id).await?;
    Ok(Json(PointsResponse { points }))
}

/// Health check endpoint.
async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthReport> {
    Json(state.health.check().await)
}

// =============================================================================
// Panic Recovery
// =============================================================================

/// Middleware that turns a panicking handler into a 500 response.
pub async fn recover_panics(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(response) => response,
        Err(panic) => {
            error!(
                %method,
                %path,
                panic = %panic_message(panic.as_ref()),
                "Recovered from panic in request handler"
            );
            ApiError::internal("Internal server error").into_response()
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
