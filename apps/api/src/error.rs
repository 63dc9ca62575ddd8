//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Receipt API                        │
//! │                                                                         │
//! │  Client                      Rust Backend                               │
//! │  ──────                      ────────────                               │
//! │                                                                         │
//! │  POST /receipts/process                                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Handler → Result<Json<T>, ApiError>                             │  │
//! │  │         │                                                        │  │
//! │  │  Bad JSON? ─────────── serde_json::Error ─────────┐             │  │
//! │  │         │                                          │             │  │
//! │  │  Validation? ───────── CoreError::Validation ──── ApiError ────►│  │
//! │  │         │                                          │             │  │
//! │  │  Unknown id? ───────── CoreError::ReceiptNotFound ┘             │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄──── 422 / 400 / 404 + {"code": "...", "message": "..."}             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Status Mapping
//! - `MISSING_FIELDS` → 422
//! - every other validation code and `INVALID_PAYLOAD` → 400
//! - `NOT_FOUND` → 404
//! - `INTERNAL` → 500

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use receipt_core::{CoreError, ValidationError};
use serde::Serialize;

/// API error returned from handlers.
///
/// ## Serialization
/// This is what the client receives when a request fails:
/// ```json
/// {
///   "code": "INVALID_TOTAL",
///   "message": "invalid total amount format (expected XX.XX)"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A required receipt field is empty (422)
    MissingFields,

    /// Retailer has disallowed characters (400)
    InvalidRetailer,

    /// Purchase date is not YYYY-MM-DD (400)
    InvalidDate,

    /// Purchase time is not HH:MM (400)
    InvalidTime,

    /// An item description has disallowed characters (400)
    InvalidItemDescription,

    /// An item price is not XX.XX (400)
    InvalidItemPrice,

    /// Total is not XX.XX (400)
    InvalidTotal,

    /// Body is not a JSON receipt (400)
    InvalidPayload,

    /// Receipt id was never issued (404)
    NotFound,

    /// Internal server error (500)
    Internal,
}

impl ErrorCode {
    /// HTTP status for this code.
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::MissingFields => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::InvalidRetailer
            | ErrorCode::InvalidDate
            | ErrorCode::InvalidTime
            | ErrorCode::InvalidItemDescription
            | ErrorCode::InvalidItemPrice
            | ErrorCode::InvalidTotal
            | ErrorCode::InvalidPayload => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("No receipt found for that ID: {}", id),
        )
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        self.code.status()
    }
}

/// Converts validation failures to API errors, one code per rule.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        let code = match err {
            ValidationError::MissingFields => ErrorCode::MissingFields,
            ValidationError::InvalidRetailer => ErrorCode::InvalidRetailer,
            ValidationError::InvalidDate => ErrorCode::InvalidDate,
            ValidationError::InvalidTime => ErrorCode::InvalidTime,
            ValidationError::InvalidItemDescription { .. } => ErrorCode::InvalidItemDescription,
            ValidationError::InvalidItemPrice { .. } => ErrorCode::InvalidItemPrice,
            ValidationError::InvalidTotal => ErrorCode::InvalidTotal,
        };
        ApiError::new(code, err.to_string())
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ReceiptNotFound(id) => ApiError::not_found(&id),
            CoreError::Validation(e) => e.into(),
        }
    }
}

/// A body that is not a JSON receipt.
impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::new(
            ErrorCode::InvalidPayload,
            format!("Invalid JSON payload: {}", err),
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_is_422() {
        let err: ApiError = CoreError::Validation(ValidationError::MissingFields).into();
        assert_eq!(err.code, ErrorCode::MissingFields);
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_other_validation_errors_are_400() {
        let all = [
            ValidationError::InvalidRetailer,
            ValidationError::InvalidDate,
            ValidationError::InvalidTime,
            ValidationError::InvalidItemDescription { index: 0 },
            ValidationError::InvalidItemPrice { index: 1 },
            ValidationError::InvalidTotal,
        ];
        for validation in all {
            let err: ApiError = validation.into();
            assert_eq!(err.status(), StatusCode::BAD_REQUEST, "{:?}", validation);
        }
    }

    #[test]
    fn test_not_found_is_404() {
        let err: ApiError = CoreError::ReceiptNotFound("abc".to_string()).into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message, "No receipt found for that ID: abc");
    }

    #[test]
    fn test_serialized_shape() {
        let err: ApiError = ValidationError::InvalidTotal.into();
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "INVALID_TOTAL");
        assert_eq!(json["message"], "invalid total amount format (expected XX.XX)");
    }

    #[test]
    fn test_bad_json_is_invalid_payload() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ApiError = parse_err.into();
        assert_eq!(err.code, ErrorCode::InvalidPayload);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
