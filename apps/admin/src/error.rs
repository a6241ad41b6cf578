//! # API Error Type
//!
//! Unified error type for admin commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in SchoolCart                             │
//! │                                                                         │
//! │  Dashboard                   Rust Backend                               │
//! │  ─────────                   ────────────                               │
//! │                                                                         │
//! │  update_product("42", ...)                                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Bad input? ──── ValidationError::Required ─────┐               │  │
//! │  │         │                                       │               │  │
//! │  │         ▼                                       ▼               │  │
//! │  │  Unknown id? ─── CoreError::ProductNotFound ── ApiError ───────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  { code: "NOT_FOUND", message: "Product not found: 42" }               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::warn;

use schoolcart_core::{CoreError, ValidationError};

/// API error returned from admin commands.
///
/// ## Serialization
/// This is what the dashboard receives when a command fails:
/// ```json
/// {
///   "code": "CONFLICT",
///   "message": "Category writing is used by 2 products"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
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
    /// Entity not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Operation blocked by references to the entity
    Conflict,

    /// Operation not allowed in the entity's current state
    BusinessLogic,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let api_error = match &err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", id),
            CoreError::CategoryNotFound(id) => ApiError::not_found("Category", id),
            CoreError::OfferNotFound(id) => ApiError::not_found("Offer", id),
            CoreError::OrderNotFound(id) => ApiError::not_found("Order", id),
            CoreError::NotificationNotFound(id) => ApiError::not_found("Notification", id),
            CoreError::CategoryInUse { .. } => ApiError::new(ErrorCode::Conflict, err.to_string()),
            CoreError::OrderAlreadyCompleted(_) => {
                ApiError::new(ErrorCode::BusinessLogic, err.to_string())
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        };

        warn!(code = ?api_error.code, message = %api_error.message, "Command rejected");
        api_error
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::from(CoreError::from(err))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
