//! # Error Types
//!
//! Domain-specific error types for schoolcart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  schoolcart-core errors (this file)                                    │
//! │  ├── CoreError        - Store operation failures                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  admin app errors                                                      │
//! │  └── ApiError         - What the dashboard sees (serialized)           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Dashboard              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Stores never panic and never fail halfway: an `Err` always means the
//! collection was left exactly as it was.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors returned by store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// No product with this id.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// No category with this id.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Category is still referenced by products and was not deleted.
    ///
    /// ## User Workflow
    /// ```text
    /// Delete "Writing" category
    ///      │
    ///      ▼
    /// 2 products still use key "writing"
    ///      │
    ///      ▼
    /// CategoryInUse { key: "writing", product_count: 2 }
    ///      │
    ///      ▼
    /// UI shows: "Category writing is used by 2 products"
    /// ```
    #[error("Category {key} is used by {product_count} products")]
    CategoryInUse { key: String, product_count: usize },

    /// No offer with this id.
    #[error("Offer not found: {0}")]
    OfferNotFound(String),

    /// No order with this id.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Order was already completed.
    #[error("Order {0} is already completed")]
    OrderAlreadyCompleted(String),

    /// No notification with this id.
    #[error("Notification not found: {0}")]
    NotificationNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by [`crate::validation`] before a command reaches a store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. a birthday that is not MM-DD).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Two fields that must agree do not.
    #[error("{field} does not match {other}")]
    Mismatch { field: String, other: String },

    /// Duplicate value (e.g. a category name that already exists).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
