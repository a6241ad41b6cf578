//! # Validation Module
//!
//! Input rules for the dashboard forms.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Dashboard form                                               │
//! │  └── Immediate user feedback (toast)                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Admin commands                                               │
//! │  └── THIS MODULE: required fields, ranges, duplicates                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Stores                                                       │
//! │  └── No validation; every operation is total over its state            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use schoolcart_core::validation::{validate_password_change, validate_product_name};
//!
//! assert!(validate_product_name("Camlin Geometry Box").is_ok());
//! assert!(validate_password_change("old-secret", "short", "short").is_err());
//! ```

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{Category, NewOffer, NewProduct, OfferKind, OfferUpdate, ProductUpdate};
use crate::{MAX_PRICE_PAISE, MAX_STOCK, MIN_PASSWORD_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

fn required(field: &str) -> ValidationError {
    ValidationError::Required {
        field: field.to_string(),
    }
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be blank
/// - At most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(required("name"));
    }

    if name.chars().count() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a new category name against the existing categories.
///
/// ## Rules
/// - Must not be blank
/// - Must not match an existing category name, ignoring case
///
/// ## Returns
/// The trimmed name, ready for `add_category`.
///
/// ## Example
/// ```rust
/// use schoolcart_core::{Category, validation::validate_category_name};
///
/// let existing = vec![Category::new("1", "Notebooks")];
/// assert_eq!(validate_category_name("  Art Supplies ", &existing).unwrap(), "Art Supplies");
/// assert!(validate_category_name("notebooks", &existing).is_err());
/// ```
pub fn validate_category_name(name: &str, existing: &[Category]) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(required("category name"));
    }

    let lowered = name.to_lowercase();
    if existing.iter().any(|c| c.name.to_lowercase() == lowered) {
        return Err(ValidationError::Duplicate {
            field: "category".to_string(),
            value: name.to_string(),
        });
    }

    Ok(name.to_string())
}

/// Validates a search query.
///
/// ## Returns
/// The trimmed query string. Empty is allowed and matches everything.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > 100 {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: 100,
        });
    }

    Ok(query.to_string())
}

/// Validates a `MM-DD` birthday string.
///
/// `02-29` is accepted.
pub fn validate_birthday(birthday: &str) -> ValidationResult<()> {
    let invalid = || ValidationError::InvalidFormat {
        field: "birthday".to_string(),
        reason: "must be MM-DD".to_string(),
    };

    if birthday.len() != 5 || birthday.as_bytes()[2] != b'-' {
        return Err(invalid());
    }

    // 2000 is a leap year, so every real birthday parses
    NaiveDate::parse_from_str(&format!("2000-{}", birthday), "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| invalid())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price.
///
/// ## Rules
/// - Zero is allowed, negative is not
/// - At most [`MAX_PRICE_PAISE`]
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() || price.paise() > MAX_PRICE_PAISE {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE_PAISE,
        });
    }

    Ok(())
}

/// Validates a stock count (at most [`MAX_STOCK`]).
pub fn validate_stock(stock: u32) -> ValidationResult<()> {
    if stock > MAX_STOCK {
        return Err(ValidationError::OutOfRange {
            field: "stock".to_string(),
            min: 0,
            max: i64::from(MAX_STOCK),
        });
    }

    Ok(())
}

/// Validates a profit margin percentage (0-100).
pub fn validate_profit_margin(pct: u32) -> ValidationResult<()> {
    if pct > 100 {
        return Err(ValidationError::OutOfRange {
            field: "profit margin".to_string(),
            min: 0,
            max: 100,
        });
    }

    Ok(())
}

// =============================================================================
// Product Payloads
// =============================================================================

/// Validates the add-product form.
///
/// ## Rules
/// - Name and category are required
/// - Price is 0 to ₹10,00,000
/// - Stock is at most 100,000
/// - Profit margin, when given, is 0-100
pub fn validate_new_product(product: &NewProduct) -> ValidationResult<()> {
    validate_product_name(&product.name)?;

    if product.category.trim().is_empty() {
        return Err(required("category"));
    }

    validate_price(product.price)?;
    validate_stock(product.stock)?;

    if let Some(pct) = product.profit_margin {
        validate_profit_margin(pct)?;
    }

    Ok(())
}

/// Validates the fields present in a product update.
pub fn validate_product_update(update: &ProductUpdate) -> ValidationResult<()> {
    if let Some(name) = &update.name {
        validate_product_name(name)?;
    }

    if let Some(category) = &update.category {
        if category.trim().is_empty() {
            return Err(required("category"));
        }
    }

    if let Some(price) = update.price {
        validate_price(price)?;
    }

    if let Some(stock) = update.stock {
        validate_stock(stock)?;
    }

    if let Some(pct) = update.profit_margin {
        validate_profit_margin(pct)?;
    }

    Ok(())
}

// =============================================================================
// Offer Payloads
// =============================================================================

/// Validates the kind-specific fields of an offer.
///
/// ## Rules
/// - Percentage: 1-100
/// - Fixed amount and bundle price: positive
/// - Buy/get quantities: positive
/// - Minimum purchase, when given: non-negative
pub fn validate_offer_kind(kind: &OfferKind) -> ValidationResult<()> {
    match kind {
        OfferKind::Percentage { percent, .. } => {
            if *percent == 0 || *percent > 100 {
                return Err(ValidationError::OutOfRange {
                    field: "discount percentage".to_string(),
                    min: 1,
                    max: 100,
                });
            }
        }
        OfferKind::Fixed { amount, .. } => {
            if amount.is_negative() || amount.is_zero() {
                return Err(ValidationError::MustBePositive {
                    field: "discount amount".to_string(),
                });
            }
        }
        OfferKind::BuyXGetY {
            buy_quantity,
            get_quantity,
        } => {
            if *buy_quantity == 0 {
                return Err(ValidationError::MustBePositive {
                    field: "buy quantity".to_string(),
                });
            }
            if *get_quantity == 0 {
                return Err(ValidationError::MustBePositive {
                    field: "get quantity".to_string(),
                });
            }
        }
        OfferKind::Bundle { bundle_price } => {
            if bundle_price.is_negative() || bundle_price.is_zero() {
                return Err(ValidationError::MustBePositive {
                    field: "bundle price".to_string(),
                });
            }
        }
    }

    if let Some(min_purchase) = kind.min_purchase() {
        if min_purchase.is_negative() {
            return Err(ValidationError::OutOfRange {
                field: "minimum purchase".to_string(),
                min: 0,
                max: i64::MAX,
            });
        }
    }

    Ok(())
}

/// Validates the offer form.
///
/// ## Rules
/// - Name, start date and end date are required (dates are not parsed)
/// - At least one product must be selected
/// - Kind-specific fields per [`validate_offer_kind`]
pub fn validate_new_offer(offer: &NewOffer) -> ValidationResult<()> {
    if offer.name.trim().is_empty() {
        return Err(required("name"));
    }
    if offer.start_date.trim().is_empty() {
        return Err(required("start date"));
    }
    if offer.end_date.trim().is_empty() {
        return Err(required("end date"));
    }
    if offer.applicable_products.is_empty() {
        return Err(required("applicable products"));
    }

    validate_offer_kind(&offer.kind)
}

/// Validates the fields present in an offer update.
pub fn validate_offer_update(update: &OfferUpdate) -> ValidationResult<()> {
    let blank = |value: &Option<String>| value.as_deref().is_some_and(|v| v.trim().is_empty());

    if blank(&update.name) {
        return Err(required("name"));
    }
    if blank(&update.start_date) {
        return Err(required("start date"));
    }
    if blank(&update.end_date) {
        return Err(required("end date"));
    }
    if update
        .applicable_products
        .as_ref()
        .is_some_and(|products| products.is_empty())
    {
        return Err(required("applicable products"));
    }
    if let Some(kind) = &update.kind {
        validate_offer_kind(kind)?;
    }

    Ok(())
}

// =============================================================================
// Settings
// =============================================================================

/// Validates the change-password form.
///
/// ## Rules
/// - All three fields are required
/// - The new password has at least 8 characters
/// - The confirmation matches the new password
pub fn validate_password_change(current: &str, new: &str, confirm: &str) -> ValidationResult<()> {
    if current.is_empty() {
        return Err(required("current password"));
    }
    if new.is_empty() {
        return Err(required("new password"));
    }
    if confirm.is_empty() {
        return Err(required("password confirmation"));
    }

    if new.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::TooShort {
            field: "new password".to_string(),
            min: MIN_PASSWORD_LEN,
        });
    }

    if new != confirm {
        return Err(ValidationError::Mismatch {
            field: "password confirmation".to_string(),
            other: "new password".to_string(),
        });
    }

    Ok(())
}
