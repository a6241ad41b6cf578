//! # schoolcart-core: Pure Domain Logic for the SchoolCart Dashboard
//!
//! Types and rules shared by the stores and the admin application.
//! Nothing in here touches the clock, the disk or the network.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     SchoolCart Admin Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                Dashboard UI (out of this workspace)             │   │
//! │  │   Inventory ──► Add Product ──► Offers ──► Sales ──► Settings   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                      apps/admin                                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                   schoolcart-store                              │   │
//! │  │   ProductStore  OfferStore  Roster  OrderStore  Notifications   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ schoolcart-core (THIS CRATE) ★                    │   │
//! │  │   types • money • error • validation • analytics                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category, Offer, Student, Order)
//! - [`money`] - Money type with integer paise arithmetic
//! - [`error`] - Domain error types
//! - [`validation`] - Input rules enforced by the command layer
//! - [`analytics`] - Inventory and sales summaries
//!
//! ## Example Usage
//!
//! ```rust
//! use schoolcart_core::StockStatus;
//!
//! assert_eq!(StockStatus::from_stock(0), StockStatus::OutOfStock);
//! assert_eq!(StockStatus::from_stock(15), StockStatus::LowStock);
//! assert_eq!(StockStatus::from_stock(16), StockStatus::InStock);
//! ```

pub mod analytics;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Highest stock level still reported as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 15;

/// Highest price the product form accepts: ₹10,00,000.
///
/// ## Business Reason
/// Catches a mistyped price (extra zeros) before it reaches the catalog and
/// keeps price × stock well inside `i64`.
pub const MAX_PRICE_PAISE: i64 = 100_000_000;

/// Highest stock count the product form accepts.
pub const MAX_STOCK: u32 = 100_000;

/// Profit margin assumed for products created without one.
pub const DEFAULT_PROFIT_MARGIN_PCT: u32 = 20;

/// Minimum length of a new dashboard password.
pub const MIN_PASSWORD_LEN: usize = 8;
