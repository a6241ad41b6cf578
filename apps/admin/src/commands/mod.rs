//! # Commands Module
//!
//! Every operation the dashboard can invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs           ◄─── You are here (exports)
//! ├── product.rs       ◄─── Inventory: product CRUD and search
//! ├── category.rs      ◄─── Category add/delete
//! ├── offer.rs         ◄─── Offers and the per-product lookup
//! ├── roster.rs        ◄─── Roster and today's birthdays
//! ├── order.rs         ◄─── Counter queue
//! ├── notification.rs  ◄─── Header bell
//! ├── analytics.rs     ◄─── Stat cards and sales summary
//! ├── alerts.rs        ◄─── Startup stock and birthday alerts
//! ├── settings.rs      ◄─── Password change form
//! └── config.rs        ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Dashboard event ("Save" on the edit-product dialog)                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  update_product(&products, "4", update)                                 │
//! │         │                                                               │
//! │         ├── 1. validate_product_update(&update)?   (schoolcart-core)    │
//! │         ├── 2. products.with_mut(|s| s.update_product(..))?            │
//! │         └── 3. ProductDto::from(product)                                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Result<ProductDto, ApiError>   (both serialize to JSON)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command takes only the state it needs:
//! ```rust,ignore
//! // Only needs the catalog
//! fn search_products(products: &ProductState, query: &str)
//!
//! // Needs the catalog and the roster
//! fn get_startup_alerts(config: &ConfigState, products: &ProductState, roster: &RosterState)
//! ```

pub mod alerts;
pub mod analytics;
pub mod category;
pub mod config;
pub mod notification;
pub mod offer;
pub mod order;
pub mod product;
pub mod roster;
pub mod settings;
