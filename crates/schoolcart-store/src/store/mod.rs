//! # Store Module
//!
//! In-memory stores for the SchoolCart dashboard.
//!
//! ## Store Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How a Store Is Used                                  │
//! │                                                                         │
//! │  Admin command                                                         │
//! │       │                                                                 │
//! │       │  products.with_mut(|s| s.update_product("4", update))          │
//! │       ▼                                                                 │
//! │  ProductStore                                                          │
//! │  ├── products(&self)            read                                   │
//! │  ├── add_product(&mut self)     assigns a UUID                         │
//! │  ├── update_product(&mut self)  Err(NotFound) leaves it untouched      │
//! │  └── delete_product(&mut self)                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<Product> (insertion order)                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Stores
//!
//! - [`ProductStore`](product::ProductStore) - Products and categories
//! - [`OfferStore`](offer::OfferStore) - Promotional offers
//! - [`Roster`](roster::Roster) - Students, staff and today's birthdays
//! - [`OrderStore`](order::OrderStore) - The counter queue
//! - [`NotificationStore`](notification::NotificationStore) - New-order notifications

use uuid::Uuid;

pub mod notification;
pub mod offer;
pub mod order;
pub mod product;
pub mod roster;

/// Fresh identifier for an entity created at runtime.
pub(crate) fn new_id() -> String {
    Uuid::new_v4().to_string()
}
