//! # schoolcart-store: In-Memory Stores for the SchoolCart Dashboard
//!
//! Every collection the dashboard shows lives in exactly one store here.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        SchoolCart Data Flow                             │
//! │                                                                         │
//! │  Admin command (update_product)                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 schoolcart-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │    Stores     │    │    Clock      │    │    Seeds     │  │   │
//! │  │   │  (store/)     │    │  (clock.rs)   │    │  (seed.rs)   │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ ProductStore  │    │ DefaultClock  │    │ catalog      │  │   │
//! │  │   │ OfferStore    │◄───│ ManualClock   │    │ offers       │  │   │
//! │  │   │ Roster  ...   │    │               │    │ roster ...   │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use schoolcart_core::ProductUpdate;
//! use schoolcart_store::ProductStore;
//!
//! let mut store = ProductStore::seeded();
//! assert!(store.out_of_stock_products().iter().any(|p| p.id == "4"));
//!
//! store.update_product("4", ProductUpdate::stock(20)).unwrap();
//! assert!(store.out_of_stock_products().is_empty());
//! ```

pub mod clock;
pub mod seed;
pub mod store;

pub use clock::{Clock, DefaultClock, ManualClock};
pub use store::notification::NotificationStore;
pub use store::offer::OfferStore;
pub use store::order::OrderStore;
pub use store::product::ProductStore;
pub use store::roster::Roster;
