//! # State Module
//!
//! Shared application state for the admin dashboard.
//!
//! One state object per store rather than a single `AppState`: each command
//! takes only the state it touches, and independent stores never block each
//! other.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐ ┌──────────────┐   │
//! │  │ ProductState │ │  OfferState  │ │ RosterState  │ │ ConfigState  │   │
//! │  │              │ │              │ │              │ │              │   │
//! │  │ Arc<Mutex<   │ │ Arc<Mutex<   │ │ Arc<Mutex<   │ │ theme        │   │
//! │  │ ProductStore │ │ OfferStore   │ │ Roster       │ │ alert delays │   │
//! │  │ >>           │ │ >>           │ │ >>           │ │              │   │
//! │  └──────────────┘ └──────────────┘ └──────────────┘ └──────────────┘   │
//! │                                                                         │
//! │  ┌──────────────┐ ┌───────────────────┐                                │
//! │  │ OrderState   │ │ NotificationState │                                │
//! │  └──────────────┘ └───────────────────┘                                │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • Store states: one Mutex each, held for a single closure             │
//! │  • ConfigState: read-only after startup                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod store;

pub use config::{ConfigState, Theme};
pub use store::{
    NotificationState, OfferState, OrderState, ProductState, RosterState, StoreState,
};
