//! # SchoolCart Admin Library
//!
//! Application layer for the SchoolCart admin dashboard: shared state,
//! commands, and startup.
//!
//! ## Module Organization
//! ```text
//! schoolcart_admin/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── store.rs    ◄─── StoreState<S>: Arc<Mutex<S>> per store
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/       ◄─── One module per dashboard area
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use schoolcart_store::{
    DefaultClock, NotificationStore, OfferStore, OrderStore, ProductStore, Roster,
};
use state::{
    ConfigState, NotificationState, OfferState, OrderState, ProductState, RosterState,
};

/// Runs the admin application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: info, debug for schoolcart crates; RUST_LOG overrides    │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • Defaults, then SCHOOLCART_* environment variables                 │
/// │                                                                         │
/// │  3. Initialize State Objects ─────────────────────────────────────────► │
/// │     • One StoreState per store, seeded                                  │
/// │     • Roster reads today's date from the system clock                   │
/// │                                                                         │
/// │  4. Startup Alerts ───────────────────────────────────────────────────► │
/// │     • Stock and birthday alerts with their delays                       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() {
    init_tracing();

    info!("Starting SchoolCart admin");

    let config = ConfigState::from_env();
    info!(
        store_name = %config.store_name,
        theme = ?config.theme,
        notifications_enabled = config.notifications_enabled,
        "Configuration loaded"
    );

    let now = Utc::now();
    let products = ProductState::new(ProductStore::seeded());
    let offers = OfferState::new(OfferStore::seeded());
    let roster = RosterState::new(Roster::seeded(Arc::new(DefaultClock)));
    let orders = OrderState::new(OrderStore::seeded(now));
    let notifications = NotificationState::new(NotificationStore::seeded(now));

    info!(
        products = products.with(|s| s.products().len()),
        categories = products.with(|s| s.categories().len()),
        active_offers = offers.with(|s| s.active_offers().len()),
        pending_orders = orders.with(|s| s.pending_orders().len()),
        unread_notifications = notifications.with(|s| s.unread_count()),
        "State initialized"
    );

    let summary = commands::analytics::get_inventory_summary(&products);
    info!(
        projected_profit = %summary.projected_profit,
        low_stock = summary.low_stock,
        out_of_stock = summary.out_of_stock,
        "Inventory summary"
    );

    let alerts = commands::alerts::get_startup_alerts(&config, &products, &roster);
    if let Some(stock) = &alerts.stock {
        info!(
            delay_ms = stock.delay_ms,
            low_stock = stock.low_stock.len(),
            out_of_stock = stock.out_of_stock.len(),
            "Stock alert"
        );
    }
    if let Some(birthdays) = &alerts.birthdays {
        let names: Vec<&str> = birthdays.students.iter().map(|s| s.name.as_str()).collect();
        info!(delay_ms = birthdays.delay_ms, names = ?names, "Birthday alert");
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages everywhere
/// - `RUST_LOG=schoolcart_store=trace` - One crate only
/// - Default: `info,schoolcart=debug`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,schoolcart=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
