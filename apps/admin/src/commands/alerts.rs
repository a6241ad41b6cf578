//! # Startup Alerts
//!
//! The two popups the dashboard opens shortly after loading.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  t = 0 ms      dashboard loads, get_startup_alerts()                   │
//! │  t = 800 ms    Stock alert      (low + out of stock)  if any           │
//! │  t = 1500 ms   Birthday alert   (today's birthdays)   if any           │
//! │                                                                         │
//! │  Both are skipped when notifications are turned off in settings.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here waits: each alert carries its delay and the front end owns
//! the timer.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use schoolcart_core::Student;

use super::product::ProductDto;
use crate::state::{ConfigState, ProductState, RosterState};

/// Products needing a restock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockAlert {
    pub delay_ms: u64,
    pub low_stock: Vec<ProductDto>,
    pub out_of_stock: Vec<ProductDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthdayAlert {
    pub delay_ms: u64,
    pub students: Vec<Student>,
}

/// Alerts to open after startup. `None` means the popup is not shown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartupAlerts {
    pub stock: Option<StockAlert>,
    pub birthdays: Option<BirthdayAlert>,
}

/// Builds the startup alerts from the current catalog and roster.
///
/// ## Rules
/// - Stock alert: shown when any product is low or out of stock
/// - Birthday alert: shown when anyone has a birthday today
/// - Neither is shown with notifications disabled
pub fn get_startup_alerts(
    config: &ConfigState,
    products: &ProductState,
    roster: &RosterState,
) -> StartupAlerts {
    debug!(
        notifications_enabled = config.notifications_enabled,
        "get_startup_alerts command"
    );

    if !config.notifications_enabled {
        info!("Notifications disabled, skipping startup alerts");
        return StartupAlerts::default();
    }

    let stock = products.with(|store| {
        let low_stock: Vec<ProductDto> = store
            .low_stock_products()
            .into_iter()
            .map(ProductDto::from)
            .collect();
        let out_of_stock: Vec<ProductDto> = store
            .out_of_stock_products()
            .into_iter()
            .map(ProductDto::from)
            .collect();

        if low_stock.is_empty() && out_of_stock.is_empty() {
            None
        } else {
            Some(StockAlert {
                delay_ms: config.stock_alert_delay_ms,
                low_stock,
                out_of_stock,
            })
        }
    });

    let students: Vec<Student> =
        roster.with(|r| r.todays_birthdays().into_iter().cloned().collect());
    let birthdays = if students.is_empty() {
        None
    } else {
        Some(BirthdayAlert {
            delay_ms: config.birthday_alert_delay_ms,
            students,
        })
    };

    StartupAlerts { stock, birthdays }
}
