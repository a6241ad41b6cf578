//! # Analytics Commands
//!
//! Stat cards on the dashboard home and the sales chart.

use serde::{Deserialize, Serialize};
use tracing::debug;

use schoolcart_core::analytics::{DailySales, InventorySummary, SalesSummary};
use schoolcart_store::seed;

use crate::state::ProductState;

/// Daily figures for the chart plus their totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesOverview {
    pub days: Vec<DailySales>,
    pub summary: SalesSummary,
}

/// Stock counts and projected profit over the current catalog.
pub fn get_inventory_summary(products: &ProductState) -> InventorySummary {
    debug!("get_inventory_summary command");
    products.with(|store| InventorySummary::from_products(store.products()))
}

/// The last week of sales, from the seeded daily figures.
pub fn get_sales_overview() -> SalesOverview {
    debug!("get_sales_overview command");

    let days = seed::daily_sales();
    let summary = SalesSummary::from_days(&days);
    SalesOverview { days, summary }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schoolcart_core::{Money, ProductUpdate};
    use schoolcart_store::ProductStore;

    #[test]
    fn test_inventory_summary_tracks_updates() {
        let products = ProductState::new(ProductStore::seeded());

        let summary = get_inventory_summary(&products);
        assert_eq!(summary.total_products, 12);
        assert_eq!(summary.out_of_stock, 1);
        assert_eq!(summary.low_stock, 2);
        assert!(summary.needs_attention());

        products
            .with_mut(|store| store.update_product("4", ProductUpdate::stock(20)))
            .unwrap();
        let summary = get_inventory_summary(&products);
        assert_eq!(summary.out_of_stock, 0);
        assert_eq!(summary.in_stock, 10);
    }

    #[test]
    fn test_sales_overview() {
        let overview = get_sales_overview();
        assert_eq!(overview.days.len(), 7);
        assert_eq!(overview.summary.total_orders, 462);
        assert_eq!(overview.summary.total_revenue, Money::from_rupees(135_100));
    }
}
