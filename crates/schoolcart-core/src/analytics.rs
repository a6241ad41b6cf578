//! # Analytics
//!
//! Summaries behind the dashboard's stat cards and the sales tab.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Product, StockStatus};

/// Stock counts and projected profit over the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InventorySummary {
    pub total_products: usize,
    pub in_stock: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
    /// Units on hand across all products.
    pub total_units: u64,
    /// Σ price × stock × margin%.
    pub projected_profit: Money,
}

impl InventorySummary {
    /// Summarises a catalog.
    ///
    /// ## Example
    /// ```rust
    /// use schoolcart_core::analytics::InventorySummary;
    ///
    /// let summary = InventorySummary::from_products(&[]);
    /// assert_eq!(summary.total_products, 0);
    /// assert!(!summary.needs_attention());
    /// ```
    pub fn from_products(products: &[Product]) -> Self {
        products
            .iter()
            .fold(InventorySummary::default(), |mut summary, product| {
                summary.total_products += 1;
                match product.status {
                    StockStatus::InStock => summary.in_stock += 1,
                    StockStatus::LowStock => summary.low_stock += 1,
                    StockStatus::OutOfStock => summary.out_of_stock += 1,
                }
                summary.total_units += u64::from(product.stock);
                summary.projected_profit += product.projected_profit();
                summary
            })
    }

    /// True when any product is low or out of stock.
    pub fn needs_attention(&self) -> bool {
        self.low_stock > 0 || self.out_of_stock > 0
    }
}

/// Revenue and order count for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DailySales {
    /// Chart label, e.g. `01 Dec`.
    pub label: String,
    pub revenue: Money,
    pub orders: u32,
}

/// Totals over a run of days.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SalesSummary {
    pub total_revenue: Money,
    pub total_orders: u64,
    /// Revenue per order, rounded to the nearest paisa. Zero with no orders.
    pub average_order_value: Money,
}

impl SalesSummary {
    pub fn from_days(days: &[DailySales]) -> Self {
        let total_revenue: Money = days.iter().map(|d| d.revenue).sum();
        let total_orders: u64 = days.iter().map(|d| u64::from(d.orders)).sum();
        let average_order_value = i64::try_from(total_orders)
            .ok()
            .and_then(|orders| total_revenue.divide_rounded(orders))
            .unwrap_or_default();

        SalesSummary {
            total_revenue,
            total_orders,
            average_order_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NewProduct;

    fn product(id: &str, price_rupees: i64, stock: u32, margin: Option<u32>) -> Product {
        Product::from_new(
            id,
            NewProduct {
                name: format!("Product {}", id),
                category: "supplies".to_string(),
                price: Money::from_rupees(price_rupees),
                stock,
                profit_margin: margin,
                ..Default::default()
            },
        )
    }

    fn day(label: &str, revenue: i64, orders: u32) -> DailySales {
        DailySales {
            label: label.to_string(),
            revenue: Money::from_rupees(revenue),
            orders,
        }
    }

    #[test]
    fn test_inventory_summary_counts() {
        let products = vec![
            product("1", 85, 120, Some(25)),
            product("3", 180, 12, Some(30)),
            product("4", 60, 0, Some(40)),
            product("7", 250, 8, None),
        ];

        let summary = InventorySummary::from_products(&products);
        assert_eq!(summary.total_products, 4);
        assert_eq!(summary.in_stock, 1);
        assert_eq!(summary.low_stock, 2);
        assert_eq!(summary.out_of_stock, 1);
        assert_eq!(summary.total_units, 140);
        // 2550 + 648 + 0 + 400
        assert_eq!(summary.projected_profit, Money::from_rupees(3598));
        assert!(summary.needs_attention());
    }

    #[test]
    fn test_projected_profit_saturates() {
        let mut huge = product("1", 0, 2, Some(100));
        huge.price = Money::from_paise(5_000_000_000_000_000_000);

        let summary = InventorySummary::from_products(&[huge.clone(), huge]);
        assert_eq!(summary.projected_profit.paise(), i64::MAX);
        assert_eq!(summary.total_units, 4);
    }

    #[test]
    fn test_sales_summary() {
        let days = vec![
            day("01 Dec", 12_500, 45),
            day("02 Dec", 18_200, 62),
            day("03 Dec", 15_800, 51),
            day("04 Dec", 22_100, 78),
            day("05 Dec", 19_500, 65),
            day("06 Dec", 25_800, 89),
            day("07 Dec", 21_200, 72),
        ];

        let summary = SalesSummary::from_days(&days);
        assert_eq!(summary.total_revenue, Money::from_rupees(135_100));
        assert_eq!(summary.total_orders, 462);
        assert_eq!(summary.average_order_value, Money::from_paise(29_242));
    }

    #[test]
    fn test_sales_summary_without_orders() {
        let summary = SalesSummary::from_days(&[]);
        assert_eq!(summary, SalesSummary::default());
    }
}
