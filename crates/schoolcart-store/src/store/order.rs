//! # Order Store
//!
//! The counter queue shown on the orders tab.
//!
//! ```text
//! pending ──complete_order──► completed
//! ```
//!
//! An order only moves forward; completing it twice is an error.

use chrono::{DateTime, Utc};
use tracing::debug;

use schoolcart_core::{CoreError, CoreResult, Order, OrderStatus};

use crate::seed;

#[derive(Debug, Clone, Default)]
pub struct OrderStore {
    orders: Vec<Order>,
}

impl OrderStore {
    pub fn new(orders: Vec<Order>) -> Self {
        OrderStore { orders }
    }

    /// The seed queue, placed in the minutes before `now`.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        OrderStore {
            orders: seed::orders(now),
        }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn get(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    pub fn pending_orders(&self) -> Vec<&Order> {
        self.orders.iter().filter(|o| o.is_pending()).collect()
    }

    pub fn completed_orders(&self) -> Vec<&Order> {
        self.orders.iter().filter(|o| !o.is_pending()).collect()
    }

    /// Marks a pending order as completed.
    ///
    /// ## Errors
    /// - [`CoreError::OrderNotFound`] if no order has this id
    /// - [`CoreError::OrderAlreadyCompleted`] if it was already served
    pub fn complete_order(&mut self, id: &str) -> CoreResult<Order> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| CoreError::OrderNotFound(id.to_string()))?;

        if !order.is_pending() {
            return Err(CoreError::OrderAlreadyCompleted(order.id.clone()));
        }

        order.status = OrderStatus::Completed;
        debug!(id = %order.id, customer = %order.customer, "Completed order");
        Ok(order.clone())
    }
}
