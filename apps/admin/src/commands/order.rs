//! # Order Commands
//!
//! The counter queue on the orders tab.

use tracing::{debug, info};

use schoolcart_core::Order;

use crate::error::ApiError;
use crate::state::OrderState;

pub fn list_pending_orders(orders: &OrderState) -> Vec<Order> {
    debug!("list_pending_orders command");
    orders.with(|store| store.pending_orders().into_iter().cloned().collect())
}

pub fn list_completed_orders(orders: &OrderState) -> Vec<Order> {
    debug!("list_completed_orders command");
    orders.with(|store| store.completed_orders().into_iter().cloned().collect())
}

/// Marks an order as served.
///
/// ## Errors
/// - `NOT_FOUND` for an unknown order
/// - `BUSINESS_LOGIC` if the order was already completed
pub fn complete_order(orders: &OrderState, id: &str) -> Result<Order, ApiError> {
    debug!(id = %id, "complete_order command");

    let order = orders.with_mut(|store| store.complete_order(id))?;

    info!(id = %order.id, customer = %order.customer, "Order completed");
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use chrono::Utc;
    use schoolcart_store::OrderStore;

    #[test]
    fn test_complete_order_moves_it() {
        let orders = OrderState::new(OrderStore::seeded(Utc::now()));

        complete_order(&orders, "#1234").unwrap();
        assert_eq!(list_pending_orders(&orders).len(), 2);
        assert_eq!(list_completed_orders(&orders).len(), 4);

        let err = complete_order(&orders, "#1234").unwrap_err();
        assert_eq!(err.code, ErrorCode::BusinessLogic);
    }

    #[test]
    fn test_complete_unknown_order() {
        let orders = OrderState::new(OrderStore::seeded(Utc::now()));
        let err = complete_order(&orders, "#0001").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
