//! # Notification Store
//!
//! New-order notifications behind the header bell.

use chrono::{DateTime, Utc};
use tracing::debug;

use schoolcart_core::{CoreError, CoreResult, OrderNotification};

use crate::seed;

#[derive(Debug, Clone, Default)]
pub struct NotificationStore {
    notifications: Vec<OrderNotification>,
}

impl NotificationStore {
    pub fn new(notifications: Vec<OrderNotification>) -> Self {
        NotificationStore { notifications }
    }

    /// One unread notification per pending seed order.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        NotificationStore {
            notifications: seed::notifications(now),
        }
    }

    pub fn notifications(&self) -> &[OrderNotification] {
        &self.notifications
    }

    /// Badge count on the bell.
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    pub fn mark_read(&mut self, id: &str) -> CoreResult<OrderNotification> {
        let notification = self
            .notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| CoreError::NotificationNotFound(id.to_string()))?;

        notification.read = true;
        debug!(id = %notification.id, order = %notification.order_id, "Marked notification read");
        Ok(notification.clone())
    }

    /// Removes a notification from the list.
    pub fn dismiss(&mut self, id: &str) -> CoreResult<OrderNotification> {
        let index = self
            .notifications
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| CoreError::NotificationNotFound(id.to_string()))?;

        let notification = self.notifications.remove(index);
        debug!(id = %notification.id, "Dismissed notification");
        Ok(notification)
    }

    /// Marks everything read. Returns how many were unread.
    pub fn mark_all_read(&mut self) -> usize {
        let mut marked = 0;
        for notification in self.notifications.iter_mut().filter(|n| !n.read) {
            notification.read = true;
            marked += 1;
        }

        debug!(marked, "Marked all notifications read");
        marked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unread_count_and_mark_read() {
        let mut store = NotificationStore::seeded(Utc::now());
        assert_eq!(store.unread_count(), 3);

        let notification = store.mark_read("2").unwrap();
        assert!(notification.read);
        assert_eq!(notification.order_id, "#1235");
        assert_eq!(store.unread_count(), 2);

        // Marking again is harmless.
        store.mark_read("2").unwrap();
        assert_eq!(store.unread_count(), 2);
    }

    #[test]
    fn test_mark_all_read() {
        let mut store = NotificationStore::seeded(Utc::now());
        store.mark_read("1").unwrap();

        assert_eq!(store.mark_all_read(), 2);
        assert_eq!(store.unread_count(), 0);
        assert_eq!(store.mark_all_read(), 0);
    }

    #[test]
    fn test_dismiss() {
        let mut store = NotificationStore::seeded(Utc::now());
        let dismissed = store.dismiss("3").unwrap();
        assert_eq!(dismissed.customer, "Liam Johnson");
        assert_eq!(store.notifications().len(), 2);

        assert_eq!(
            store.dismiss("3"),
            Err(CoreError::NotificationNotFound("3".to_string()))
        );
    }
}
