//! # Notification Commands
//!
//! The header bell: a badge with the unread count and a panel listing
//! new-order notifications.

use serde::{Deserialize, Serialize};
use tracing::debug;

use schoolcart_core::OrderNotification;

use crate::error::ApiError;
use crate::state::NotificationState;

/// What the bell panel renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPanel {
    pub notifications: Vec<OrderNotification>,
    pub unread_count: usize,
}

pub fn get_notifications(notifications: &NotificationState) -> NotificationPanel {
    debug!("get_notifications command");
    notifications.with(|store| NotificationPanel {
        notifications: store.notifications().to_vec(),
        unread_count: store.unread_count(),
    })
}

pub fn mark_notification_read(
    notifications: &NotificationState,
    id: &str,
) -> Result<OrderNotification, ApiError> {
    debug!(id = %id, "mark_notification_read command");
    Ok(notifications.with_mut(|store| store.mark_read(id))?)
}

pub fn dismiss_notification(
    notifications: &NotificationState,
    id: &str,
) -> Result<OrderNotification, ApiError> {
    debug!(id = %id, "dismiss_notification command");
    Ok(notifications.with_mut(|store| store.dismiss(id))?)
}

/// Returns how many notifications were newly marked read.
pub fn mark_all_notifications_read(notifications: &NotificationState) -> usize {
    debug!("mark_all_notifications_read command");
    notifications.with_mut(|store| store.mark_all_read())
}
