// SPDX-License-Identifier: MPL-2.0
//! Notification port.

use crate::ui::notifications::Notification;

/// Sink for user-visible notifications. Fire-and-forget.
pub trait NotificationService {
    fn notify(&mut self, notification: Notification);

    /// Withdraws notifications about earlier document load failures.
    fn clear_load_errors(&mut self) {}
}

impl<F> NotificationService for F
where
    F: FnMut(Notification),
{
    fn notify(&mut self, notification: Notification) {
        self(notification);
    }
}
