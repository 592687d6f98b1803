// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` handles queuing, display timing, and dismissal of notifications.
//! It limits the number of visible toasts and manages auto-dismiss timers.

use super::notification::{Notification, NotificationId, Severity};
use crate::application::port::NotificationService;
use crate::config::DEFAULT_MAX_VISIBLE_NOTIFICATIONS;
use std::collections::VecDeque;
use std::time::Instant;

/// Title keys of document load failures share this prefix.
pub const LOAD_ERROR_KEY_PREFIX: &str = "notification-load-error-";

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Tick for checking auto-dismiss timers.
    Tick,
}

/// Manages the notification queue and visible notifications.
#[derive(Debug)]
pub struct Manager {
    /// Currently visible notifications (newest first).
    visible: VecDeque<Notification>,
    /// Queued notifications waiting to be displayed.
    queue: VecDeque<Notification>,
    max_visible: usize,
}

impl Default for Manager {
    fn default() -> Self {
        Self::with_max_visible(DEFAULT_MAX_VISIBLE_NOTIFICATIONS)
    }
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a manager showing at most `max_visible` toasts (at least one).
    #[must_use]
    pub fn with_max_visible(max_visible: usize) -> Self {
        Self {
            visible: VecDeque::new(),
            queue: VecDeque::new(),
            max_visible: max_visible.max(1),
        }
    }

    /// Pushes a new notification to be displayed.
    ///
    /// If fewer than `max_visible` notifications are showing, it's displayed
    /// immediately. Otherwise, it's added to the queue and shown when space
    /// becomes available. Warnings and errors are also logged.
    pub fn push(&mut self, notification: Notification) {
        match notification.severity() {
            Severity::Warning => tracing::warn!(
                title = notification.title_key(),
                description = notification.description_key(),
                "notification"
            ),
            Severity::Error => tracing::error!(
                title = notification.title_key(),
                description = notification.description_key(),
                "notification"
            ),
            Severity::Success | Severity::Info => {}
        }

        if self.visible.len() < self.max_visible {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Dismisses every visible notification that has expired.
    ///
    /// Should be called periodically (e.g., every 100-500ms).
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Same as [`Manager::tick`] with an explicit clock.
    pub fn tick_at(&mut self, now: Instant) {
        let to_dismiss: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.is_expired_at(now))
            .map(Notification::id)
            .collect();

        for id in to_dismiss {
            self.dismiss(id);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Returns the currently visible notifications, newest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Clears all notifications (visible and queued).
    pub fn clear(&mut self) {
        self.visible.clear();
        self.queue.clear();
    }

    /// Clears all load error notifications.
    ///
    /// Called once a document loads, so an earlier failure is not left on
    /// screen next to a working viewer.
    pub fn clear_load_errors(&mut self) {
        let visible_before = self.visible.len();
        self.visible
            .retain(|n| !n.title_key().starts_with(LOAD_ERROR_KEY_PREFIX));
        self.queue
            .retain(|n| !n.title_key().starts_with(LOAD_ERROR_KEY_PREFIX));

        if self.visible.len() < visible_before {
            self.promote_from_queue();
        }
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < self.max_visible {
            if let Some(notification) = self.queue.pop_front() {
                self.visible.push_back(notification);
            } else {
                break;
            }
        }
    }
}

impl NotificationService for Manager {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }

    fn clear_load_errors(&mut self) {
        Manager::clear_load_errors(self);
    }
}
