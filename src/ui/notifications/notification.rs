// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Severity` enum
//! used throughout the notification system.

use crate::config::{INFO_DISMISS_SECS, WARNING_DISMISS_SECS};
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines display duration and styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully.
    #[default]
    Success,
    /// Informational message.
    Info,
    /// Warning that doesn't block operation.
    Warning,
    /// Error requiring attention (manual dismiss). Rendered as a destructive toast.
    Error,
}

impl Severity {
    /// Returns the auto-dismiss duration for this severity.
    /// Returns `None` for errors (manual dismiss required).
    #[must_use]
    pub fn auto_dismiss_duration(&self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(Duration::from_secs(INFO_DISMISS_SECS)),
            Severity::Warning => Some(Duration::from_secs(WARNING_DISMISS_SECS)),
            Severity::Error => None,
        }
    }

    /// Whether hosts should style the toast as destructive.
    #[must_use]
    pub fn is_destructive(&self) -> bool {
        matches!(self, Severity::Error)
    }
}

/// A notification to be displayed to the user.
///
/// Title and description are i18n keys resolved at display time, so a toast
/// follows a language switch while it is on screen.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    title_key: String,
    description_key: Option<String>,
    /// Arguments for message interpolation, shared by title and description.
    args: Vec<(String, String)>,
    created_at: Instant,
    /// Custom auto-dismiss duration (overrides severity default).
    custom_dismiss_duration: Option<Duration>,
}

impl Notification {
    /// Creates a new notification with the given severity and title key.
    pub fn new(severity: Severity, title_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            title_key: title_key.into(),
            description_key: None,
            args: Vec::new(),
            created_at: Instant::now(),
            custom_dismiss_duration: None,
        }
    }

    pub fn success(title_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, title_key)
    }

    pub fn info(title_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, title_key)
    }

    pub fn warning(title_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, title_key)
    }

    pub fn error(title_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, title_key)
    }

    /// Adds a description line under the title.
    #[must_use]
    pub fn with_description(mut self, description_key: impl Into<String>) -> Self {
        self.description_key = Some(description_key.into());
        self
    }

    /// Adds an argument for message interpolation.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.push((key.into(), value.into()));
        self
    }

    /// Sets a custom auto-dismiss duration, overriding the severity default.
    #[must_use]
    pub fn auto_dismiss(mut self, duration: Duration) -> Self {
        self.custom_dismiss_duration = Some(duration);
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn title_key(&self) -> &str {
        &self.title_key
    }

    #[must_use]
    pub fn description_key(&self) -> Option<&str> {
        self.description_key.as_deref()
    }

    #[must_use]
    pub fn args(&self) -> &[(String, String)] {
        &self.args
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns whether this notification has outlived its display time at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        let duration = self
            .custom_dismiss_duration
            .or_else(|| self.severity.auto_dismiss_duration());

        match duration {
            Some(d) => now.saturating_duration_since(self.created_at) >= d,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn error_severity_has_no_auto_dismiss() {
        assert!(Severity::Error.auto_dismiss_duration().is_none());
        assert!(Severity::Error.is_destructive());
    }

    #[test]
    fn warning_duration_is_longer_than_success() {
        let success_duration = Severity::Success.auto_dismiss_duration().unwrap();
        let warning_duration = Severity::Warning.auto_dismiss_duration().unwrap();
        assert!(warning_duration > success_duration);
    }

    #[test]
    fn notification_builder_pattern_works() {
        let notification = Notification::error("notification-load-error-title")
            .with_description("notification-load-error-general")
            .with_arg("page", "3");

        assert_eq!(notification.severity(), Severity::Error);
        assert_eq!(notification.title_key(), "notification-load-error-title");
        assert_eq!(
            notification.description_key(),
            Some("notification-load-error-general")
        );
        assert_eq!(notification.args().len(), 1);
    }

    #[test]
    fn expiry_follows_custom_duration() {
        let notification = Notification::info("x").auto_dismiss(Duration::from_millis(10));
        let created = notification.created_at();
        assert!(!notification.is_expired_at(created));
        assert!(notification.is_expired_at(created + Duration::from_millis(10)));
    }

    #[test]
    fn errors_never_expire() {
        let notification = Notification::error("x");
        let later = notification.created_at() + Duration::from_secs(3600);
        assert!(!notification.is_expired_at(later));
    }
}
