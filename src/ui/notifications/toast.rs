// SPDX-License-Identifier: MPL-2.0
//! Display-ready text for a notification.
//!
//! The host draws the toast; this module only resolves its strings.

use super::notification::{Notification, NotificationId, Severity};
use crate::i18n::fluent::I18n;

/// Resolved toast content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: NotificationId,
    pub severity: Severity,
    pub title: String,
    pub description: Option<String>,
}

impl Toast {
    /// Resolves the notification's title and description in the current locale.
    #[must_use]
    pub fn resolve(notification: &Notification, i18n: &I18n) -> Self {
        let args: Vec<(&str, &str)> = notification
            .args()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();

        let translate = |key: &str| {
            if args.is_empty() {
                i18n.tr(key)
            } else {
                i18n.tr_with_args(key, &args)
            }
        };

        Self {
            id: notification.id(),
            severity: notification.severity(),
            title: translate(notification.title_key()),
            description: notification.description_key().map(translate),
        }
    }

    /// Whether the host should use its destructive style.
    #[must_use]
    pub fn is_destructive(&self) -> bool {
        self.severity.is_destructive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn load_error_resolves_to_generic_message() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let notification = Notification::error("notification-load-error-title")
            .with_description("notification-load-error-general");

        let toast = Toast::resolve(&notification, &i18n);

        assert_eq!(toast.title, "Error loading PDF");
        assert_eq!(toast.description.as_deref(), Some("Please try again later."));
        assert!(toast.is_destructive());
    }

    #[test]
    fn french_locale_is_used_when_selected() {
        let i18n = I18n::new(Some("fr".to_string()), &Config::default());
        let notification = Notification::error("notification-load-error-title");

        let toast = Toast::resolve(&notification, &i18n);

        assert_eq!(toast.title, "Erreur de chargement du PDF");
        assert!(toast.description.is_none());
    }
}
