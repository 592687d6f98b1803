// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications inform users about failures (a document that would not load,
//! a page that would not render) without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Resolved, display-ready toast text
//!
//! # Usage
//!
//! ```
//! use folio::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::error("notification-load-error-title"));
//! assert_eq!(manager.visible_count(), 1);
//! ```
//!
//! # Design Considerations
//!
//! - Toast duration: ~3s for success/info, ~5s for warnings, manual dismiss for errors
//! - Max visible toasts: configurable, 3 by default (others are queued)

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, LOAD_ERROR_KEY_PREFIX};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
