// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Zoom**: Supported zoom levels and the starting level
//! - **Notifications**: Toast limits and auto-dismiss durations
//! - **Engine**: Rendering engine worker location

// ==========================================================================
// Zoom Defaults
// ==========================================================================

pub use crate::domain::zoom::{DEFAULT_ZOOM_LEVELS_PERCENT, DEFAULT_ZOOM_PERCENT};

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Maximum number of toasts visible at once; the rest are queued.
pub const DEFAULT_MAX_VISIBLE_NOTIFICATIONS: usize = 3;

/// Lower bound for the visible toast limit.
pub const MIN_MAX_VISIBLE_NOTIFICATIONS: usize = 1;

/// Upper bound for the visible toast limit.
pub const MAX_MAX_VISIBLE_NOTIFICATIONS: usize = 10;

/// Auto-dismiss delay for success and info toasts (seconds).
pub const INFO_DISMISS_SECS: u64 = 3;

/// Auto-dismiss delay for warning toasts (seconds).
pub const WARNING_DISMISS_SECS: u64 = 5;

// ==========================================================================
// Engine Defaults
// ==========================================================================

/// Worker script location; `{version}` is replaced by the engine version.
pub const DEFAULT_WORKER_URL_TEMPLATE: &str =
    "//cdnjs.cloudflare.com/ajax/libs/pdf.js/{version}/pdf.worker.js";

/// Placeholder substituted in [`DEFAULT_WORKER_URL_TEMPLATE`].
pub const WORKER_VERSION_PLACEHOLDER: &str = "{version}";
