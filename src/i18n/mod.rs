// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support.
//!
//! Notification titles and descriptions are stored as Fluent message keys and
//! resolved here.
//!
//! # Features
//!
//! - Locale detection from an explicit argument, config, or system settings
//! - Translation files embedded in the binary
//! - Runtime language switching
//! - Fallback to `en-US` when a locale is unavailable

pub mod fluent;
