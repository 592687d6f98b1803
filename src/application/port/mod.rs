// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`engine`]: Document decoding and page rasterization
//! - [`notify`]: User-visible notifications (toasts)
//!
//! # Design Notes
//!
//! - All traits use domain types only
//! - Engine calls return boxed `'static` futures so the runtime can spawn them
//!   without borrowing the engine

pub mod engine;
pub mod notify;

pub use engine::RenderingEngine;
pub use notify::NotificationService;
