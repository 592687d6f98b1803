// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer.
//!
//! Process-level setup shared by the adapters that implement the port traits
//! of `application::port`. Concrete rendering engines live in the host
//! application and read their options from here.
//!
//! - [`engine_options`]: write-once engine configuration

pub mod engine_options;

pub use engine_options::{EngineOptions, EngineOptionsCell};
