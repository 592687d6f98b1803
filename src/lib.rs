// SPDX-License-Identifier: MPL-2.0
//! `folio` is the state core of a paginated PDF viewer.
//!
//! It tracks page navigation, zoom and rotation for one document, decides when
//! a page must be rendered, and keeps the last successful render on screen
//! while a new one is in progress. Rendering itself is delegated to a
//! [`RenderingEngine`](application::port::RenderingEngine) supplied by the
//! host; failures are reported through toast notifications localized with
//! Fluent.

#![doc(html_root_url = "https://docs.rs/folio/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
