// SPDX-License-Identifier: MPL-2.0
//! User interface state, following the Elm-style "state down, messages up"
//! pattern.
//!
//! Nothing here draws pixels; hosts render these models with the toolkit of
//! their choice.
//!
//! - [`viewer`] - Document viewer with pagination, zoom and rotation
//! - [`notifications`] - Toast notification system for user feedback

pub mod notifications;
pub mod viewer;
