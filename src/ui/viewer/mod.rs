// SPDX-License-Identifier: MPL-2.0
//! Paginated document viewer.
//!
//! [`DocumentViewer`] holds the navigation, zoom and rotation state of one
//! document and decides when the rendering engine must be called.
//! [`Controls`] derives what a toolbar needs from it.

pub mod component;
pub mod controls;
pub mod subcomponents;

pub use component::{DocumentViewer, Effect, LoadStatus, Message, RenderPhase, ViewerState};
pub use controls::{ButtonLabels, Controls, ZoomOption};
