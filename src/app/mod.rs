// SPDX-License-Identifier: MPL-2.0
//! Application wiring.
//!
//! [`ViewerRuntime`] connects the viewer to a rendering engine and a
//! notification service and runs the effects the viewer requests.

pub mod runtime;

pub use runtime::ViewerRuntime;
