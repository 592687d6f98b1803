// SPDX-License-Identifier: MPL-2.0
//! Nested TEA sub-components for the viewer.
//!
//! Each sub-component owns a slice of the viewer state and exposes a
//! `handle()` (or a small set of methods for the render buffer). The main
//! component.rs orchestrates them and turns their effects into engine requests
//! and notifications.
//!
//! ## Architecture
//!
//! ```text
//! component.rs (orchestrator)
//!     ├── document      - Open document and its page count
//!     ├── pagination    - Current page and page number field
//!     ├── zoom          - Enumerated zoom levels
//!     ├── rotation      - Quarter-turn rotation
//!     └── render_buffer - Displayed and pending render slots
//! ```

pub mod document;
pub mod pagination;
pub mod render_buffer;
pub mod rotation;
pub mod zoom;
