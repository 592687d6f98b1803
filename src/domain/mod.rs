// SPDX-License-Identifier: MPL-2.0
//! Domain layer - viewer value objects and business rules.
//!
//! Pure types with no dependency on a UI toolkit or a rendering backend.
//!
//! # Modules
//!
//! - [`document`]: Document handle and metadata ([`DocumentUrl`], [`DocumentMetadata`])
//! - [`error`]: Viewer failures ([`LoadError`], [`RenderError`], [`ValidationError`], [`EngineError`])
//! - [`page`]: Page numbering ([`PageNumber`], [`PageCount`])
//! - [`render`]: Render bookkeeping ([`RenderKey`], [`RequestId`], [`RenderRequest`], [`RenderedPage`])
//! - [`rotation`]: Quarter-turn rotation ([`Rotation`])
//! - [`validation`]: Page input validation ([`validate_page_input`])
//! - [`zoom`]: Enumerated zoom levels ([`ZoomLevel`], [`ZoomLevels`])

pub mod document;
pub mod error;
pub mod page;
pub mod render;
pub mod rotation;
pub mod validation;
pub mod zoom;

pub use document::{DocumentMetadata, DocumentUrl};
pub use error::{EngineError, LoadError, RenderError, ValidationError};
pub use page::{PageCount, PageNumber};
pub use render::{RenderKey, RenderRequest, RenderedPage, RequestId, RequestIdSource};
pub use rotation::Rotation;
pub use validation::{validate_page, validate_page_input};
pub use zoom::{ZoomLevel, ZoomLevels};
