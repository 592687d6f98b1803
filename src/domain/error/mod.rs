// SPDX-License-Identifier: MPL-2.0
//! Viewer failure kinds.
//!
//! - [`LoadError`]: the document could not be opened; the viewer has no pages.
//! - [`RenderError`]: one page/scale/rotation failed; previous content stays visible.
//! - [`ValidationError`]: rejected user input; handled locally, no state change.
//!
//! [`EngineError`] is what a rendering backend reports; the viewer wraps it
//! into one of the first two.

use super::{PageNumber, Rotation, ZoomLevel};
use thiserror::Error;

/// Failure reported by a rendering engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The document could not be fetched.
    #[error("document not found: {0}")]
    NotFound(String),

    /// The document data is damaged or not a supported format.
    #[error("corrupted document: {0}")]
    Corrupted(String),

    /// Any other backend failure.
    #[error("{0}")]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("invalid document handle")]
    InvalidUrl,

    #[error("document has no pages")]
    EmptyDocument,

    #[error("failed to load document: {0}")]
    Engine(#[from] EngineError),
}

impl LoadError {
    /// Returns the i18n description key shown under the generic load title.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            LoadError::InvalidUrl => "notification-load-error-invalid-url",
            LoadError::EmptyDocument => "notification-load-error-empty",
            LoadError::Engine(EngineError::NotFound(_)) => "notification-load-error-not-found",
            LoadError::Engine(_) => "notification-load-error-general",
        }
    }
}

/// A page failed to render for one specific page/scale/rotation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to render page {page} at {zoom}, rotated {rotation}: {source}")]
pub struct RenderError {
    pub page: PageNumber,
    pub zoom: ZoomLevel,
    pub rotation: Rotation,
    #[source]
    pub source: EngineError,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("'{0}' is not a page number")]
    NotANumber(String),

    #[error("page {requested} is outside 1..={total}")]
    OutOfRange { requested: i64, total: u32 },

    #[error("page count is not known yet")]
    PageCountUnknown,

    #[error("zoom {0}% is not a supported level")]
    UnsupportedZoom(u16),

    #[error("zoom scale is not a finite positive number")]
    InvalidZoomScale,
}

impl ValidationError {
    /// Returns the i18n key for the inline input error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ValidationError::NotANumber(_) => "viewer-page-input-error-invalid",
            ValidationError::OutOfRange { .. } => "viewer-page-input-error-range",
            ValidationError::PageCountUnknown => "viewer-page-input-error-not-loaded",
            ValidationError::UnsupportedZoom(_) | ValidationError::InvalidZoomScale => {
                "viewer-zoom-error-unsupported"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_error_keys_share_prefix() {
        for err in [
            LoadError::InvalidUrl,
            LoadError::EmptyDocument,
            LoadError::Engine(EngineError::NotFound("x".into())),
            LoadError::Engine(EngineError::Other("x".into())),
        ] {
            assert!(err.i18n_key().starts_with("notification-load-error-"));
        }
    }

    #[test]
    fn render_error_display_names_the_page() {
        let err = RenderError {
            page: PageNumber::new(3).unwrap(),
            zoom: ZoomLevel::from_percent(200).unwrap(),
            rotation: Rotation::Quarter,
            source: EngineError::Other("canvas lost".into()),
        };
        let text = err.to_string();
        assert!(text.contains("page 3"));
        assert!(text.contains("200%"));
        assert!(text.contains("canvas lost"));
    }

    #[test]
    fn out_of_range_display() {
        let err = ValidationError::OutOfRange {
            requested: 15,
            total: 10,
        };
        assert_eq!(err.to_string(), "page 15 is outside 1..=10");
    }
}
