// SPDX-License-Identifier: MPL-2.0
//! Viewer controls: page navigation, page field, zoom menu and rotation.
//!
//! `Controls` is a plain view-model a host UI renders however it likes; it
//! holds no references into the viewer.

use super::component::{DocumentViewer, LoadStatus, RenderPhase};
use crate::domain::ZoomLevel;
use crate::i18n::fluent::I18n;

/// Placeholder shown instead of the page count before the document loads.
pub const UNKNOWN_PAGE_COUNT: &str = "x";

/// One entry of the zoom menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoomOption {
    pub level: ZoomLevel,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Controls {
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub page_input: String,
    pub page_input_invalid: bool,
    /// i18n key explaining why the page field is invalid.
    pub page_input_error_key: Option<&'static str>,
    /// Page count, or [`UNKNOWN_PAGE_COUNT`].
    pub total_pages_label: String,
    pub zoom_label: String,
    pub zoom_options: Vec<ZoomOption>,
    pub can_zoom_in: bool,
    pub can_zoom_out: bool,
    pub rotation_degrees: u16,
    /// Displayed content lags behind the requested zoom and a load or render
    /// that would catch up is still running.
    pub is_loading: bool,
    pub has_content: bool,
}

impl Controls {
    #[must_use]
    pub fn from_viewer(viewer: &DocumentViewer) -> Self {
        let current_zoom = viewer.zoom();
        let input_error = viewer.page_input_error();

        Self {
            can_go_previous: viewer.can_go_previous(),
            can_go_next: viewer.can_go_next(),
            page_input: viewer.page_input().to_string(),
            page_input_invalid: input_error.is_some(),
            page_input_error_key: input_error.map(|err| err.i18n_key()),
            total_pages_label: viewer
                .total_pages()
                .map_or_else(|| UNKNOWN_PAGE_COUNT.to_string(), |total| total.to_string()),
            zoom_label: current_zoom.to_string(),
            zoom_options: viewer
                .zoom_levels()
                .iter()
                .map(|level| ZoomOption {
                    level,
                    label: level.to_string(),
                    selected: level == current_zoom,
                })
                .collect(),
            can_zoom_in: viewer.can_zoom_in(),
            can_zoom_out: viewer.can_zoom_out(),
            rotation_degrees: viewer.rotation().degrees(),
            is_loading: viewer.is_stale()
                && (viewer.load_status() == LoadStatus::Loading
                    || viewer.render_phase() == RenderPhase::Rendering),
            has_content: viewer.displayed_page().is_some(),
        }
    }

    /// Localized tooltip texts for the navigation, zoom and rotate buttons.
    #[must_use]
    pub fn button_labels(i18n: &I18n) -> ButtonLabels {
        ButtonLabels {
            previous_page: i18n.tr("viewer-previous-page"),
            next_page: i18n.tr("viewer-next-page"),
            zoom: i18n.tr("viewer-zoom"),
            rotate: i18n.tr("viewer-rotate"),
        }
    }

    /// Localized message for an invalid page field, if any.
    #[must_use]
    pub fn page_input_error(&self, i18n: &I18n) -> Option<String> {
        self.page_input_error_key.map(|key| {
            i18n.tr_with_args(key, &[("total", self.total_pages_label.as_str())])
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonLabels {
    pub previous_page: String,
    pub next_page: String,
    pub zoom: String,
    pub rotate: String,
}
