// SPDX-License-Identifier: MPL-2.0
//! Document viewer component.
//!
//! `DocumentViewer` orchestrates the sub-components: it applies one
//! [`Message`] at a time and answers with an [`Effect`] describing the work
//! the host must do (engine calls, notifications). It never performs I/O
//! itself, so every transition can be driven synchronously in tests.

use super::subcomponents::{document, pagination, render_buffer, rotation, zoom};
use crate::config::Config;
use crate::domain::{
    DocumentMetadata, DocumentUrl, EngineError, LoadError, PageCount, PageNumber, RenderError,
    RenderKey, RenderRequest, RenderedPage, RequestId, RequestIdSource, Rotation, ValidationError,
    ZoomLevel, ZoomLevels,
};
use crate::ui::notifications::Notification;

pub use document::LoadStatus;
pub use render_buffer::RenderPhase;

/// Messages accepted by the viewer.
#[derive(Debug, Clone)]
pub enum Message {
    /// Open the document at this location, discarding the current one.
    Open(String),
    /// The engine answered a metadata request.
    MetadataLoaded {
        id: RequestId,
        result: Result<DocumentMetadata, EngineError>,
    },
    /// The engine answered a render request.
    PageRendered {
        id: RequestId,
        result: Result<RenderedPage, EngineError>,
    },
    NextPage,
    PreviousPage,
    GoToPage(i64),
    /// The page field was edited (not yet committed).
    PageInputChanged(String),
    /// The page field was submitted with this text.
    PageInputSubmitted(String),
    ZoomIn,
    ZoomOut,
    ResetZoom,
    /// Select a zoom level from the supported set.
    SelectZoom(ZoomLevel),
    /// Select a zoom level given as a scale factor (`1.5` for 150%).
    SetZoom(f32),
    RotateClockwise,
    RotateCounterClockwise,
    /// The host reported the width available to the page, in pixels.
    ViewportResized(f32),
}

/// Work requested by the viewer after handling a message.
#[derive(Debug, Clone)]
pub enum Effect {
    None,
    /// Fetch document metadata.
    LoadMetadata { id: RequestId, url: DocumentUrl },
    /// Render a page.
    RenderPage(RenderRequest),
    /// Show a notification.
    Notify(Notification),
    /// Remove notifications left over from earlier load failures.
    ClearLoadErrors,
    /// User input was rejected; state is unchanged apart from the input flag.
    InputRejected(ValidationError),
    /// Several effects, to be run in order.
    Batch(Vec<Effect>),
}

impl Effect {
    fn batch(effects: impl IntoIterator<Item = Effect>) -> Self {
        let mut effects: Vec<Effect> = effects
            .into_iter()
            .filter(|effect| !matches!(effect, Effect::None))
            .collect();
        match effects.len() {
            0 => Effect::None,
            1 => effects.pop().unwrap_or(Effect::None),
            _ => Effect::Batch(effects),
        }
    }
}

/// Snapshot of the user-visible viewer state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerState {
    pub total_pages: Option<PageCount>,
    pub current_page: PageNumber,
    pub zoom: ZoomLevel,
    pub rotation: Rotation,
    pub rendered_zoom: Option<ZoomLevel>,
    pub page_input: String,
}

/// Paginated document viewer.
#[derive(Debug, Clone, Default)]
pub struct DocumentViewer {
    document: document::State,
    pagination: pagination::State,
    zoom: zoom::State,
    rotation: rotation::State,
    render: render_buffer::State,
    viewport_width: Option<u32>,
    render_error: Option<RenderError>,
    ids: RequestIdSource,
}

impl DocumentViewer {
    /// Creates a viewer offering the given zoom levels.
    #[must_use]
    pub fn new(zoom_levels: ZoomLevels) -> Self {
        Self {
            zoom: zoom::State::new(zoom_levels),
            ..Self::default()
        }
    }

    /// Creates a viewer from the `[viewer]` section of the configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.viewer.zoom_levels())
    }

    /// Applies one message and returns the work it requires.
    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::Open(raw) => self.open(&raw),
            Message::MetadataLoaded { id, result } => self.metadata_loaded(id, result),
            Message::PageRendered { id, result } => self.page_rendered(id, result),
            Message::NextPage => self.paginate(pagination::Message::Next),
            Message::PreviousPage => self.paginate(pagination::Message::Previous),
            Message::GoToPage(page) => self.paginate(pagination::Message::GoTo(page)),
            Message::PageInputChanged(text) => {
                self.paginate(pagination::Message::InputChanged(text))
            }
            Message::PageInputSubmitted(text) => {
                self.paginate(pagination::Message::InputSubmitted(text))
            }
            Message::ZoomIn => self.change_zoom(zoom::Message::ZoomIn),
            Message::ZoomOut => self.change_zoom(zoom::Message::ZoomOut),
            Message::ResetZoom => self.change_zoom(zoom::Message::Reset),
            Message::SelectZoom(level) => self.change_zoom(zoom::Message::Select(level)),
            Message::SetZoom(scale) => self.change_zoom(zoom::Message::SetScale(scale)),
            Message::RotateClockwise => self.change_rotation(rotation::Message::RotateClockwise),
            Message::RotateCounterClockwise => {
                self.change_rotation(rotation::Message::RotateCounterClockwise)
            }
            Message::ViewportResized(width) => self.resize(width),
        }
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    pub fn load_document(&mut self, url: &str) -> Effect {
        self.handle_message(Message::Open(url.to_string()))
    }

    pub fn on_metadata_loaded(
        &mut self,
        id: RequestId,
        result: Result<DocumentMetadata, EngineError>,
    ) -> Effect {
        self.handle_message(Message::MetadataLoaded { id, result })
    }

    pub fn on_page_rendered(
        &mut self,
        id: RequestId,
        result: Result<RenderedPage, EngineError>,
    ) -> Effect {
        self.handle_message(Message::PageRendered { id, result })
    }

    pub fn go_to_page(&mut self, page: i64) -> Effect {
        self.handle_message(Message::GoToPage(page))
    }

    pub fn next_page(&mut self) -> Effect {
        self.handle_message(Message::NextPage)
    }

    pub fn previous_page(&mut self) -> Effect {
        self.handle_message(Message::PreviousPage)
    }

    pub fn page_input_changed(&mut self, text: &str) -> Effect {
        self.handle_message(Message::PageInputChanged(text.to_string()))
    }

    pub fn submit_page_input(&mut self, text: &str) -> Effect {
        self.handle_message(Message::PageInputSubmitted(text.to_string()))
    }

    pub fn set_zoom(&mut self, level: ZoomLevel) -> Effect {
        self.handle_message(Message::SelectZoom(level))
    }

    pub fn zoom_in(&mut self) -> Effect {
        self.handle_message(Message::ZoomIn)
    }

    pub fn zoom_out(&mut self) -> Effect {
        self.handle_message(Message::ZoomOut)
    }

    pub fn rotate(&mut self) -> Effect {
        self.handle_message(Message::RotateClockwise)
    }

    pub fn rotate_counterclockwise(&mut self) -> Effect {
        self.handle_message(Message::RotateCounterClockwise)
    }

    pub fn viewport_resized(&mut self, width: f32) -> Effect {
        self.handle_message(Message::ViewportResized(width))
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    fn open(&mut self, raw: &str) -> Effect {
        let id = self.ids.next_id();
        let url = DocumentUrl::parse(raw);

        self.pagination.handle(pagination::Message::Reset, None);
        self.zoom.handle(zoom::Message::Reset);
        self.rotation.handle(rotation::Message::Reset);
        self.render.clear();
        self.render_error = None;

        match self.document.handle(document::Message::Open { id, url }) {
            document::Effect::LoadMetadata { id, url } => {
                tracing::debug!(request = %id, url = %url, "loading document");
                Effect::LoadMetadata { id, url }
            }
            document::Effect::Failed(err) => Self::load_failed(&err),
            _ => Effect::None,
        }
    }

    fn metadata_loaded(
        &mut self,
        id: RequestId,
        result: Result<DocumentMetadata, EngineError>,
    ) -> Effect {
        match self.document.handle(document::Message::MetadataLoaded { id, result }) {
            document::Effect::Ready(total) => {
                tracing::debug!(request = %id, pages = total.get(), "document loaded");
                self.pagination
                    .handle(pagination::Message::Reset, Some(total));
                Effect::batch([Effect::ClearLoadErrors, self.request_render()])
            }
            document::Effect::Failed(err) => Self::load_failed(&err),
            document::Effect::Stale(id) => {
                tracing::debug!(request = %id, "discarding stale metadata");
                Effect::None
            }
            document::Effect::LoadMetadata { .. } | document::Effect::None => Effect::None,
        }
    }

    fn load_failed(err: &LoadError) -> Effect {
        tracing::warn!(error = %err, "document failed to load");
        Effect::Notify(
            Notification::error("notification-load-error-title").with_description(err.i18n_key()),
        )
    }

    fn page_rendered(&mut self, id: RequestId, result: Result<RenderedPage, EngineError>) -> Effect {
        match self.render.complete(id, result) {
            render_buffer::Completion::Stale => {
                tracing::debug!(request = %id, "discarding stale render");
                Effect::None
            }
            render_buffer::Completion::Displayed(key) => {
                tracing::debug!(request = %id, page = key.page.get(), zoom = %key.zoom, "page displayed");
                self.render_error = None;
                Effect::None
            }
            render_buffer::Completion::Failed { key, error } => {
                let err = RenderError {
                    page: key.page,
                    zoom: key.zoom,
                    rotation: key.rotation,
                    source: error,
                };
                tracing::warn!(request = %id, error = %err, "page render failed");
                self.render_error = Some(err);
                Effect::Notify(
                    Notification::error("notification-render-error-title")
                        .with_description("notification-render-error-description")
                        .with_arg("page", key.page.to_string()),
                )
            }
        }
    }

    fn paginate(&mut self, msg: pagination::Message) -> Effect {
        match self.pagination.handle(msg, self.document.total_pages()) {
            pagination::Effect::PageChanged(page) => {
                tracing::debug!(page = page.get(), "page changed");
                self.request_render()
            }
            pagination::Effect::Rejected(err) => {
                tracing::debug!(error = %err, "page input rejected");
                Effect::InputRejected(err)
            }
            pagination::Effect::None => Effect::None,
        }
    }

    fn change_zoom(&mut self, msg: zoom::Message) -> Effect {
        match self.zoom.handle(msg) {
            zoom::Effect::ZoomChanged(level) => {
                tracing::debug!(zoom = %level, "zoom changed");
                self.request_render()
            }
            zoom::Effect::Rejected(err) => {
                tracing::debug!(error = %err, "zoom rejected");
                Effect::InputRejected(err)
            }
            zoom::Effect::None => Effect::None,
        }
    }

    fn change_rotation(&mut self, msg: rotation::Message) -> Effect {
        match self.rotation.handle(msg) {
            rotation::Effect::RotationChanged(rotation) => {
                tracing::debug!(rotation = %rotation, "rotation changed");
                self.request_render()
            }
            rotation::Effect::None => Effect::None,
        }
    }

    fn resize(&mut self, width: f32) -> Effect {
        let Some(width) = container_width(width) else {
            tracing::debug!(width, "ignoring unusable viewport width");
            return Effect::None;
        };
        if self.viewport_width == Some(width) {
            return Effect::None;
        }
        self.viewport_width = Some(width);
        self.request_render()
    }

    /// Issues a render for the current key unless it is displayed or in flight.
    fn request_render(&mut self) -> Effect {
        let Some(url) = self.document.url().cloned() else {
            return Effect::None;
        };
        if self.document.total_pages().is_none() {
            return Effect::None;
        }

        let key = self.desired_key();
        match self.render.demand(key) {
            render_buffer::Demand::Request => {
                let request = RenderRequest {
                    id: self.ids.next_id(),
                    url,
                    key,
                };
                tracing::debug!(
                    request = %request.id,
                    page = key.page.get(),
                    zoom = %key.zoom,
                    rotation = %key.rotation,
                    "requesting render"
                );
                self.render.begin(request.clone());
                Effect::RenderPage(request)
            }
            render_buffer::Demand::InFlight | render_buffer::Demand::UpToDate => Effect::None,
        }
    }

    fn desired_key(&self) -> RenderKey {
        RenderKey {
            page: self.pagination.current(),
            zoom: self.zoom.current(),
            rotation: self.rotation.current(),
            width: self.viewport_width,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn state(&self) -> ViewerState {
        ViewerState {
            total_pages: self.total_pages(),
            current_page: self.current_page(),
            zoom: self.zoom(),
            rotation: self.rotation(),
            rendered_zoom: self.rendered_zoom(),
            page_input: self.page_input().to_string(),
        }
    }

    #[must_use]
    pub fn url(&self) -> Option<&DocumentUrl> {
        self.document.url()
    }

    #[must_use]
    pub fn load_status(&self) -> LoadStatus {
        self.document.status()
    }

    #[must_use]
    pub fn load_error(&self) -> Option<&LoadError> {
        self.document.error()
    }

    #[must_use]
    pub fn total_pages(&self) -> Option<PageCount> {
        self.document.total_pages()
    }

    #[must_use]
    pub fn current_page(&self) -> PageNumber {
        self.pagination.current()
    }

    #[must_use]
    pub fn page_input(&self) -> &str {
        self.pagination.input()
    }

    /// The reason the last submitted page text was rejected.
    #[must_use]
    pub fn page_input_error(&self) -> Option<&ValidationError> {
        self.pagination.input_error()
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.total_pages()
            .is_some_and(|total| self.current_page().next_within(total).is_some())
    }

    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        self.total_pages().is_some() && self.current_page().previous().is_some()
    }

    /// The requested zoom level.
    #[must_use]
    pub fn zoom(&self) -> ZoomLevel {
        self.zoom.current()
    }

    #[must_use]
    pub fn zoom_levels(&self) -> &ZoomLevels {
        self.zoom.levels()
    }

    #[must_use]
    pub fn can_zoom_in(&self) -> bool {
        self.zoom.can_zoom_in()
    }

    #[must_use]
    pub fn can_zoom_out(&self) -> bool {
        self.zoom.can_zoom_out()
    }

    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.rotation.current()
    }

    /// Zoom level of the displayed render.
    #[must_use]
    pub fn rendered_zoom(&self) -> Option<ZoomLevel> {
        self.render.rendered_zoom()
    }

    /// Whether the displayed content lags behind the requested zoom.
    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.rendered_zoom() != Some(self.zoom())
    }

    #[must_use]
    pub fn render_phase(&self) -> RenderPhase {
        self.render.phase()
    }

    /// The most recent render failure, cleared by the next successful render.
    #[must_use]
    pub fn render_error(&self) -> Option<&RenderError> {
        self.render_error.as_ref()
    }

    #[must_use]
    pub fn displayed_page(&self) -> Option<&RenderedPage> {
        self.render.displayed()
    }

    #[must_use]
    pub fn pending_render(&self) -> Option<&RenderRequest> {
        self.render.pending()
    }

    /// Whether the viewer still waits for document metadata or a page render.
    #[must_use]
    pub fn has_pending_work(&self) -> bool {
        self.load_status() == LoadStatus::Loading || self.pending_render().is_some()
    }

    #[must_use]
    pub fn viewport_width(&self) -> Option<u32> {
        self.viewport_width
    }
}

/// Rounds a reported width to whole pixels, rejecting unusable values.
fn container_width(width: f32) -> Option<u32> {
    if !width.is_finite() || width < 1.0 {
        return None;
    }
    // Float to int casts saturate.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Some(width.round() as u32)
}
