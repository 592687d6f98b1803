// SPDX-License-Identifier: MPL-2.0
//! Two-slot render buffer.
//!
//! The displayed slot holds the last page that rendered successfully. The
//! pending slot holds the one request the engine is working on. While a new
//! render is pending the displayed slot keeps showing the old content (possibly
//! at a stale scale); it is replaced only when the pending request succeeds.
//! A failed render leaves the displayed slot untouched.

use crate::domain::{EngineError, RenderKey, RenderRequest, RenderedPage, RequestId, ZoomLevel};

/// Outcome of the most recent render attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderPhase {
    /// Nothing in flight and the last attempt succeeded (or none was made).
    #[default]
    Idle,
    /// A request is in flight.
    Rendering,
    /// The last attempt failed and nothing is in flight.
    Failed,
}

/// What the buffer needs to show a given key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demand {
    /// The displayed slot already shows this key.
    UpToDate,
    /// A request for this key is already in flight.
    InFlight,
    /// A new request must be issued.
    Request,
}

/// Result of feeding an engine completion to the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The completion belongs to a superseded request and was dropped.
    Stale,
    /// The displayed slot now holds this key.
    Displayed(RenderKey),
    /// The render failed; the displayed slot is unchanged.
    Failed { key: RenderKey, error: EngineError },
}

/// Render buffer state.
#[derive(Debug, Clone, Default)]
pub struct State {
    displayed: Option<RenderedPage>,
    pending: Option<RenderRequest>,
    phase: RenderPhase,
}

impl State {
    /// Decides whether `key` needs a new engine request.
    ///
    /// Asking for the key that is already displayed abandons any pending
    /// request for another key, so its completion is discarded when it
    /// arrives.
    pub fn demand(&mut self, key: RenderKey) -> Demand {
        if self.pending.as_ref().is_some_and(|p| p.key == key) {
            return Demand::InFlight;
        }

        if self.displayed.as_ref().is_some_and(|d| d.key == key) {
            if let Some(abandoned) = self.pending.take() {
                tracing::debug!(request = %abandoned.id, "render abandoned, key already displayed");
            }
            self.phase = RenderPhase::Idle;
            return Demand::UpToDate;
        }

        Demand::Request
    }

    /// Records `request` as the only pending request, superseding any other.
    pub fn begin(&mut self, request: RenderRequest) {
        if let Some(superseded) = self.pending.replace(request) {
            tracing::debug!(request = %superseded.id, "render superseded");
        }
        self.phase = RenderPhase::Rendering;
    }

    /// Applies an engine completion for request `id`.
    pub fn complete(&mut self, id: RequestId, result: Result<RenderedPage, EngineError>) -> Completion {
        let Some(pending) = self.pending.take_if(|p| p.id == id) else {
            return Completion::Stale;
        };

        match result {
            Ok(mut page) => {
                // The engine may echo a different key; the request is authoritative.
                page.key = pending.key;
                self.displayed = Some(page);
                self.phase = RenderPhase::Idle;
                Completion::Displayed(pending.key)
            }
            Err(error) => {
                self.phase = RenderPhase::Failed;
                Completion::Failed {
                    key: pending.key,
                    error,
                }
            }
        }
    }

    /// Drops both slots (new document).
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn displayed(&self) -> Option<&RenderedPage> {
        self.displayed.as_ref()
    }

    #[must_use]
    pub fn pending(&self) -> Option<&RenderRequest> {
        self.pending.as_ref()
    }

    #[must_use]
    pub fn phase(&self) -> RenderPhase {
        self.phase
    }

    /// Scale of the content in the displayed slot.
    #[must_use]
    pub fn rendered_zoom(&self) -> Option<ZoomLevel> {
        self.displayed.as_ref().map(RenderedPage::zoom)
    }
}
