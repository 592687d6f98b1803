// SPDX-License-Identifier: MPL-2.0
//! Document loading sub-component.
//!
//! Tracks which document is open and whether its page count is known. The
//! page count is written once per document; later metadata completions for the
//! same document are treated as stale.

use crate::domain::{
    DocumentMetadata, DocumentUrl, EngineError, LoadError, PageCount, RequestId,
};

/// Where the document currently is in its load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// No document has been opened.
    #[default]
    Unloaded,
    /// Metadata has been requested from the engine.
    Loading,
    /// Page count is known.
    Ready(PageCount),
    /// Loading failed; only reopening retries.
    Failed,
}

/// Document sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    url: Option<DocumentUrl>,
    status: LoadStatus,
    pending: Option<RequestId>,
    error: Option<LoadError>,
}

/// Messages for the document sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A new document was opened; `url` is `None` when it failed to parse.
    Open {
        id: RequestId,
        url: Option<DocumentUrl>,
    },
    /// The engine answered a metadata request.
    MetadataLoaded {
        id: RequestId,
        result: Result<DocumentMetadata, EngineError>,
    },
}

/// Effects produced by the document sub-component.
#[derive(Debug, Clone)]
pub enum Effect {
    /// No effect.
    None,
    /// Metadata must be fetched for `url`.
    LoadMetadata { id: RequestId, url: DocumentUrl },
    /// The document loaded with this many pages.
    Ready(PageCount),
    /// The document could not be loaded.
    Failed(LoadError),
    /// A completion arrived for a request that is no longer current.
    Stale(RequestId),
}

impl State {
    /// Handle a document message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Open { id, url } => {
                *self = Self::default();
                match url {
                    Some(url) => {
                        self.url = Some(url.clone());
                        self.status = LoadStatus::Loading;
                        self.pending = Some(id);
                        Effect::LoadMetadata { id, url }
                    }
                    None => self.fail(LoadError::InvalidUrl),
                }
            }
            Message::MetadataLoaded { id, result } => {
                if self.pending != Some(id) {
                    return Effect::Stale(id);
                }
                self.pending = None;

                match result {
                    Ok(metadata) => match PageCount::new(metadata.total_pages) {
                        Some(total) => {
                            self.status = LoadStatus::Ready(total);
                            Effect::Ready(total)
                        }
                        None => self.fail(LoadError::EmptyDocument),
                    },
                    Err(err) => self.fail(LoadError::Engine(err)),
                }
            }
        }
    }

    fn fail(&mut self, error: LoadError) -> Effect {
        self.status = LoadStatus::Failed;
        self.error = Some(error.clone());
        Effect::Failed(error)
    }

    #[must_use]
    pub fn url(&self) -> Option<&DocumentUrl> {
        self.url.as_ref()
    }

    #[must_use]
    pub fn status(&self) -> LoadStatus {
        self.status
    }

    /// Page count, once the metadata has loaded.
    #[must_use]
    pub fn total_pages(&self) -> Option<PageCount> {
        match self.status {
            LoadStatus::Ready(total) => Some(total),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    /// The reason the last load failed, if it did.
    #[must_use]
    pub fn error(&self) -> Option<&LoadError> {
        self.error.as_ref()
    }
}
