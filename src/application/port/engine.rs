// SPDX-License-Identifier: MPL-2.0
//! Rendering engine port.
//!
//! The engine decodes documents and rasterizes pages. The viewer never looks
//! inside a document itself; it only asks for metadata and rendered pages.

use crate::domain::{DocumentMetadata, DocumentUrl, RenderRequest, RenderedPage};
use futures_util::future::BoxFuture;

pub use crate::domain::EngineError;

/// Port for a document rendering backend.
///
/// Each call completes exactly once. Calls are never cancelled by the viewer;
/// results for superseded requests are simply ignored.
///
/// # Example
///
/// ```ignore
/// use folio::application::port::RenderingEngine;
///
/// async fn page_count(engine: &dyn RenderingEngine, url: &DocumentUrl) -> Option<u32> {
///     engine.load_metadata(url).await.ok().map(|meta| meta.total_pages)
/// }
/// ```
pub trait RenderingEngine: Send + Sync {
    /// Opens the document and reports its metadata.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] if the document cannot be fetched or parsed.
    fn load_metadata(
        &self,
        url: &DocumentUrl,
    ) -> BoxFuture<'static, Result<DocumentMetadata, EngineError>>;

    /// Renders one page at the scale, rotation and width in `request.key`.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] if the page cannot be rasterized.
    fn render_page(
        &self,
        request: &RenderRequest,
    ) -> BoxFuture<'static, Result<RenderedPage, EngineError>>;
}
