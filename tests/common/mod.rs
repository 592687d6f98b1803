// SPDX-License-Identifier: MPL-2.0
#![allow(dead_code)]

use folio::application::port::RenderingEngine;
use folio::domain::{
    DocumentMetadata, DocumentUrl, EngineError, RenderRequest, RenderedPage, ZoomLevel,
};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::oneshot;

pub fn percent(p: u16) -> ZoomLevel {
    ZoomLevel::from_percent(p).expect("non-zero zoom")
}

pub fn rendered(request: &RenderRequest) -> RenderedPage {
    RenderedPage::new(request.key, 612, 792, vec![0_u8; 64])
}

/// Engine answering immediately from a fixed script.
pub struct ScriptedEngine {
    metadata: Result<DocumentMetadata, EngineError>,
    failing_zooms: HashSet<ZoomLevel>,
    metadata_calls: AtomicUsize,
    render_calls: AtomicUsize,
}

impl ScriptedEngine {
    pub fn with_pages(pages: u32) -> Self {
        Self {
            metadata: Ok(DocumentMetadata::new(pages)),
            failing_zooms: HashSet::new(),
            metadata_calls: AtomicUsize::new(0),
            render_calls: AtomicUsize::new(0),
        }
    }

    pub fn failing_load(error: EngineError) -> Self {
        Self {
            metadata: Err(error),
            ..Self::with_pages(1)
        }
    }

    /// Renders at `zoom` fail.
    pub fn failing_at(mut self, zoom: ZoomLevel) -> Self {
        self.failing_zooms.insert(zoom);
        self
    }

    pub fn metadata_calls(&self) -> usize {
        self.metadata_calls.load(Ordering::SeqCst)
    }

    pub fn render_calls(&self) -> usize {
        self.render_calls.load(Ordering::SeqCst)
    }
}

impl RenderingEngine for ScriptedEngine {
    fn load_metadata(
        &self,
        _url: &DocumentUrl,
    ) -> BoxFuture<'static, Result<DocumentMetadata, EngineError>> {
        self.metadata_calls.fetch_add(1, Ordering::SeqCst);
        futures_util::future::ready(self.metadata.clone()).boxed()
    }

    fn render_page(
        &self,
        request: &RenderRequest,
    ) -> BoxFuture<'static, Result<RenderedPage, EngineError>> {
        self.render_calls.fetch_add(1, Ordering::SeqCst);
        let result = if self.failing_zooms.contains(&request.key.zoom) {
            Err(EngineError::Other(format!("cannot render at {}", request.key.zoom)))
        } else {
            Ok(rendered(request))
        };
        futures_util::future::ready(result).boxed()
    }
}

type Reply<T> = oneshot::Sender<Result<T, EngineError>>;

/// Engine whose calls complete only when the test resolves them.
#[derive(Default)]
pub struct ControlledEngine {
    metadata: Mutex<Vec<(DocumentUrl, Reply<DocumentMetadata>)>>,
    renders: Mutex<Vec<(RenderRequest, Reply<RenderedPage>)>>,
}

impl ControlledEngine {
    pub fn pending_renders(&self) -> Vec<RenderRequest> {
        self.renders
            .lock()
            .expect("lock")
            .iter()
            .map(|(request, _)| request.clone())
            .collect()
    }

    /// Completes the oldest metadata request.
    pub fn resolve_metadata(&self, result: Result<DocumentMetadata, EngineError>) {
        let (_, reply) = self.metadata.lock().expect("lock").remove(0);
        let _ = reply.send(result);
    }

    /// Completes the pending render at `zoom` successfully.
    pub fn resolve_render_at(&self, zoom: ZoomLevel) {
        let (request, reply) = self.take_render(zoom);
        let _ = reply.send(Ok(rendered(&request)));
    }

    /// Fails the pending render at `zoom`.
    pub fn fail_render_at(&self, zoom: ZoomLevel, error: EngineError) {
        let (_, reply) = self.take_render(zoom);
        let _ = reply.send(Err(error));
    }

    fn take_render(&self, zoom: ZoomLevel) -> (RenderRequest, Reply<RenderedPage>) {
        let mut renders = self.renders.lock().expect("lock");
        let index = renders
            .iter()
            .position(|(request, _)| request.key.zoom == zoom)
            .unwrap_or_else(|| panic!("no pending render at {zoom}"));
        renders.remove(index)
    }
}

fn await_reply<T: Send + 'static>(
    receiver: oneshot::Receiver<Result<T, EngineError>>,
) -> BoxFuture<'static, Result<T, EngineError>> {
    async move {
        receiver
            .await
            .unwrap_or_else(|_| Err(EngineError::Other("engine dropped the request".into())))
    }
    .boxed()
}

impl RenderingEngine for ControlledEngine {
    fn load_metadata(
        &self,
        url: &DocumentUrl,
    ) -> BoxFuture<'static, Result<DocumentMetadata, EngineError>> {
        let (reply, receiver) = oneshot::channel();
        self.metadata
            .lock()
            .expect("lock")
            .push((url.clone(), reply));
        await_reply(receiver)
    }

    fn render_page(
        &self,
        request: &RenderRequest,
    ) -> BoxFuture<'static, Result<RenderedPage, EngineError>> {
        let (reply, receiver) = oneshot::channel();
        self.renders
            .lock()
            .expect("lock")
            .push((request.clone(), reply));
        await_reply(receiver)
    }
}
