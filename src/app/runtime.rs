// SPDX-License-Identifier: MPL-2.0
//! Effect runtime for the document viewer.
//!
//! The viewer itself is synchronous. `ViewerRuntime` runs its effects: engine
//! calls are spawned on tokio and their completions are fed back as messages
//! through a channel, while notifications go straight to the notification
//! service. Viewer state is only ever touched from `dispatch`, one message at
//! a time, so completions can never interleave with a transition.

use crate::application::port::{NotificationService, RenderingEngine};
use crate::domain::ValidationError;
use crate::ui::viewer::{DocumentViewer, Effect, Message};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

/// Drives a [`DocumentViewer`] against a rendering engine.
pub struct ViewerRuntime<N> {
    viewer: DocumentViewer,
    engine: Arc<dyn RenderingEngine>,
    notifier: N,
    handle: Handle,
    sender: mpsc::UnboundedSender<Message>,
    receiver: mpsc::UnboundedReceiver<Message>,
    /// Engine calls spawned whose completion has not been processed yet.
    in_flight: usize,
}

impl<N: NotificationService> ViewerRuntime<N> {
    /// Creates a runtime spawning engine calls on `handle`.
    pub fn new(
        viewer: DocumentViewer,
        engine: Arc<dyn RenderingEngine>,
        notifier: N,
        handle: Handle,
    ) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            viewer,
            engine,
            notifier,
            handle,
            sender,
            receiver,
            in_flight: 0,
        }
    }

    /// Applies `message` and runs the resulting effects.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] when the message carried user input that
    /// was rejected. The viewer has already recorded it; nothing else changed.
    pub fn dispatch(&mut self, message: Message) -> Result<(), ValidationError> {
        let effect = self.viewer.handle_message(message);
        self.run(effect)
    }

    /// Waits for one engine completion and applies it.
    ///
    /// Returns `false` without waiting when no engine call is outstanding.
    /// Abandoned calls still count as outstanding, so this may wait on a
    /// result the viewer will discard.
    pub async fn process_next(&mut self) -> bool {
        if self.in_flight == 0 {
            return false;
        }
        let Some(message) = self.receiver.recv().await else {
            return false;
        };
        self.apply_completion(message);
        true
    }

    /// Applies every completion that has already arrived, without waiting.
    ///
    /// Returns how many were applied.
    pub fn process_ready(&mut self) -> usize {
        let mut applied = 0;
        while self.in_flight > 0 {
            let Ok(message) = self.receiver.try_recv() else {
                break;
            };
            self.apply_completion(message);
            applied += 1;
        }
        applied
    }

    /// Processes completions until the viewer waits on nothing.
    ///
    /// Completions may trigger new engine calls (a loaded document requests
    /// its first page); those are awaited as well. Calls the viewer has
    /// superseded or abandoned are not awaited: their late results are applied
    /// by a later `process_ready` or `process_next` and discarded there.
    pub async fn run_until_idle(&mut self) {
        loop {
            self.process_ready();
            if !self.viewer.has_pending_work() {
                break;
            }
            if !self.process_next().await {
                break;
            }
        }
    }

    #[must_use]
    pub fn viewer(&self) -> &DocumentViewer {
        &self.viewer
    }

    #[must_use]
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// Number of engine calls whose completion has not been applied yet,
    /// including calls the viewer no longer waits for.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    fn run(&mut self, effect: Effect) -> Result<(), ValidationError> {
        match effect {
            Effect::None => Ok(()),
            Effect::LoadMetadata { id, url } => {
                let future = self.engine.load_metadata(&url);
                self.spawn(async move {
                    Message::MetadataLoaded {
                        id,
                        result: future.await,
                    }
                });
                Ok(())
            }
            Effect::RenderPage(request) => {
                let id = request.id;
                let future = self.engine.render_page(&request);
                self.spawn(async move {
                    Message::PageRendered {
                        id,
                        result: future.await,
                    }
                });
                Ok(())
            }
            Effect::Notify(notification) => {
                self.notifier.notify(notification);
                Ok(())
            }
            Effect::ClearLoadErrors => {
                self.notifier.clear_load_errors();
                Ok(())
            }
            Effect::InputRejected(err) => Err(err),
            Effect::Batch(effects) => effects
                .into_iter()
                .try_for_each(|effect| self.run(effect)),
        }
    }

    fn apply_completion(&mut self, message: Message) {
        self.in_flight -= 1;
        // Completions carry no user input, so they cannot be rejected.
        let _ = self.dispatch(message);
    }

    fn spawn<F>(&mut self, completion: F)
    where
        F: std::future::Future<Output = Message> + Send + 'static,
    {
        let sender = self.sender.clone();
        self.in_flight += 1;
        self.handle.spawn(async move {
            // The receiver lives as long as the runtime; a closed channel only
            // means the runtime was dropped and nobody wants the result.
            let _ = sender.send(completion.await);
        });
    }
}

impl<N> std::fmt::Debug for ViewerRuntime<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewerRuntime")
            .field("viewer", &self.viewer)
            .field("in_flight", &self.in_flight)
            .finish_non_exhaustive()
    }
}
