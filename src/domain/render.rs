// SPDX-License-Identifier: MPL-2.0
//! Render request bookkeeping.
//!
//! Every request sent to the rendering engine carries a [`RequestId`]. The
//! viewer remembers only the id of the newest request; a completion carrying
//! any other id is stale and gets dropped, whatever order the engine finishes
//! in.

use super::{DocumentUrl, PageNumber, Rotation, ZoomLevel};
use std::fmt;
use std::sync::Arc;

/// Identifies one engine call. Ids are never reused within a viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic id allocator, one per viewer.
#[derive(Debug, Clone, Default)]
pub struct RequestIdSource {
    last: u64,
}

impl RequestIdSource {
    pub fn next_id(&mut self) -> RequestId {
        self.last += 1;
        RequestId(self.last)
    }
}

/// Everything that determines how a page looks once rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderKey {
    pub page: PageNumber,
    pub zoom: ZoomLevel,
    pub rotation: Rotation,
    /// Container width in whole pixels, when the host has reported one.
    pub width: Option<u32>,
}

/// A render the viewer asks the engine to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub id: RequestId,
    pub url: DocumentUrl,
    pub key: RenderKey,
}

/// A rasterized page as produced by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    /// The key the engine rendered for.
    pub key: RenderKey,
    pub width_px: u32,
    pub height_px: u32,
    /// Backend-specific payload (RGBA pixels, an encoded bitmap, a canvas handle...).
    pub data: Arc<[u8]>,
}

impl RenderedPage {
    #[must_use]
    pub fn new(key: RenderKey, width_px: u32, height_px: u32, data: impl Into<Arc<[u8]>>) -> Self {
        Self {
            key,
            width_px,
            height_px,
            data: data.into(),
        }
    }

    /// Scale the page was rendered at.
    #[must_use]
    pub fn zoom(&self) -> ZoomLevel {
        self.key.zoom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_increase_monotonically() {
        let mut source = RequestIdSource::default();
        let first = source.next_id();
        let second = source.next_id();
        assert!(second > first);
        assert_ne!(first, second);
    }
}
