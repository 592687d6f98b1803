// SPDX-License-Identifier: MPL-2.0
//! Zoom sub-component: the requested scale, restricted to the configured levels.

use crate::domain::{ValidationError, ZoomLevel, ZoomLevels};

/// Zoom sub-component state.
#[derive(Debug, Clone)]
pub struct State {
    levels: ZoomLevels,
    current: ZoomLevel,
}

impl Default for State {
    fn default() -> Self {
        Self::new(ZoomLevels::default())
    }
}

/// Messages for the zoom sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Step to the next larger level.
    ZoomIn,
    /// Step to the next smaller level.
    ZoomOut,
    /// Back to the default level.
    Reset,
    /// Select a level.
    Select(ZoomLevel),
    /// Select a level given as a scale factor (`1.5` for 150%).
    SetScale(f32),
}

/// Effects produced by zoom changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// A level was selected, possibly the one already active.
    ZoomChanged(ZoomLevel),
    /// The requested level is not offered.
    Rejected(ValidationError),
}

impl State {
    /// Creates a zoom state starting at the default of `levels`.
    #[must_use]
    pub fn new(levels: ZoomLevels) -> Self {
        let current = levels.default_level();
        Self { levels, current }
    }

    /// Handle a zoom message.
    ///
    /// Re-selecting the active level still reports `ZoomChanged`, which lets the
    /// viewer retry a render that failed at this level.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::ZoomIn => match self.levels.step_in(self.current) {
                Some(level) => self.apply(level),
                None => Effect::None,
            },
            Message::ZoomOut => match self.levels.step_out(self.current) {
                Some(level) => self.apply(level),
                None => Effect::None,
            },
            Message::Reset => self.apply(self.levels.default_level()),
            Message::Select(level) => self.select(level),
            Message::SetScale(scale) => match ZoomLevel::from_scale(scale) {
                Some(level) => self.select(level),
                None => Effect::Rejected(ValidationError::InvalidZoomScale),
            },
        }
    }

    fn select(&mut self, level: ZoomLevel) -> Effect {
        if self.levels.contains(level) {
            self.apply(level)
        } else {
            Effect::Rejected(ValidationError::UnsupportedZoom(level.percent()))
        }
    }

    fn apply(&mut self, level: ZoomLevel) -> Effect {
        self.current = level;
        Effect::ZoomChanged(level)
    }

    #[must_use]
    pub fn current(&self) -> ZoomLevel {
        self.current
    }

    #[must_use]
    pub fn levels(&self) -> &ZoomLevels {
        &self.levels
    }

    #[must_use]
    pub fn can_zoom_in(&self) -> bool {
        self.levels.step_in(self.current).is_some()
    }

    #[must_use]
    pub fn can_zoom_out(&self) -> bool {
        self.levels.step_out(self.current).is_some()
    }
}
