// SPDX-License-Identifier: MPL-2.0
//! Page rotation, cycling in quarter turns.

use crate::domain::Rotation;

/// Rotation state.
#[derive(Debug, Clone, Default)]
pub struct State {
    rotation: Rotation,
}

/// Messages for the rotation sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Rotate 90° clockwise.
    RotateClockwise,
    /// Rotate 90° counter-clockwise.
    RotateCounterClockwise,
    /// Reset rotation to 0°.
    Reset,
}

/// Effects produced by rotation changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// Rotation changed; the page needs a new render.
    RotationChanged(Rotation),
}

impl State {
    /// Handle a rotation message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::RotateClockwise => self.apply(self.rotation.clockwise()),
            Message::RotateCounterClockwise => self.apply(self.rotation.counterclockwise()),
            Message::Reset => {
                if self.rotation == Rotation::Upright {
                    Effect::None
                } else {
                    self.apply(Rotation::Upright)
                }
            }
        }
    }

    fn apply(&mut self, rotation: Rotation) -> Effect {
        self.rotation = rotation;
        Effect::RotationChanged(rotation)
    }

    #[must_use]
    pub fn current(&self) -> Rotation {
        self.rotation
    }
}
