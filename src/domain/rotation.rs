// SPDX-License-Identifier: MPL-2.0
//! Quarter-turn page rotation.

use std::fmt;

/// Clockwise page rotation, always one of 0°, 90°, 180° or 270°.
///
/// # Example
///
/// ```
/// use folio::domain::Rotation;
///
/// let rotation = Rotation::default();
/// assert_eq!(rotation.degrees(), 0);
///
/// let full = rotation.clockwise().clockwise().clockwise().clockwise();
/// assert_eq!(full, Rotation::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    Upright,
    Quarter,
    Half,
    ThreeQuarter,
}

impl Rotation {
    /// Normalizes any multiple of 90 degrees, including negative ones.
    ///
    /// Returns `None` for angles that are not a multiple of 90.
    #[must_use]
    pub fn from_degrees(degrees: i32) -> Option<Self> {
        if degrees % 90 != 0 {
            return None;
        }
        match degrees.rem_euclid(360) {
            0 => Some(Self::Upright),
            90 => Some(Self::Quarter),
            180 => Some(Self::Half),
            270 => Some(Self::ThreeQuarter),
            _ => None,
        }
    }

    #[must_use]
    pub fn degrees(self) -> u16 {
        match self {
            Self::Upright => 0,
            Self::Quarter => 90,
            Self::Half => 180,
            Self::ThreeQuarter => 270,
        }
    }

    /// Rotates 90° clockwise, wrapping at 360°.
    #[must_use]
    pub fn clockwise(self) -> Self {
        match self {
            Self::Upright => Self::Quarter,
            Self::Quarter => Self::Half,
            Self::Half => Self::ThreeQuarter,
            Self::ThreeQuarter => Self::Upright,
        }
    }

    /// Rotates 90° counter-clockwise, wrapping at 0°.
    #[must_use]
    pub fn counterclockwise(self) -> Self {
        match self {
            Self::Upright => Self::ThreeQuarter,
            Self::Quarter => Self::Upright,
            Self::Half => Self::Quarter,
            Self::ThreeQuarter => Self::Half,
        }
    }

    /// True for 90° and 270°, where the rendered page is laid out sideways.
    #[must_use]
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, Self::Quarter | Self::ThreeQuarter)
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}
