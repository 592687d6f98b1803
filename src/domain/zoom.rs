// SPDX-License-Identifier: MPL-2.0
//! Enumerated zoom levels.
//!
//! The viewer only ever renders at one of a fixed set of scales, so zoom is
//! stored as an integer percentage. Comparing two levels never involves float
//! equality.

use std::fmt;

/// Zoom levels offered by the viewer, in percent.
pub const DEFAULT_ZOOM_LEVELS_PERCENT: [u16; 4] = [100, 150, 200, 250];

/// Zoom level when a document is opened (100% = 1.0x).
pub const DEFAULT_ZOOM_PERCENT: u16 = 100;

/// A zoom level expressed as a whole percentage (100 = 1.0x).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ZoomLevel(u16);

impl ZoomLevel {
    /// Creates a zoom level from a percentage. Zero is rejected.
    #[must_use]
    pub fn from_percent(percent: u16) -> Option<Self> {
        (percent > 0).then_some(Self(percent))
    }

    /// Converts a scale factor (e.g. `1.5`) to the nearest whole percentage.
    #[must_use]
    pub fn from_scale(scale: f32) -> Option<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return None;
        }
        let percent = (scale * 100.0).round();
        if percent < 1.0 || percent > f32::from(u16::MAX) {
            return None;
        }
        // Range checked above.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Self::from_percent(percent as u16)
    }

    #[must_use]
    pub fn percent(self) -> u16 {
        self.0
    }

    /// Returns the zoom as a multiplier (e.g., 150% → 1.5).
    #[must_use]
    pub fn scale(self) -> f32 {
        f32::from(self.0) / 100.0
    }
}

impl fmt::Display for ZoomLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// The supported zoom set: sorted, deduplicated and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoomLevels {
    levels: Vec<ZoomLevel>,
    default: ZoomLevel,
}

impl ZoomLevels {
    /// Builds a zoom set from percentages.
    ///
    /// Zero entries are dropped. Returns `None` when nothing valid remains or
    /// when `default_percent` is not part of the set.
    #[must_use]
    pub fn new(percents: &[u16], default_percent: u16) -> Option<Self> {
        let mut levels: Vec<ZoomLevel> = percents
            .iter()
            .copied()
            .filter_map(ZoomLevel::from_percent)
            .collect();
        levels.sort_unstable();
        levels.dedup();

        let default = ZoomLevel::from_percent(default_percent)?;
        if !levels.contains(&default) {
            return None;
        }

        Some(Self { levels, default })
    }

    /// Returns the level the viewer starts at.
    #[must_use]
    pub fn default_level(&self) -> ZoomLevel {
        self.default
    }

    #[must_use]
    pub fn contains(&self, level: ZoomLevel) -> bool {
        self.levels.binary_search(&level).is_ok()
    }

    /// Looks up a scale factor in the set.
    #[must_use]
    pub fn find_scale(&self, scale: f32) -> Option<ZoomLevel> {
        ZoomLevel::from_scale(scale).filter(|level| self.contains(*level))
    }

    /// Returns the next larger level, if any.
    #[must_use]
    pub fn step_in(&self, from: ZoomLevel) -> Option<ZoomLevel> {
        self.levels.iter().copied().find(|level| *level > from)
    }

    /// Returns the next smaller level, if any.
    #[must_use]
    pub fn step_out(&self, from: ZoomLevel) -> Option<ZoomLevel> {
        self.levels.iter().rev().copied().find(|level| *level < from)
    }

    pub fn iter(&self) -> impl Iterator<Item = ZoomLevel> + '_ {
        self.levels.iter().copied()
    }
}

impl Default for ZoomLevels {
    fn default() -> Self {
        Self {
            levels: DEFAULT_ZOOM_LEVELS_PERCENT
                .iter()
                .copied()
                .map(ZoomLevel)
                .collect(),
            default: ZoomLevel(DEFAULT_ZOOM_PERCENT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_matches_menu_entries() {
        let levels = ZoomLevels::default();
        let percents: Vec<u16> = levels.iter().map(ZoomLevel::percent).collect();
        assert_eq!(percents, vec![100, 150, 200, 250]);
        assert_eq!(levels.default_level().percent(), 100);
    }

    #[test]
    fn from_scale_rounds_to_whole_percent() {
        assert_eq!(ZoomLevel::from_scale(1.5).map(ZoomLevel::percent), Some(150));
        assert_eq!(ZoomLevel::from_scale(2.5).map(ZoomLevel::percent), Some(250));
        assert!(ZoomLevel::from_scale(0.0).is_none());
        assert!(ZoomLevel::from_scale(f32::NAN).is_none());
        assert!(ZoomLevel::from_scale(-1.0).is_none());
    }

    #[test]
    fn find_scale_rejects_levels_outside_the_set() {
        let levels = ZoomLevels::default();
        assert!(levels.find_scale(2.0).is_some());
        assert!(levels.find_scale(1.25).is_none());
    }

    #[test]
    fn new_sorts_and_dedups() {
        let levels = ZoomLevels::new(&[200, 0, 100, 200, 150], 150).expect("valid set");
        let percents: Vec<u16> = levels.iter().map(ZoomLevel::percent).collect();
        assert_eq!(percents, vec![100, 150, 200]);
    }

    #[test]
    fn new_requires_default_in_set() {
        assert!(ZoomLevels::new(&[100, 200], 150).is_none());
        assert!(ZoomLevels::new(&[], 100).is_none());
    }

    #[test]
    fn stepping_stops_at_the_ends() {
        let levels = ZoomLevels::default();
        let min = ZoomLevel::from_percent(100).unwrap();
        let max = ZoomLevel::from_percent(250).unwrap();

        assert_eq!(levels.step_in(min).map(ZoomLevel::percent), Some(150));
        assert_eq!(levels.step_out(min), None);
        assert_eq!(levels.step_in(max), None);
        assert_eq!(levels.step_out(max).map(ZoomLevel::percent), Some(200));
    }

    #[test]
    fn display_uses_percent_label() {
        assert_eq!(ZoomLevel::from_percent(150).unwrap().to_string(), "150%");
    }
}
