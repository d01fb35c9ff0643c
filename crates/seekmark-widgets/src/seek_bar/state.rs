//! Seek bar state
//!
//! Pure data plus the geometry cache. The cache only repaints after
//! [`SeekBarState::invalidate`], which the owner calls whenever its redraw
//! loop draws a frame.

use iced::widget::canvas;
use seekmark_core::gap::gap_for_width;
use seekmark_core::layout::{BarLayout, LabelLayout};
use seekmark_core::{Mark, VideoParams};

use crate::theme::{BarPalette, DEFAULT_BAR_HEIGHT};

/// Height of the label row above the bar
pub const LABEL_ROW_HEIGHT: f32 = 14.0;

pub struct SeekBarState {
    /// Mirrored playback parameters
    pub params: VideoParams,
    /// Tick marks in feed order
    pub marks: Vec<Mark>,
    /// Cleared tick width for the current element width
    pub gap: u32,
    /// Bar height in pixels
    pub bar_height: f32,
    pub palette: BarPalette,
    cache: canvas::Cache,
}

impl SeekBarState {
    pub fn new(element_width: f32, marks: Vec<Mark>) -> Self {
        Self {
            params: VideoParams::new(element_width),
            marks,
            gap: gap_for_width(element_width),
            bar_height: DEFAULT_BAR_HEIGHT,
            palette: BarPalette::default(),
            cache: canvas::Cache::new(),
        }
    }

    pub fn with_bar_height(mut self, bar_height: f32) -> Self {
        self.bar_height = bar_height.max(2.0);
        self
    }

    pub fn with_palette(mut self, palette: BarPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Replace all three parameters (metadata load, resize)
    pub fn set_params(&mut self, params: VideoParams) {
        self.params = params;
    }

    /// Update the current time only (`timeupdate`, drag)
    pub fn set_current_time(&mut self, current_time: f64) {
        self.params.current_time = current_time;
    }

    /// Recompute the responsive gap from the element width
    ///
    /// Returns whether the bucket changed.
    pub fn update_gap(&mut self) -> bool {
        let gap = gap_for_width(self.params.element_width);
        let changed = gap != self.gap;
        self.gap = gap;
        changed
    }

    /// Drop cached geometry so the next draw repaints
    pub fn invalidate(&self) {
        self.cache.clear();
    }

    pub fn bar_layout(&self) -> BarLayout {
        BarLayout::compute(&self.params, &self.marks, self.gap, self.bar_height)
    }

    pub fn label_layout(&self) -> LabelLayout {
        LabelLayout::compute(&self.params, &self.marks, self.gap)
    }

    /// Canvas height: label row plus bar
    pub fn total_height(&self) -> f32 {
        LABEL_ROW_HEIGHT + self.bar_height
    }

    pub(super) fn cache(&self) -> &canvas::Cache {
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_uses_width_bucket() {
        assert_eq!(SeekBarState::new(600.0, Vec::new()).gap, 2);
        assert_eq!(SeekBarState::new(900.0, Vec::new()).gap, 3);
        assert_eq!(SeekBarState::new(1200.0, Vec::new()).gap, 4);
    }

    #[test]
    fn test_update_gap_reports_bucket_change() {
        let mut state = SeekBarState::new(1200.0, Vec::new());
        state.params.element_width = 1100.0;
        assert!(!state.update_gap());
        state.params.element_width = 1023.0;
        assert!(state.update_gap());
        assert_eq!(state.gap, 3);
    }

    #[test]
    fn test_layouts_follow_params() {
        let marks = vec![Mark::new(50.0, "1")];
        let mut state = SeekBarState::new(1000.0, marks).with_bar_height(20.0);
        state.set_params(VideoParams {
            element_width: 1000.0,
            current_time: 25.0,
            duration: 100.0,
        });
        assert_eq!(state.bar_layout().progress_x, 250.0);
        assert_eq!(state.label_layout().placements[0].x, 502.0);

        state.set_current_time(75.0);
        assert_eq!(state.bar_layout().progress_x, 750.0);
        assert_eq!(state.total_height(), 34.0);
    }
}
