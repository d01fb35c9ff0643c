//! Colours and sizes for the seek bar

use iced::Color;

/// Bar height in pixels when not configured
pub const DEFAULT_BAR_HEIGHT: f32 = 20.0;

/// Background track (#E0E0E0)
pub const TRACK_COLOR: Color = Color::from_rgb(0.878, 0.878, 0.878);

/// Played portion and handle fill (#FF0000)
pub const PROGRESS_COLOR: Color = Color::from_rgb(1.0, 0.0, 0.0);

/// Handle outline (#FFFFFF)
pub const HANDLE_STROKE_COLOR: Color = Color::WHITE;

/// Handle outline width in pixels
pub const HANDLE_STROKE_WIDTH: f32 = 1.0;

/// Mark label text (#D9D9D9)
pub const LABEL_COLOR: Color = Color::from_rgb(0.85, 0.85, 0.85);

/// Colour set used to paint one seek bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarPalette {
    pub track: Color,
    pub progress: Color,
    pub handle: Color,
    pub handle_stroke: Color,
    pub label: Color,
}

impl Default for BarPalette {
    fn default() -> Self {
        Self {
            track: TRACK_COLOR,
            progress: PROGRESS_COLOR,
            handle: PROGRESS_COLOR,
            handle_stroke: HANDLE_STROKE_COLOR,
            label: LABEL_COLOR,
        }
    }
}
