//! Responsive tick gap
//!
//! The cleared gap at each mark widens with the element: narrow layouts get
//! hairline ticks and smaller labels.

/// Below this width the narrow bucket applies
pub const NARROW_MAX_WIDTH: f32 = 768.0;

/// At or above this width the wide bucket applies
pub const WIDE_MIN_WIDTH: f32 = 1024.0;

/// Gap in pixels for elements narrower than 768px
pub const GAP_NARROW: u32 = 2;

/// Gap in pixels for elements between 768px and 1023px
pub const GAP_MEDIUM: u32 = 3;

/// Gap in pixels for elements 1024px and wider
pub const GAP_WIDE: u32 = 4;

/// Label font size in the narrow bucket
pub const LABEL_FONT_SMALL: f32 = 8.0;

/// Label font size in every other bucket
pub const LABEL_FONT_REGULAR: f32 = 10.0;

/// Select the tick gap for an element width
pub fn gap_for_width(width: f32) -> u32 {
    if width < NARROW_MAX_WIDTH {
        GAP_NARROW
    } else if width < WIDE_MIN_WIDTH {
        GAP_MEDIUM
    } else {
        GAP_WIDE
    }
}

/// Label font size for a gap value
///
/// Only the narrow bucket shrinks labels.
pub fn label_font_size(gap: u32) -> f32 {
    if gap == GAP_NARROW {
        LABEL_FONT_SMALL
    } else {
        LABEL_FONT_REGULAR
    }
}
