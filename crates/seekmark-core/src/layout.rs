//! Per-frame geometry of the segmented seek bar
//!
//! One frame is drawn in this order: clear, background track, progress
//! fill, a cleared gap at every mark, then the seek handle on top. A canvas
//! frame cannot punch transparent holes into what it already filled, so
//! instead of clearing the gaps afterwards the layout reports the visible
//! spans of the track (everything in `[0, width]` not covered by a gap) and
//! the renderer fills only those.

use crate::gap::label_font_size;
use crate::timeline::{progress_ratio, time_to_offset};
use crate::types::{Mark, VideoParams};

/// Horizontal nudge of a label to the right of its tick
pub const LABEL_X_OFFSET: f32 = 2.0;

/// Approximate glyph advance as a fraction of the font size
const LABEL_CHAR_WIDTH: f32 = 0.6;

/// Horizontal interval `[start, end)` in bar pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub start: f32,
    pub end: f32,
}

impl Span {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    pub fn width(&self) -> f32 {
        (self.end - self.start).max(0.0)
    }
}

/// The draggable circle at the progress edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    pub center_x: f32,
    pub center_y: f32,
    pub radius: f32,
}

/// Everything one frame of the bar draws
#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    pub width: f32,
    pub height: f32,
    /// Top of the track (a quarter of the height)
    pub track_y: f32,
    /// Track thickness (half the height)
    pub track_height: f32,
    /// Right edge of the progress fill
    pub progress_x: f32,
    /// Cleared tick rectangles, clipped to the bar and sorted by start
    pub gaps: Vec<Span>,
    /// Visible pieces of the background track
    pub track_spans: Vec<Span>,
    /// Visible pieces of the progress fill
    pub progress_spans: Vec<Span>,
    pub handle: Handle,
}

impl BarLayout {
    /// Lay out a frame for the given parameters
    ///
    /// Without a known duration there is no progress and no ticks; the
    /// track and the handle (parked at 0) are still drawn.
    pub fn compute(params: &VideoParams, marks: &[Mark], gap: u32, height: f32) -> Self {
        let width = params.element_width.max(0.0);
        let height = height.max(0.0);
        let progress_x = (progress_ratio(params.current_time, params.duration) * width as f64) as f32;

        let gaps = if params.has_duration() {
            tick_gaps(marks, width, params.duration, gap as f32)
        } else {
            Vec::new()
        };

        let track_spans = visible_spans(width, &gaps);
        let progress_spans = track_spans
            .iter()
            .filter_map(|span| {
                let end = span.end.min(progress_x);
                (end > span.start).then(|| Span::new(span.start, end))
            })
            .collect();

        Self {
            width,
            height,
            track_y: height / 4.0,
            track_height: height / 2.0,
            progress_x,
            gaps,
            track_spans,
            progress_spans,
            handle: Handle {
                center_x: progress_x,
                center_y: height / 2.0,
                radius: ((height - 2.0) / 2.0).max(0.0),
            },
        }
    }
}

/// Gap rectangles for marks that intersect the bar
fn tick_gaps(marks: &[Mark], width: f32, duration: f64, gap: f32) -> Vec<Span> {
    let mut gaps: Vec<Span> = marks
        .iter()
        .map(|mark| {
            let x = time_to_offset(mark.time, width, duration);
            Span::new(x, x + gap)
        })
        .filter(|span| span.end > 0.0 && span.start < width)
        .map(|span| Span::new(span.start.max(0.0), span.end.min(width)))
        .collect();
    gaps.sort_by(|a, b| a.start.total_cmp(&b.start));
    gaps
}

/// Complement of `gaps` inside `[0, width]`
///
/// `gaps` must be sorted by start; overlapping gaps merge.
pub fn visible_spans(width: f32, gaps: &[Span]) -> Vec<Span> {
    let mut spans = Vec::with_capacity(gaps.len() + 1);
    let mut cursor = 0.0f32;
    for gap in gaps {
        if gap.start > cursor {
            spans.push(Span::new(cursor, gap.start.min(width)));
        }
        cursor = cursor.max(gap.end);
        if cursor >= width {
            break;
        }
    }
    if cursor < width {
        spans.push(Span::new(cursor, width));
    }
    spans.retain(|span| span.width() > 0.0);
    spans
}

// =============================================================================
// Label overlays
// =============================================================================

/// A label drawn above its tick
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPlacement {
    /// Left edge of the text: `(time / duration) * width + 2`
    pub x: f32,
    /// Mark time the label seeks to when clicked
    pub time: f64,
    pub label: String,
}

/// All label placements for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct LabelLayout {
    pub font_size: f32,
    pub placements: Vec<LabelPlacement>,
}

impl LabelLayout {
    pub fn compute(params: &VideoParams, marks: &[Mark], gap: u32) -> Self {
        let placements = if params.has_duration() {
            marks
                .iter()
                .map(|mark| LabelPlacement {
                    x: label_x(mark.time, params.element_width, params.duration),
                    time: mark.time,
                    label: mark.label.clone(),
                })
                .collect()
        } else {
            Vec::new()
        };
        Self {
            font_size: label_font_size(gap),
            placements,
        }
    }

    /// Estimated rendered width of a label
    pub fn label_width(&self, label: &str) -> f32 {
        label.chars().count() as f32 * self.font_size * LABEL_CHAR_WIDTH
    }

    /// Label under a horizontal position, topmost (last drawn) first
    pub fn hit_test(&self, x: f32) -> Option<&LabelPlacement> {
        self.placements
            .iter()
            .rev()
            .find(|p| x >= p.x && x <= p.x + self.label_width(&p.label))
    }
}

/// Left edge of a mark's label
pub fn label_x(time: f64, width: f32, duration: f64) -> f32 {
    time_to_offset(time, width, duration) + LABEL_X_OFFSET
}
