//! Shared value types for the seek bar

/// Playback parameters mirrored from the media element
///
/// Refreshed as a whole on metadata load and on resize; `current_time`
/// alone is refreshed on every `timeupdate`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VideoParams {
    /// Width of the video element in logical pixels (the bar matches it)
    pub element_width: f32,
    /// Current playback position in seconds
    pub current_time: f64,
    /// Total duration in seconds, `NaN` until metadata has loaded
    pub duration: f64,
}

impl VideoParams {
    pub fn new(element_width: f32) -> Self {
        Self {
            element_width,
            current_time: 0.0,
            duration: f64::NAN,
        }
    }

    /// Whether the duration is usable for mapping (finite and positive)
    pub fn has_duration(&self) -> bool {
        has_duration(self.duration)
    }
}

impl Default for VideoParams {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// A labelled tick mark on the seek bar
#[derive(Debug, Clone, PartialEq)]
pub struct Mark {
    /// Offset from the start of the media in seconds
    pub time: f64,
    /// Text shown above the tick
    pub label: String,
}

impl Mark {
    pub fn new(time: f64, label: impl Into<String>) -> Self {
        Self {
            time,
            label: label.into(),
        }
    }
}

#[inline]
pub(crate) fn has_duration(duration: f64) -> bool {
    duration.is_finite() && duration > 0.0
}
