//! Linear mapping between bar pixels and playback time
//!
//! The bar spans the full element width, so an x offset maps to time by
//! plain proportion: `time = offset / width * duration`. Both directions
//! return a neutral value (0) when the duration is not known yet.

use crate::types::has_duration;

/// Convert a horizontal offset on the bar to a playback time in seconds
///
/// The offset is clamped into `[0, width]` first, so the result always
/// lies in `[0, duration]` no matter where the pointer is.
pub fn offset_to_time(offset: f32, width: f32, duration: f64) -> f64 {
    if !(width > 0.0) || !has_duration(duration) {
        return 0.0;
    }
    let offset = if offset.is_nan() { 0.0 } else { offset.clamp(0.0, width) };
    (offset as f64 / width as f64) * duration
}

/// Convert a playback time to a horizontal offset on the bar
///
/// Not clamped: marks past the end of the media land past the bar.
pub fn time_to_offset(time: f64, width: f32, duration: f64) -> f32 {
    if !has_duration(duration) {
        return 0.0;
    }
    ((time / duration) * width as f64) as f32
}

/// Fraction of the media that has played, clamped to `[0, 1]`
pub fn progress_ratio(current_time: f64, duration: f64) -> f64 {
    if !has_duration(duration) || current_time.is_nan() {
        return 0.0;
    }
    (current_time / duration).clamp(0.0, 1.0)
}

/// Format seconds as `m:ss`, or `h:mm:ss` past the hour
///
/// Unknown or negative values render as `--:--`.
pub fn format_clock(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "--:--".to_string();
    }
    let total = seconds.floor() as u64;
    let (hours, minutes, secs) = (total / 3600, (total / 60) % 60, total % 60);
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}
