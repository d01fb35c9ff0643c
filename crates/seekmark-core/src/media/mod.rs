//! Media playback primitive
//!
//! The seek bar only needs the observable surface of a media element: the
//! current time, the duration, the paused flag, play/pause/seek, and the
//! `loadedmetadata` / `timeupdate` / `play` / `pause` / `ended` events.
//! [`MediaElement`] captures that surface; [`ClockMedia`] implements it with
//! a wall-clock driven [`MediaClock`] on a background thread.

mod clock;
mod clock_media;
mod error;

pub use clock::{MediaClock, DEFAULT_TIMEUPDATE_INTERVAL};
pub use clock_media::{ClockMedia, MediaSource};
pub use error::MediaError;

/// Commands sent from the UI to the playback clock
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaCommand {
    /// Start or resume playback
    Play,
    /// Pause playback
    Pause,
    /// Jump to a time in seconds
    Seek(f64),
}

/// Events emitted by a media element
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaEvent {
    /// Duration is known (fired once)
    LoadedMetadata { duration: f64 },
    /// Playback position changed (periodically while playing, and after seeks)
    TimeUpdate { current_time: f64 },
    /// Playback started
    Play,
    /// Playback paused
    Pause,
    /// Playback reached the end
    Ended,
}

/// The media element surface the player talks to
pub trait MediaElement {
    /// Current playback position in seconds
    fn current_time(&self) -> f64;

    /// Duration in seconds, `NaN` until metadata has loaded
    fn duration(&self) -> f64;

    /// Whether playback is paused
    fn paused(&self) -> bool;

    /// Start or resume playback
    fn play(&mut self) -> Result<(), MediaError>;

    /// Pause playback
    fn pause(&mut self) -> Result<(), MediaError>;

    /// Jump to `time` seconds
    fn seek(&mut self, time: f64) -> Result<(), MediaError>;

    /// Toggle between playing and paused
    fn toggle(&mut self) -> Result<(), MediaError> {
        if self.paused() {
            self.play()
        } else {
            self.pause()
        }
    }
}
