//! Deterministic playback clock
//!
//! Pure state machine behind [`super::ClockMedia`]: commands and elapsed
//! time go in, media events come out. Event order follows what a browser
//! media element fires (`timeupdate`, `pause`, `ended` when playback runs
//! off the end).

use std::time::Duration;

use super::{MediaCommand, MediaEvent};
use crate::types::has_duration;

/// Interval between `timeupdate` events while playing
pub const DEFAULT_TIMEUPDATE_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug, Clone)]
pub struct MediaClock {
    /// Position in seconds
    position: f64,
    /// Duration in seconds, reported once loaded
    duration: f64,
    playing: bool,
    loaded: bool,
    timeupdate_interval: Duration,
    since_timeupdate: Duration,
}

impl MediaClock {
    pub fn new(duration: f64, timeupdate_interval: Duration) -> Self {
        Self {
            position: 0.0,
            duration,
            playing: false,
            loaded: false,
            timeupdate_interval,
            since_timeupdate: Duration::ZERO,
        }
    }

    /// Make the duration visible and announce it
    pub fn load(&mut self, events: &mut Vec<MediaEvent>) {
        if self.loaded {
            return;
        }
        self.loaded = true;
        events.push(MediaEvent::LoadedMetadata {
            duration: self.duration(),
        });
    }

    pub fn apply(&mut self, command: MediaCommand, events: &mut Vec<MediaEvent>) {
        match command {
            MediaCommand::Play => {
                if self.playing {
                    return;
                }
                if self.at_end() {
                    self.position = 0.0;
                    events.push(MediaEvent::TimeUpdate { current_time: 0.0 });
                }
                self.playing = true;
                self.since_timeupdate = Duration::ZERO;
                events.push(MediaEvent::Play);
            }
            MediaCommand::Pause => {
                if !self.playing {
                    return;
                }
                self.playing = false;
                events.push(MediaEvent::Pause);
            }
            MediaCommand::Seek(time) => {
                if time.is_nan() {
                    return;
                }
                let upper = if self.loaded && has_duration(self.duration) {
                    self.duration
                } else {
                    f64::INFINITY
                };
                self.position = time.clamp(0.0, upper);
                self.since_timeupdate = Duration::ZERO;
                events.push(MediaEvent::TimeUpdate {
                    current_time: self.position,
                });
            }
        }
    }

    /// Advance playback by `elapsed` wall-clock time
    pub fn advance(&mut self, elapsed: Duration, events: &mut Vec<MediaEvent>) {
        if !self.playing || !self.loaded {
            return;
        }

        self.position += elapsed.as_secs_f64();
        if has_duration(self.duration) && self.position >= self.duration {
            self.position = self.duration;
            self.playing = false;
            events.push(MediaEvent::TimeUpdate {
                current_time: self.position,
            });
            events.push(MediaEvent::Pause);
            events.push(MediaEvent::Ended);
            return;
        }

        self.since_timeupdate += elapsed;
        if self.since_timeupdate >= self.timeupdate_interval {
            self.since_timeupdate = Duration::ZERO;
            events.push(MediaEvent::TimeUpdate {
                current_time: self.position,
            });
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    /// Duration, `NaN` until [`MediaClock::load`] ran
    pub fn duration(&self) -> f64 {
        if self.loaded {
            self.duration
        } else {
            f64::NAN
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    fn at_end(&self) -> bool {
        has_duration(self.duration) && self.position >= self.duration
    }
}
