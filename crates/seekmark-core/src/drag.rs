//! Drag-to-seek session
//!
//! Pointer down on the bar starts a session and seeks at once; every move
//! while the session is active seeks again; pointer up anywhere ends it.
//! Moves are honoured outside the bar too, clamped to the nearest edge.

use crate::timeline::offset_to_time;
use crate::types::has_duration;

/// Pointer drag state for the seek bar
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragSession {
    active: bool,
    /// Last time sought to during this session
    last_time: Option<f64>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a session at `offset` and return the time to seek to
    ///
    /// Returns `None` (and stays idle) when the duration is unknown.
    pub fn begin(&mut self, offset: f32, width: f32, duration: f64) -> Option<f64> {
        if !has_duration(duration) || !(width > 0.0) {
            return None;
        }
        self.active = true;
        self.last_time = None;
        log::debug!("drag: begin at {:.1}px of {:.1}px", offset, width);
        self.update(offset, width, duration)
    }

    /// Pointer moved; returns the time to seek to while a session is active
    pub fn update(&mut self, offset: f32, width: f32, duration: f64) -> Option<f64> {
        if !self.active || !has_duration(duration) {
            return None;
        }
        let time = offset_to_time(offset, width, duration);
        self.last_time = Some(time);
        Some(time)
    }

    /// End the session, returning the final seek time if any
    pub fn end(&mut self) -> Option<f64> {
        if !self.active {
            return None;
        }
        self.active = false;
        self.last_time.take()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}
