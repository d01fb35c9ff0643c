//! Animation-frame redraw loop
//!
//! The bar repaints on every display frame while the media plays and stops
//! asking for frames once it pauses. Any parameter change restarts the loop:
//! the pending frame is cancelled, one frame is drawn straight away, and the
//! next one is requested only if the media is still playing.
//!
//! The loop itself does not draw; callers repaint whenever
//! [`RedrawLoop::restart`] runs or [`RedrawLoop::on_frame`] returns `true`,
//! and subscribe to display frames only while [`RedrawLoop::is_scheduled`].

/// Frame scheduling state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RedrawLoop {
    scheduled: bool,
    frames_drawn: u64,
}

impl RedrawLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the pending frame, draw now, and keep looping unless paused
    pub fn restart(&mut self, paused: bool) {
        self.cancel();
        self.draw(paused);
    }

    /// A display frame arrived
    ///
    /// Returns whether a frame was drawn. Frames that arrive after the loop
    /// stopped (a stale subscription tick) are ignored.
    pub fn on_frame(&mut self, paused: bool) -> bool {
        if !self.scheduled {
            return false;
        }
        self.draw(paused);
        true
    }

    /// Drop the pending frame request
    pub fn cancel(&mut self) {
        self.scheduled = false;
    }

    /// Whether the next display frame should be delivered
    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    /// Total frames drawn since creation
    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    fn draw(&mut self, paused: bool) {
        self.frames_drawn += 1;
        self.scheduled = !paused;
    }
}
