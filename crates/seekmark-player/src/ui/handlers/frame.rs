//! Display frame handler
//!
//! Frames only arrive while the redraw loop is scheduled. Each one repaints
//! the bar from the mirrored parameters and checks whether the media is
//! still playing; a paused media gets this last frame and no more.

use iced::Task;

use crate::ui::app::SeekmarkApp;
use crate::ui::message::Message;

pub fn handle(app: &mut SeekmarkApp) -> Task<Message> {
    let paused = app.paused();
    if app.redraw.on_frame(paused) {
        app.seek_bar.invalidate();
        if paused {
            log::debug!("Frame loop stopped after {} frames", app.redraw.frames_drawn());
        }
    }
    Task::none()
}
