//! Window resize handler
//!
//! Re-reads all three parameters (the element width follows the window)
//! and re-derives the tick gap bucket.

use iced::{Size, Task};

use crate::ui::app::SeekmarkApp;
use crate::ui::message::Message;

pub fn handle(app: &mut SeekmarkApp, size: Size) -> Task<Message> {
    app.window_size = size;
    let params = app.read_params();
    app.seek_bar.set_params(params);
    if app.seek_bar.update_gap() {
        log::debug!(
            "Resize: element width {:.0}px, tick gap now {}px",
            params.element_width,
            app.seek_bar.gap
        );
    }
    app.repaint();
    Task::none()
}
