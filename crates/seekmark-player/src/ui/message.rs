//! Application messages for seekmark-player

use iced::Size;
use seekmark_core::media::MediaEvent;

/// Messages that can be sent to the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Event from the media element (metadata, timeupdate, play, pause, ended)
    Media(MediaEvent),
    /// Display frame while the redraw loop is running
    Frame,
    /// Window resized (new logical size)
    WindowResized(Size),
    /// Video surface clicked
    TogglePlayback,
    /// Seek to a time in seconds (bar drag or label click)
    Seek(f64),
}
