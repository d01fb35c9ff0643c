//! UI module for seekmark-player
//!
//! Built with iced. The media clock reports through a subscription; the seek
//! bar reports seeks through its callback; display frames are subscribed to
//! only while the redraw loop wants them.

pub mod app;
mod handlers;
pub mod message;
pub mod theme;
mod video_view;

pub use app::SeekmarkApp;
pub use message::Message;
