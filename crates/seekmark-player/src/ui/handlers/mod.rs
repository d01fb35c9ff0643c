//! Message handlers for seekmark-player
//!
//! Each handler takes `&mut SeekmarkApp` and returns the follow-up task.

pub mod frame;
pub mod media;
pub mod playback;
pub mod resize;
