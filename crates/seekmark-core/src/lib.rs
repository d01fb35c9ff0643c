//! Seekmark Core - timeline maths, bar layout and playback clock
//!
//! Everything in this crate is UI-toolkit agnostic. The widgets crate turns
//! [`layout::BarLayout`] into canvas geometry and feeds pointer positions
//! back through [`drag::DragSession`]; the player crate owns a
//! [`media::ClockMedia`] and drives [`redraw::RedrawLoop`] from window frames.

pub mod drag;
pub mod gap;
pub mod layout;
pub mod marks;
pub mod media;
pub mod redraw;
pub mod timeline;
pub mod types;

pub use types::*;
