//! Segmented seek bar
//!
//! A horizontal track with a red progress fill, a cleared gap at every mark,
//! a row of mark labels above it, and a draggable handle at the progress
//! edge.
//!
//! ```ignore
//! let bar = seek_bar(&self.seek_bar, Message::Seek);
//! ```

mod canvas;
mod state;
mod view;

pub use canvas::SeekBarCanvas;
pub use state::{SeekBarState, LABEL_ROW_HEIGHT};
pub use view::seek_bar;
