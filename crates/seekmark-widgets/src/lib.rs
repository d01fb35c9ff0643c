//! Canvas widgets for the seekmark player
//!
//! ## Architecture (iced 0.14 patterns)
//!
//! - **State struct**: `SeekBarState` holds the mirrored video parameters,
//!   the marks, the responsive gap and the geometry cache
//! - **View function**: `seek_bar` takes state + a seek callback and returns
//!   an `Element<Message>`
//! - **Canvas Program**: `SeekBarCanvas` draws the bar and turns pointer
//!   drags and label clicks into seek callbacks
//!
//! Geometry comes from `seekmark_core::layout`; this crate only paints it.

pub mod seek_bar;
pub mod subscription;
pub mod theme;

pub use seek_bar::{seek_bar, SeekBarCanvas, SeekBarState, LABEL_ROW_HEIGHT};
pub use subscription::media_events;
pub use theme::{BarPalette, DEFAULT_BAR_HEIGHT};
