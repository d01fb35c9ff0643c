//! Seek bar view function

use super::canvas::SeekBarCanvas;
use super::state::SeekBarState;
use iced::widget::Canvas;
use iced::{Element, Length};

/// Create a seek bar element sized to the video element
///
/// # Arguments
///
/// * `state` - Seek bar state (parameters, marks, gap, cache)
/// * `on_seek` - Callback called with a playback time in seconds on
///   press, drag, or label click
///
/// # Example
///
/// ```ignore
/// let bar = seek_bar(&self.seek_bar, Message::Seek);
/// ```
pub fn seek_bar<'a, Message>(
    state: &'a SeekBarState,
    on_seek: impl Fn(f64) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    Canvas::new(SeekBarCanvas { state, on_seek })
        .width(Length::Fixed(state.params.element_width.max(0.0)))
        .height(Length::Fixed(state.total_height()))
        .into()
}
