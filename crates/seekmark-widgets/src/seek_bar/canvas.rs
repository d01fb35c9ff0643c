//! Canvas Program for the seek bar
//!
//! Draws from the layouts computed in `seekmark_core::layout` and turns
//! pointer input into seek callbacks:
//! - press on the bar starts a drag and seeks under the pointer
//! - moves while dragging keep seeking, even outside the canvas
//! - release anywhere ends the drag
//! - press on a label seeks to its mark

use iced::alignment::{Horizontal, Vertical};
use iced::widget::canvas::{self, Event, Frame, Geometry, Path, Program, Stroke, Text};
use iced::{mouse, Point, Rectangle, Size, Theme, Vector};
use seekmark_core::drag::DragSession;
use seekmark_core::layout::{BarLayout, LabelLayout};

use super::state::{SeekBarState, LABEL_ROW_HEIGHT};
use crate::theme::{BarPalette, HANDLE_STROKE_WIDTH};

/// Canvas program for the seek bar
///
/// `on_seek` is called with a playback time in seconds.
pub struct SeekBarCanvas<'a, Message, F>
where
    F: Fn(f64) -> Message,
{
    pub state: &'a SeekBarState,
    pub on_seek: F,
}

impl<'a, Message, F> Program<Message> for SeekBarCanvas<'a, Message, F>
where
    Message: Clone,
    F: Fn(f64) -> Message,
{
    type State = DragSession;

    fn update(
        &self,
        drag: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        let duration = self.state.params.duration;

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                if position.y < LABEL_ROW_HEIGHT {
                    let labels = self.state.label_layout();
                    let hit = labels.hit_test(position.x)?;
                    log::debug!("seek bar: label '{}' -> {:.2}s", hit.label, hit.time);
                    return Some(canvas::Action::publish((self.on_seek)(hit.time)));
                }
                let time = drag.begin(position.x, bounds.width, duration)?;
                Some(canvas::Action::publish((self.on_seek)(time)))
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) if drag.is_active() => {
                // Window coordinates: the drag follows the pointer past the bar
                let time = drag.update(position.x - bounds.x, bounds.width, duration)?;
                Some(canvas::Action::publish((self.on_seek)(time)))
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if let Some(time) = drag.end() {
                    log::debug!("seek bar: drag released at {:.2}s", time);
                }
                None
            }
            _ => None,
        }
    }

    fn mouse_interaction(
        &self,
        drag: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if drag.is_active() {
            return mouse::Interaction::Grabbing;
        }
        match cursor.position_in(bounds) {
            Some(position) if position.y < LABEL_ROW_HEIGHT => {
                if self.state.label_layout().hit_test(position.x).is_some() {
                    mouse::Interaction::Pointer
                } else {
                    mouse::Interaction::default()
                }
            }
            Some(_) => mouse::Interaction::Pointer,
            None => mouse::Interaction::default(),
        }
    }

    fn draw(
        &self,
        _drag: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self.state.cache().draw(renderer, bounds.size(), |frame| {
            let palette = &self.state.palette;
            draw_labels(frame, &self.state.label_layout(), palette);
            frame.with_save(|frame| {
                frame.translate(Vector::new(0.0, LABEL_ROW_HEIGHT));
                draw_bar(frame, &self.state.bar_layout(), palette);
            });
        });
        vec![geometry]
    }
}

/// Paint track, progress, and handle
///
/// Gaps are never painted: only the visible spans of the track are.
fn draw_bar(frame: &mut Frame, layout: &BarLayout, palette: &BarPalette) {
    for span in &layout.track_spans {
        frame.fill_rectangle(
            Point::new(span.start, layout.track_y),
            Size::new(span.width(), layout.track_height),
            palette.track,
        );
    }

    for span in &layout.progress_spans {
        frame.fill_rectangle(
            Point::new(span.start, layout.track_y),
            Size::new(span.width(), layout.track_height),
            palette.progress,
        );
    }

    let handle = Path::circle(
        Point::new(layout.handle.center_x, layout.handle.center_y),
        layout.handle.radius,
    );
    frame.fill(&handle, palette.handle);
    frame.stroke(
        &handle,
        Stroke::default()
            .with_color(palette.handle_stroke)
            .with_width(HANDLE_STROKE_WIDTH),
    );
}

/// Paint the label row, bottom-aligned just above the bar
fn draw_labels(frame: &mut Frame, labels: &LabelLayout, palette: &BarPalette) {
    for placement in &labels.placements {
        frame.fill_text(Text {
            content: placement.label.clone(),
            position: Point::new(placement.x, LABEL_ROW_HEIGHT - 1.0),
            size: labels.font_size.into(),
            color: palette.label,
            align_x: Horizontal::Left.into(),
            align_y: Vertical::Bottom.into(),
            ..Text::default()
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seekmark_core::{Mark, VideoParams};

    /// 1000px bar at window x=16, 200s of media, one mark at 50s
    fn state() -> SeekBarState {
        let mut state = SeekBarState::new(1000.0, vec![Mark::new(50.0, "7")]);
        state.set_params(VideoParams {
            element_width: 1000.0,
            current_time: 0.0,
            duration: 200.0,
        });
        state
    }

    fn bounds() -> Rectangle {
        Rectangle::new(Point::new(16.0, 0.0), Size::new(1000.0, 34.0))
    }

    fn cursor(x: f32, y: f32) -> mouse::Cursor {
        mouse::Cursor::Available(Point::new(x, y))
    }

    fn press() -> Event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
    }

    fn release() -> Event {
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
    }

    fn moved(x: f32, y: f32) -> Event {
        Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(x, y),
        })
    }

    fn seek_of(action: Option<canvas::Action<f64>>) -> Option<f64> {
        action.and_then(|action| action.into_inner().0)
    }

    #[test]
    fn test_press_on_bar_seeks_in_canvas_coordinates() {
        let state = state();
        let program = SeekBarCanvas { state: &state, on_seek: |t: f64| t };
        let mut drag = DragSession::new();

        let action = program.update(&mut drag, &press(), bounds(), cursor(266.0, 24.0));
        assert_eq!(seek_of(action), Some(50.0));
        assert!(drag.is_active());
    }

    #[test]
    fn test_drag_clamps_outside_canvas() {
        let state = state();
        let program = SeekBarCanvas { state: &state, on_seek: |t: f64| t };
        let mut drag = DragSession::new();
        program.update(&mut drag, &press(), bounds(), cursor(266.0, 24.0));

        for (x, expected) in [(-500.0, 0.0), (516.0, 100.0), (5000.0, 200.0)] {
            let action = program.update(&mut drag, &moved(x, 300.0), bounds(), cursor(x, 300.0));
            assert_eq!(seek_of(action), Some(expected));
        }
    }

    #[test]
    fn test_release_ends_drag() {
        let state = state();
        let program = SeekBarCanvas { state: &state, on_seek: |t: f64| t };
        let mut drag = DragSession::new();
        program.update(&mut drag, &press(), bounds(), cursor(266.0, 24.0));

        let action = program.update(&mut drag, &release(), bounds(), mouse::Cursor::Unavailable);
        assert_eq!(seek_of(action), None);
        assert!(!drag.is_active());

        let action = program.update(&mut drag, &moved(516.0, 24.0), bounds(), cursor(516.0, 24.0));
        assert_eq!(seek_of(action), None);
    }

    #[test]
    fn test_moves_without_drag_are_ignored() {
        let state = state();
        let program = SeekBarCanvas { state: &state, on_seek: |t: f64| t };
        let mut drag = DragSession::new();

        let action = program.update(&mut drag, &moved(516.0, 24.0), bounds(), cursor(516.0, 24.0));
        assert_eq!(seek_of(action), None);
    }

    #[test]
    fn test_press_on_label_seeks_to_mark() {
        let state = state();
        let program = SeekBarCanvas { state: &state, on_seek: |t: f64| t };
        let mut drag = DragSession::new();

        // Label "7" starts at 50 / 200 * 1000 + 2 = 252px into the canvas
        let action = program.update(&mut drag, &press(), bounds(), cursor(16.0 + 254.0, 6.0));
        assert_eq!(seek_of(action), Some(50.0));
        assert!(!drag.is_active());

        // Empty spot in the label row
        let action = program.update(&mut drag, &press(), bounds(), cursor(16.0 + 700.0, 6.0));
        assert_eq!(seek_of(action), None);
        assert!(!drag.is_active());
    }

    #[test]
    fn test_press_outside_canvas_is_ignored() {
        let state = state();
        let program = SeekBarCanvas { state: &state, on_seek: |t: f64| t };
        let mut drag = DragSession::new();

        let action = program.update(&mut drag, &press(), bounds(), cursor(8.0, 24.0));
        assert_eq!(seek_of(action), None);
        assert!(!drag.is_active());
    }
}
