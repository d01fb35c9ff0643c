//! Video surface
//!
//! Stands in for the rendered picture: source name, time readout and play
//! state on a black panel the size of the video element. Clicking it toggles
//! playback.

use iced::widget::{column, container, mouse_area, text};
use iced::{Center, Color, Element, Length};
use seekmark_core::timeline::format_clock;
use seekmark_core::VideoParams;

use super::message::Message;

/// 16:9 picture
const ASPECT_RATIO: f32 = 9.0 / 16.0;

pub fn video_surface<'a>(
    source_name: &'a str,
    params: &VideoParams,
    paused: bool,
    max_height: f32,
) -> Element<'a, Message> {
    let width = params.element_width.max(0.0);
    let height = (width * ASPECT_RATIO).min(max_height).max(0.0);

    let readout = format!(
        "{} / {}",
        format_clock(params.current_time),
        format_clock(params.duration)
    );
    let state = if paused { "Paused - click to play" } else { "Playing" };

    let overlay = column![
        text(source_name).size(18),
        text(readout).size(14),
        text(state).size(12),
    ]
    .spacing(6)
    .align_x(Center);

    let surface = container(overlay)
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .align_x(Center)
        .align_y(Center)
        .style(|_theme| container::Style {
            background: Some(Color::BLACK.into()),
            text_color: Some(Color::from_rgb(0.8, 0.8, 0.8)),
            ..container::Style::default()
        });

    mouse_area(surface).on_press(Message::TogglePlayback).into()
}
