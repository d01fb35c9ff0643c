//! Main iced application for seekmark-player
//!
//! Owns the media element and mirrors its state into the seek bar:
//! - media events refresh the video parameters and restart the redraw loop
//! - display frames repaint the bar while the media plays
//! - window resizes re-derive the element width and tick gap

use iced::widget::{column, text};
use iced::{window, Element, Size, Subscription, Task, Theme};
use seekmark_core::media::{ClockMedia, MediaElement};
use seekmark_core::redraw::RedrawLoop;
use seekmark_core::{Mark, VideoParams};
use seekmark_widgets::{media_events, seek_bar, BarPalette, SeekBarState};

use super::handlers;
use super::message::Message;
use super::video_view::video_surface;

/// Padding around the player column
pub const WINDOW_PADDING: f32 = 16.0;

/// Vertical spacing between video, bar, and status line
const COLUMN_SPACING: f32 = 10.0;

/// Height reserved for the status line
const STATUS_HEIGHT: f32 = 20.0;

/// Application state
pub struct SeekmarkApp {
    /// Media element (None if the clock could not start)
    pub(crate) media: Option<ClockMedia>,
    /// Video name shown on the surface
    pub(crate) source_name: String,
    /// Seek bar state (params, marks, gap, cache)
    pub(crate) seek_bar: SeekBarState,
    /// Animation-frame loop
    pub(crate) redraw: RedrawLoop,
    /// Last known window size
    pub(crate) window_size: Size,
    /// Play once metadata has loaded (consumed on first load)
    pub(crate) autoplay: bool,
    /// Status message
    pub(crate) status: String,
}

impl SeekmarkApp {
    pub fn new(
        media: Option<ClockMedia>,
        marks: Vec<Mark>,
        window_size: Size,
        bar_height: f32,
        palette: BarPalette,
        autoplay: bool,
    ) -> Self {
        let source_name = media
            .as_ref()
            .map(|m| m.source().name.clone())
            .unwrap_or_else(|| "No media".to_string());
        let status = if media.is_some() {
            "Loading metadata...".to_string()
        } else {
            "Media clock unavailable".to_string()
        };

        let mut app = Self {
            media,
            source_name,
            seek_bar: SeekBarState::new(element_width(window_size.width), marks)
                .with_bar_height(bar_height)
                .with_palette(palette),
            redraw: RedrawLoop::new(),
            window_size,
            autoplay,
            status,
        };
        app.repaint();
        app
    }

    /// Whether the media is paused (no media counts as paused)
    pub fn paused(&self) -> bool {
        self.media.as_ref().map_or(true, |m| m.paused())
    }

    /// Read all three parameters from the window and the media element
    ///
    /// Without a media element the mirrored time and duration are kept.
    pub(crate) fn read_params(&self) -> VideoParams {
        let mut params = VideoParams {
            element_width: element_width(self.window_size.width),
            ..self.seek_bar.params
        };
        if let Some(media) = &self.media {
            params.current_time = media.current_time();
            params.duration = media.duration();
        }
        params
    }

    /// Restart the redraw loop against the media's paused flag
    pub(crate) fn repaint(&mut self) {
        let paused = self.paused();
        self.repaint_with(paused);
    }

    /// Restart the redraw loop with an explicit paused flag
    pub(crate) fn repaint_with(&mut self, paused: bool) {
        self.redraw.restart(paused);
        self.seek_bar.invalidate();
    }

    /// Update application state
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Media(event) => handlers::media::handle(self, event),
            Message::Frame => handlers::frame::handle(self),
            Message::WindowResized(size) => handlers::resize::handle(self, size),
            Message::TogglePlayback => handlers::playback::toggle(self),
            Message::Seek(time) => handlers::playback::seek(self, time),
        }
    }

    /// Media events, window resizes, and display frames while looping
    pub fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions =
            vec![window::resize_events().map(|(_id, size)| Message::WindowResized(size))];

        if let Some(media) = &self.media {
            subscriptions.push(media_events(media.events()).map(Message::Media));
        }

        if self.redraw.is_scheduled() {
            subscriptions.push(window::frames().map(|_| Message::Frame));
        }

        Subscription::batch(subscriptions)
    }

    /// Build the view
    pub fn view(&self) -> Element<'_, Message> {
        let video_max_height = self.window_size.height
            - 2.0 * WINDOW_PADDING
            - self.seek_bar.total_height()
            - 2.0 * COLUMN_SPACING
            - STATUS_HEIGHT;

        let video = video_surface(
            &self.source_name,
            &self.seek_bar.params,
            self.paused(),
            video_max_height,
        );
        let bar = seek_bar(&self.seek_bar, Message::Seek);
        let status = text(&self.status).size(12);

        column![video, bar, status]
            .spacing(COLUMN_SPACING)
            .padding(WINDOW_PADDING)
            .into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Width of the video element (and seek bar) for a window width
pub fn element_width(window_width: f32) -> f32 {
    (window_width - 2.0 * WINDOW_PADDING).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use seekmark_core::media::MediaEvent;

    fn app_without_media(width: f32) -> SeekmarkApp {
        let marks = vec![Mark::new(10.0, "1"), Mark::new(20.0, "2")];
        SeekmarkApp::new(
            None,
            marks,
            Size::new(width, 800.0),
            20.0,
            BarPalette::default(),
            false,
        )
    }

    #[test]
    fn test_element_width() {
        assert_eq!(element_width(1200.0), 1168.0);
        assert_eq!(element_width(10.0), 0.0);
    }

    #[test]
    fn test_startup_draws_one_frame() {
        let app = app_without_media(1200.0);
        assert_eq!(app.redraw.frames_drawn(), 1);
        assert!(!app.redraw.is_scheduled());
        assert_eq!(app.seek_bar.gap, 4);
        assert_eq!(app.seek_bar.params.element_width, 1168.0);
    }

    #[test]
    fn test_metadata_and_timeupdate_refresh_params() {
        let mut app = app_without_media(1200.0);
        let _ = app.update(Message::Media(MediaEvent::LoadedMetadata { duration: 60.0 }));
        assert_eq!(app.seek_bar.params.duration, 60.0);

        let _ = app.update(Message::Media(MediaEvent::TimeUpdate { current_time: 15.0 }));
        assert_eq!(app.seek_bar.params.current_time, 15.0);
        assert_eq!(app.seek_bar.params.duration, 60.0);
        assert_eq!(app.redraw.frames_drawn(), 3);
    }

    #[test]
    fn test_play_and_pause_drive_frame_loop() {
        let mut app = app_without_media(1200.0);
        let _ = app.update(Message::Media(MediaEvent::Play));
        assert!(app.redraw.is_scheduled());

        let _ = app.update(Message::Media(MediaEvent::Pause));
        assert!(!app.redraw.is_scheduled());
        let drawn = app.redraw.frames_drawn();
        let _ = app.update(Message::Frame);
        assert_eq!(app.redraw.frames_drawn(), drawn);
    }

    #[test]
    fn test_resize_recomputes_gap() {
        let mut app = app_without_media(1200.0);
        let _ = app.update(Message::WindowResized(Size::new(900.0, 700.0)));
        assert_eq!(app.seek_bar.params.element_width, 868.0);
        assert_eq!(app.seek_bar.gap, 3);

        // 768 + padding lands exactly on the boundary
        let _ = app.update(Message::WindowResized(Size::new(768.0 + 2.0 * WINDOW_PADDING, 700.0)));
        assert_eq!(app.seek_bar.gap, 3);
        let _ = app.update(Message::WindowResized(Size::new(767.0 + 2.0 * WINDOW_PADDING, 700.0)));
        assert_eq!(app.seek_bar.gap, 2);
    }

    #[test]
    fn test_seek_updates_current_time_optimistically() {
        let mut app = app_without_media(1200.0);
        let _ = app.update(Message::Media(MediaEvent::LoadedMetadata { duration: 60.0 }));
        let _ = app.update(Message::Seek(42.0));
        assert_eq!(app.seek_bar.params.current_time, 42.0);
    }

    #[test]
    fn test_seek_ignored_before_metadata() {
        let mut app = app_without_media(1200.0);
        let _ = app.update(Message::Seek(42.0));
        assert_eq!(app.seek_bar.params.current_time, 0.0);
    }
}
