//! Play/pause toggle and seeking

use iced::Task;
use seekmark_core::media::MediaElement;

use crate::ui::app::SeekmarkApp;
use crate::ui::message::Message;

/// Video surface clicked: play if paused, pause if playing
///
/// The redraw loop restarts when the resulting play/pause event arrives.
pub fn toggle(app: &mut SeekmarkApp) -> Task<Message> {
    let Some(media) = app.media.as_mut() else {
        return Task::none();
    };
    if let Err(e) = media.toggle() {
        log::warn!("Playback: toggle failed: {}", e);
        app.status = format!("Playback error: {}", e);
    }
    Task::none()
}

/// Seek to `time` seconds
///
/// The bar moves immediately; the media's own `timeupdate` confirms it.
pub fn seek(app: &mut SeekmarkApp, time: f64) -> Task<Message> {
    if !app.seek_bar.params.has_duration() {
        log::debug!("Playback: seek to {:.2}s ignored, no duration yet", time);
        return Task::none();
    }

    if let Some(media) = app.media.as_mut() {
        if let Err(e) = media.seek(time) {
            log::warn!("Playback: seek to {:.2}s failed: {}", time, e);
            app.status = format!("Seek error: {}", e);
            return Task::none();
        }
    }

    app.seek_bar.set_current_time(time);
    app.repaint();
    Task::none()
}
