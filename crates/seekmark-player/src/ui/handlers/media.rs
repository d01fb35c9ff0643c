//! Media event handler
//!
//! Mirrors media element events into the seek bar parameters. Every event
//! restarts the redraw loop, so the bar repaints once immediately and keeps
//! repainting while the media plays.

use iced::Task;
use seekmark_core::media::{MediaElement, MediaEvent};
use seekmark_core::timeline::format_clock;

use crate::ui::app::SeekmarkApp;
use crate::ui::message::Message;

pub fn handle(app: &mut SeekmarkApp, event: MediaEvent) -> Task<Message> {
    match event {
        MediaEvent::LoadedMetadata { duration } => {
            let mut params = app.read_params();
            params.duration = duration;
            app.seek_bar.set_params(params);
            app.seek_bar.update_gap();
            app.status = format!("Loaded {} ({})", app.source_name, format_clock(duration));
            log::info!("Media: metadata loaded, duration {:.2}s", duration);

            if std::mem::take(&mut app.autoplay) {
                if let Some(media) = app.media.as_mut() {
                    if let Err(e) = media.play() {
                        log::warn!("Media: autoplay failed: {}", e);
                    }
                }
            }
            app.repaint();
        }
        MediaEvent::TimeUpdate { current_time } => {
            app.seek_bar.set_current_time(current_time);
            app.repaint();
        }
        MediaEvent::Play => {
            log::debug!("Media: play");
            app.status = "Playing".to_string();
            app.repaint_with(false);
        }
        MediaEvent::Pause => {
            log::debug!("Media: pause");
            app.status = "Paused".to_string();
            app.repaint_with(true);
        }
        MediaEvent::Ended => {
            log::info!("Media: ended");
            app.status = "Ended".to_string();
            app.repaint_with(true);
        }
    }
    Task::none()
}
