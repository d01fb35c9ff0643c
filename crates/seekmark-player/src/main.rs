//! Seekmark Player - video view with a segmented, draggable seek bar
//!
//! This is the main entry point for the GUI application. It:
//! 1. Loads config.yaml and theme.yaml
//! 2. Generates the marks and starts the media clock
//! 3. Launches the iced GUI application
//!
//! ## Command line flags
//!
//! - `--autoplay`: Start playing as soon as metadata has loaded
//! - `--config <path>`: Read configuration from `<path>`

mod config;
mod ui;

use std::cell::RefCell;
use std::path::PathBuf;

use iced::{Size, Task};
use seekmark_core::marks::generate_marks;
use seekmark_core::media::ClockMedia;

use ui::{theme, Message, SeekmarkApp};

fn main() -> iced::Result {
    let args: Vec<String> = std::env::args().collect();
    let autoplay_flag = args.iter().any(|arg| arg == "--autoplay");
    let config_override = args
        .iter()
        .position(|arg| arg == "--config")
        .and_then(|i| args.get(i + 1))
        .map(PathBuf::from);

    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("seekmark-player starting up");

    let config_path = config_override.unwrap_or_else(config::default_config_path);
    let config = config::load_config(&config_path);
    if !config_path.exists() {
        // First run: write the defaults out so they can be edited
        if let Err(e) = config::save_config(&config, &config_path) {
            log::warn!("Could not write default config: {:#}", e);
        }
    }

    theme::init_theme();

    let marks = generate_marks(&config.marks).unwrap_or_else(|e| {
        log::warn!("Could not generate marks: {}, continuing without ticks", e);
        Vec::new()
    });
    log::info!("Generated {} marks", marks.len());

    let media = match ClockMedia::spawn(config.media.to_source()) {
        Ok(media) => Some(media),
        Err(e) => {
            log::error!("Could not start media clock: {}", e);
            log::error!("Running in UI-only mode (no playback)");
            None
        }
    };

    let window_size = Size::new(config.display.window_width, config.display.window_height);
    let bar_height = config.display.bar_height;
    let autoplay = autoplay_flag || config.media.autoplay;

    // Wrap resources in cells so the boot closure can be Fn (required by iced)
    // The boot function is only called once, but iced requires Fn for API consistency
    let media_cell = RefCell::new(media);
    let marks_cell = RefCell::new(Some(marks));

    iced::application(
        move || {
            let media = media_cell.borrow_mut().take();
            let marks = marks_cell.borrow_mut().take().unwrap_or_default();
            let app = SeekmarkApp::new(
                media,
                marks,
                window_size,
                bar_height,
                theme::bar_palette(),
                autoplay,
            );
            (app, Task::none())
        },
        update,
        view,
    )
    .subscription(subscription)
    .theme(theme_for)
    .title("Seekmark Player")
    .window_size(window_size)
    .run()
}

/// Update function for iced
fn update(app: &mut SeekmarkApp, message: Message) -> Task<Message> {
    app.update(message)
}

/// View function for iced
fn view(app: &SeekmarkApp) -> iced::Element<'_, Message> {
    app.view()
}

/// Subscription function for iced
fn subscription(app: &SeekmarkApp) -> iced::Subscription<Message> {
    app.subscription()
}

/// Theme function for iced
fn theme_for(app: &SeekmarkApp) -> iced::Theme {
    app.theme()
}
