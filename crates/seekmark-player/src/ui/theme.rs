//! Seek bar colours for seekmark-player
//!
//! Colours are hex strings in theme.yaml next to config.yaml.
//! Default location: ~/.config/seekmark-player/theme.yaml

use iced::Color;
use seekmark_widgets::BarPalette;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::config::{config_dir, load_yaml_or_default};

/// Global theme instance (initialized once at startup)
static THEME: OnceLock<ThemeConfig> = OnceLock::new();

/// Root theme configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Seek bar colours
    pub bar: BarColors,
}

/// Seek bar colour configuration ("#RRGGBB")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarColors {
    pub track: String,
    pub progress: String,
    pub handle: String,
    pub handle_stroke: String,
    pub label: String,
}

impl Default for BarColors {
    fn default() -> Self {
        Self {
            track: "#E0E0E0".to_string(),
            progress: "#FF0000".to_string(),
            handle: "#FF0000".to_string(),
            handle_stroke: "#FFFFFF".to_string(),
            label: "#D9D9D9".to_string(),
        }
    }
}

impl BarColors {
    /// Resolve to a palette; unparseable entries keep the built-in colour
    pub fn to_palette(&self) -> BarPalette {
        let defaults = BarPalette::default();
        BarPalette {
            track: parse_hex_color(&self.track).unwrap_or(defaults.track),
            progress: parse_hex_color(&self.progress).unwrap_or(defaults.progress),
            handle: parse_hex_color(&self.handle).unwrap_or(defaults.handle),
            handle_stroke: parse_hex_color(&self.handle_stroke).unwrap_or(defaults.handle_stroke),
            label: parse_hex_color(&self.label).unwrap_or(defaults.label),
        }
    }
}

/// Parse a hex color string to an iced Color
///
/// Supports formats: "#RRGGBB" or "RRGGBB"
fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.trim().trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
    };
    let color = match (digits.len(), channel(0..2), channel(2..4), channel(4..6)) {
        (6, Some(r), Some(g), Some(b)) => Some(Color::from_rgb8(r, g, b)),
        _ => None,
    };
    if color.is_none() {
        log::warn!("Invalid hex color '{}', using default", hex);
    }
    color
}

/// Get the default theme file path
///
/// Returns: ~/.config/seekmark-player/theme.yaml
pub fn default_theme_path() -> PathBuf {
    config_dir().join("theme.yaml")
}

pub fn load_theme(path: &Path) -> ThemeConfig {
    load_yaml_or_default(path, "load_theme")
}

/// Initialize the global theme from the theme file (call once at startup)
pub fn init_theme() {
    let config = load_theme(&default_theme_path());
    if THEME.set(config).is_err() {
        log::warn!("Theme already initialized");
    }
}

/// Seek bar palette from theme.yaml, or defaults if not initialized
pub fn bar_palette() -> BarPalette {
    THEME
        .get()
        .map(|t| t.bar.to_palette())
        .unwrap_or_default()
}
