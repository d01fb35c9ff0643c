//! Player configuration for seekmark-player
//!
//! Configuration is stored as YAML in the user's config directory.
//! Default location: ~/.config/seekmark-player/config.yaml

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use seekmark_core::marks::MarkSchedule;
use seekmark_core::media::MediaSource;

/// Directory name under the user's config directory
pub const CONFIG_DIR_NAME: &str = "seekmark-player";

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// What plays and how often it reports progress
    pub media: MediaConfig,
    /// Window and bar sizing
    pub display: DisplayConfig,
    /// Synthetic mark feed
    pub marks: MarkSchedule,
}

/// Media section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    /// Video file name shown on the video surface
    pub source: String,
    /// Length of the media in seconds
    pub duration_secs: f64,
    /// `timeupdate` cadence while playing, in milliseconds
    pub timeupdate_interval_ms: u64,
    /// Start playing as soon as metadata has loaded
    pub autoplay: bool,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            source: "test1.mp4".to_string(),
            duration_secs: 240.0,
            timeupdate_interval_ms: 250, // Typical browser cadence
            autoplay: false,
        }
    }
}

impl MediaConfig {
    pub fn to_source(&self) -> MediaSource {
        MediaSource {
            name: self.source.clone(),
            duration: self.duration_secs,
            timeupdate_interval: Duration::from_millis(self.timeupdate_interval_ms.max(1)),
        }
    }
}

/// Display section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Seek bar height in pixels
    pub bar_height: f32,
    /// Initial window width
    pub window_width: f32,
    /// Initial window height
    pub window_height: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            bar_height: 20.0,
            window_width: 1200.0,
            window_height: 800.0,
        }
    }
}

/// Get the default config file path
///
/// Returns: ~/.config/seekmark-player/config.yaml
pub fn default_config_path() -> PathBuf {
    config_dir().join("config.yaml")
}

/// Directory holding config.yaml and theme.yaml
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join(CONFIG_DIR_NAME)
}

/// Load configuration from a YAML file
///
/// If the file doesn't exist, returns default config.
/// If the file exists but is invalid, logs a warning and returns default config.
pub fn load_config(path: &Path) -> PlayerConfig {
    let config: PlayerConfig = load_yaml_or_default(path, "load_config");
    log::info!(
        "load_config: '{}' ({:.1}s), {} marks, bar height {}px",
        config.media.source,
        config.media.duration_secs,
        config.marks.count,
        config.display.bar_height
    );
    config
}

/// Save configuration to a YAML file
///
/// Creates parent directories if they don't exist.
pub fn save_config(config: &PlayerConfig, path: &Path) -> Result<()> {
    log::info!("save_config: Saving to {:?}", path);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    let yaml = serde_yaml::to_string(config).context("Failed to serialize config to YAML")?;
    std::fs::write(path, yaml)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    log::info!("save_config: Config saved successfully");
    Ok(())
}

/// Read a YAML file into `T`, falling back to `T::default()`
///
/// A missing file is normal (first run); unreadable or malformed files
/// are logged as warnings.
pub fn load_yaml_or_default<T>(path: &Path, caller: &str) -> T
where
    T: DeserializeOwned + Default,
{
    log::info!("{}: Loading from {:?}", caller, path);

    if !path.exists() {
        log::info!("{}: {:?} doesn't exist, using defaults", caller, path);
        return T::default();
    }

    let parsed = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {:?}", path))
        .and_then(|contents| {
            serde_yaml::from_str::<T>(&contents).with_context(|| format!("Failed to parse {:?}", path))
        });

    match parsed {
        Ok(value) => value,
        Err(e) => {
            log::warn!("{}: {:#}, using defaults", caller, e);
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlayerConfig::default();
        assert_eq!(config.media.source, "test1.mp4");
        assert_eq!(config.media.timeupdate_interval_ms, 250);
        assert!(!config.media.autoplay);
        assert_eq!(config.display.bar_height, 20.0);
        assert_eq!(config.marks.count, 100);
    }

    #[test]
    fn test_media_source_conversion() {
        let media = MediaConfig {
            timeupdate_interval_ms: 0,
            ..MediaConfig::default()
        };
        let source = media.to_source();
        assert_eq!(source.name, "test1.mp4");
        assert_eq!(source.duration, 240.0);
        assert_eq!(source.timeupdate_interval, Duration::from_millis(1));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let config = PlayerConfig {
            media: MediaConfig {
                source: "lecture.mp4".to_string(),
                duration_secs: 95.5,
                timeupdate_interval_ms: 100,
                autoplay: true,
            },
            display: DisplayConfig {
                bar_height: 24.0,
                ..DisplayConfig::default()
            },
            marks: MarkSchedule {
                count: 12,
                utc_offset_hours: None,
                ..MarkSchedule::default()
            },
        };

        save_config(&config, &path).unwrap();
        assert_eq!(load_config(&path), config);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "media:\n  duration_secs: 30\n").unwrap();

        let config = load_config(&path);
        assert_eq!(config.media.duration_secs, 30.0);
        assert_eq!(config.media.source, "test1.mp4");
        assert_eq!(config.display, DisplayConfig::default());
    }

    #[test]
    fn test_missing_and_invalid_files_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.yaml");
        assert_eq!(load_config(&missing), PlayerConfig::default());

        let invalid = dir.path().join("broken.yaml");
        std::fs::write(&invalid, "media: [not, a, map").unwrap();
        assert_eq!(load_config(&invalid), PlayerConfig::default());
    }
}
