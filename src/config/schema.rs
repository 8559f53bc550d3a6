use std::path::PathBuf;

use serde::Deserialize;

use crate::player::DEFAULT_VOLUME;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/lull/config.toml` or `~/.config/lull/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `LULL__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub audio: AudioSettings,
    pub playback: PlaybackSettings,
    pub controls: ControlsSettings,
    pub ui: UiSettings,
    pub catalog: CatalogSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Fade-out duration when quitting (milliseconds).
    /// Set to 0 to stop immediately.
    pub quit_fade_out_ms: u64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            quit_fade_out_ms: 500,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Volume at startup, 0.0..=1.0.
    pub initial_volume: f32,
    /// Name of the track selected at startup. Defaults to the first catalog entry.
    pub initial_track: Option<String>,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            initial_volume: DEFAULT_VOLUME,
            initial_track: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// Volume change per `+`/`-` or arrow key press on the slider.
    pub volume_step: f32,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self { volume_step: 0.05 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// Whether to capture the mouse so controls can be clicked.
    pub mouse: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ breathe in, breathe out ~ ".to_string(),
            mouse: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Directory holding `white-noise.mp3`, `rain.mp3`, `ocean.mp3` and `forest.mp3`.
    pub sounds_dir: PathBuf,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            sounds_dir: PathBuf::from("sounds"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing` filter directive used when `LULL_LOG` is unset.
    pub level: String,
    /// Log file. Defaults to `$XDG_STATE_HOME/lull/lull.log`.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
