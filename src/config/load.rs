use std::{env, path::PathBuf};

use crate::catalog::Catalog;

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file, then environment variables
/// (prefix `LULL__`), and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("LULL")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        let v = self.playback.initial_volume;
        if !(0.0..=1.0).contains(&v) {
            return Err(format!("playback.initial_volume must be within 0.0..=1.0, got {v}"));
        }
        let step = self.controls.volume_step;
        if !(step > 0.0 && step <= 1.0) {
            return Err(format!("controls.volume_step must be within (0.0, 1.0], got {step}"));
        }
        if let Some(name) = &self.playback.initial_track {
            let known = Catalog::builtin_names().any(|n| n.eq_ignore_ascii_case(name.trim()));
            if !known {
                return Err(format!("playback.initial_track {name:?} is not in the catalog"));
            }
        }
        Ok(())
    }
}

/// Resolve the config path from `LULL_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("LULL_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/lull/config.toml`
/// or `~/.config/lull/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("lull").join("config.toml"))
}

/// `$XDG_STATE_HOME/lull/lull.log`, or `~/.local/state/lull/lull.log`.
pub fn default_log_path() -> Option<PathBuf> {
    let state_home = if let Some(xdg) = env::var_os("XDG_STATE_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".local").join("state"))
    };

    state_home.map(|d| d.join("lull").join("lull.log"))
}
