use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{self, LoggingSettings};

/// Install a file-backed `tracing` subscriber.
///
/// The terminal belongs to the TUI, so nothing is written to stderr. When the
/// log file can't be opened, logging stays off.
pub fn init(settings: &LoggingSettings) {
    let Some(path) = settings.file.clone().or_else(config::default_log_path) else {
        return;
    };
    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    // LULL_LOG env controls level: error, warn, info, debug, trace
    let filter =
        EnvFilter::try_from_env("LULL_LOG").unwrap_or_else(|_| EnvFilter::new(&settings.level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init();
}
