use crate::config;

/// Load and validate settings. Config is optional: any problem yields the
/// defaults plus a description of what went wrong, reported once logging is up.
pub fn load_settings() -> (config::Settings, Option<String>) {
    match config::Settings::load() {
        Ok(s) => match s.validate() {
            Ok(()) => (s, None),
            Err(msg) => {
                eprintln!("lull: invalid config, using defaults: {msg}");
                (config::Settings::default(), Some(format!("invalid config: {msg}")))
            }
        },
        Err(e) => {
            eprintln!("lull: failed to load config, using defaults: {e}");
            (config::Settings::default(), Some(format!("failed to load config: {e}")))
        }
    }
}
