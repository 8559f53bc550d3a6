//! Best-effort inspection of catalog assets for the status line.

use std::path::Path;
use std::time::Duration;

use lofty::prelude::AudioFile;

/// What we could learn about an asset without decoding it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssetInfo {
    pub exists: bool,
    /// Length of one loop, when the container reports it.
    pub duration: Option<Duration>,
}

/// Check that `path` exists and read its duration from the container headers.
///
/// Never fails: a missing or unreadable asset simply yields less information.
pub fn probe_asset(path: &Path) -> AssetInfo {
    if !path.is_file() {
        return AssetInfo::default();
    }

    let duration = match lofty::read_from_path(path) {
        Ok(tagged) => Some(tagged.properties().duration()).filter(|d| !d.is_zero()),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "could not read asset properties");
            None
        }
    };

    AssetInfo {
        exists: true,
        duration,
    }
}
