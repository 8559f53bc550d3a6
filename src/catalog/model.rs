use std::path::{Path, PathBuf};

/// One selectable ambient sound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackEntry {
    /// Display label, unique within the catalog.
    pub name: String,
    /// Locator of the audio resource. Treated as opaque by the player.
    pub asset: PathBuf,
    /// Decorative symbol shown next to the name.
    pub icon: String,
}

/// (name, file name, icon) for every built-in track, in display order.
const BUILTIN: [(&str, &str, &str); 4] = [
    ("White Noise", "white-noise.mp3", "🌫"),
    ("Rain", "rain.mp3", "🌧"),
    ("Ocean", "ocean.mp3", "🌊"),
    ("Forest", "forest.mp3", "🌲"),
];

/// Fixed, ordered list of tracks. Never empty.
#[derive(Clone, Debug)]
pub struct Catalog {
    entries: Vec<TrackEntry>,
}

impl Catalog {
    /// Build the built-in catalog with assets resolved against `sounds_dir`.
    pub fn builtin(sounds_dir: &Path) -> Self {
        let entries = BUILTIN
            .iter()
            .map(|(name, file, icon)| TrackEntry {
                name: (*name).to_string(),
                asset: sounds_dir.join(file),
                icon: (*icon).to_string(),
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, index: usize) -> Option<&TrackEntry> {
        self.entries.get(index)
    }

    pub fn first(&self) -> &TrackEntry {
        &self.entries[0]
    }

    pub fn entries(&self) -> &[TrackEntry] {
        &self.entries
    }

    /// Index of the entry called `name` (case-insensitive).
    pub fn position(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.entries
            .iter()
            .position(|e| e.name.eq_ignore_ascii_case(name))
    }

    /// Index after `index`, wrapping to the first entry.
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.entries.len()
    }

    /// Index before `index`, wrapping to the last entry.
    pub fn prev_index(&self, index: usize) -> usize {
        if index == 0 || index >= self.entries.len() {
            self.entries.len() - 1
        } else {
            index - 1
        }
    }

    /// Names of the built-in tracks, usable before a catalog exists (config validation).
    pub fn builtin_names() -> impl Iterator<Item = &'static str> {
        BUILTIN.iter().map(|(name, _, _)| *name)
    }
}
