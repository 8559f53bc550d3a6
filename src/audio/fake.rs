//! In-memory `MediaOutput` used by unit tests.
//!
//! It mimics the audio thread: requests are recorded, and notifications are
//! queued instead of delivered so tests decide when (and whether) the player
//! observes them.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use super::types::{MediaEvent, MediaEventKind, MediaOutput};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Bind {
        generation: u64,
        asset: PathBuf,
        looped: bool,
    },
    Play,
    Pause,
    ResetPosition,
    SetVolume(f32),
}

#[derive(Debug)]
pub(crate) struct RecordingOutput {
    pub calls: Vec<Call>,
    pub generation: u64,
    pub asset: Option<PathBuf>,
    pub looped: bool,
    pub volume: f32,
    pub playing: bool,
    pub at_start: bool,
    /// Decline every play request, like an environment without permission to play.
    pub reject_play: bool,
    pub pending: VecDeque<MediaEvent>,
}

impl Default for RecordingOutput {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            generation: 0,
            asset: None,
            looped: false,
            volume: 1.0,
            playing: false,
            at_start: true,
            reject_play: false,
            pending: VecDeque::new(),
        }
    }
}

impl RecordingOutput {
    fn emit(&mut self, kind: MediaEventKind) {
        self.pending.push_back(MediaEvent::new(self.generation, kind));
    }

    pub fn take_events(&mut self) -> Vec<MediaEvent> {
        self.pending.drain(..).collect()
    }
}

impl MediaOutput for RecordingOutput {
    fn bind(&mut self, generation: u64, asset: &Path, looped: bool) {
        self.calls.push(Call::Bind {
            generation,
            asset: asset.to_path_buf(),
            looped,
        });
        self.generation = generation;
        self.asset = Some(asset.to_path_buf());
        self.looped = looped;
        self.volume = 1.0;
        self.playing = false;
        self.at_start = true;
    }

    fn play(&mut self) {
        self.calls.push(Call::Play);
        if self.reject_play {
            self.emit(MediaEventKind::Rejected);
        } else {
            self.playing = true;
            self.at_start = false;
            self.emit(MediaEventKind::Started);
        }
    }

    fn pause(&mut self) {
        self.calls.push(Call::Pause);
        self.playing = false;
        self.emit(MediaEventKind::Paused);
    }

    fn reset_position(&mut self) {
        self.calls.push(Call::ResetPosition);
        self.at_start = true;
    }

    fn set_volume(&mut self, volume: f32) {
        self.calls.push(Call::SetVolume(volume));
        self.volume = volume;
    }
}
