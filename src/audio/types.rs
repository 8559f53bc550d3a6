//! Audio-related small types: the Media Output trait, its lifecycle
//! notifications and the commands understood by the audio thread.

use std::path::{Path, PathBuf};

/// A playback handle bound to one asset at a time.
///
/// Requests are fire-and-forget. The authoritative outcome of `play` and
/// `pause` arrives later as a [`MediaEvent`].
pub trait MediaOutput {
    /// Retarget the output to `asset`. The new binding starts paused at
    /// position zero with volume 1.0; it does not inherit the old volume.
    fn bind(&mut self, generation: u64, asset: &Path, looped: bool);
    fn play(&mut self);
    fn pause(&mut self);
    /// Move the playback position of the current binding back to the start.
    fn reset_position(&mut self);
    fn set_volume(&mut self, volume: f32);
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MediaEventKind {
    /// Playback actually started.
    Started,
    /// Playback paused.
    Paused,
    /// The source ran out. Looping sources should not normally end.
    Ended,
    /// A play request was declined (nothing bound, no output device).
    Rejected,
}

/// A playback lifecycle notification from the Media Output.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MediaEvent {
    /// Generation of the binding that emitted the event.
    pub generation: u64,
    pub kind: MediaEventKind,
}

impl MediaEvent {
    pub fn new(generation: u64, kind: MediaEventKind) -> Self {
        Self { generation, kind }
    }
}

#[derive(Debug)]
pub enum AudioCmd {
    /// Replace the current sink with one for `asset`.
    Bind {
        generation: u64,
        asset: PathBuf,
        looped: bool,
    },
    /// Resume the current sink.
    Play,
    /// Pause the current sink.
    Pause,
    /// Rebuild the current sink at position zero.
    ResetPosition,
    /// Set the sink volume (0.0..=1.0).
    SetVolume(f32),
    /// Quit the audio thread, optionally fading out over `fade_out_ms` milliseconds.
    Quit { fade_out_ms: u64 },
}
