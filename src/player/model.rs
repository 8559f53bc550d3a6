//! Player state and the operations that drive it.
//!
//! `playback` is reconciled from Media Output notifications only. Request
//! methods issue commands and remember what they asked for; they never flip
//! the playing flag themselves.

use tracing::{debug, info, warn};

use crate::audio::{MediaEvent, MediaEventKind, MediaOutput};
use crate::catalog::{Catalog, TrackEntry};

/// Volume used when nothing else is configured.
pub const DEFAULT_VOLUME: f32 = 0.5;

/// Granularity of the volume slider.
pub const VOLUME_GRID: f32 = 0.01;

/// Whether audio is actually coming out.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
}

/// A play/pause request that no notification has answered yet.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Request {
    Play,
    Pause,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlayerState {
    /// Index into the catalog. Always valid.
    pub selected: usize,
    pub playback: PlaybackState,
    /// Always within `0.0..=1.0`.
    pub volume: f32,
    /// Bumped on every retarget; notifications from older bindings are dropped.
    pub generation: u64,
    pub pending: Option<Request>,
}

pub struct Player<M: MediaOutput> {
    catalog: Catalog,
    media: M,
    state: PlayerState,
}

impl<M: MediaOutput> Player<M> {
    /// Create a player bound to the first catalog entry, stopped.
    pub fn new(catalog: Catalog, media: M, initial_volume: f32) -> Self {
        let volume = if initial_volume.is_nan() {
            DEFAULT_VOLUME
        } else {
            initial_volume.clamp(0.0, 1.0)
        };

        let mut player = Self {
            catalog,
            media,
            state: PlayerState {
                selected: 0,
                playback: PlaybackState::Stopped,
                volume,
                generation: 0,
                pending: None,
            },
        };

        let asset = player.catalog.first().asset.clone();
        player.media.bind(0, &asset, true);
        player.media.set_volume(volume);
        player
    }

    /// Select the catalog entry at `index`, forcing a stop and a rewind.
    ///
    /// Returns `false` (and changes nothing) when `index` is not in the catalog.
    pub fn select_track(&mut self, index: usize) -> bool {
        let Some(entry) = self.catalog.get(index) else {
            warn!(index, len = self.catalog.len(), "ignoring selection outside the catalog");
            return false;
        };
        let asset = entry.asset.clone();
        info!(track = %entry.name, "track selected");

        self.state.selected = index;
        self.state.playback = PlaybackState::Stopped;
        self.state.pending = None;
        self.state.generation = self.state.generation.wrapping_add(1);

        self.media.pause();
        self.media.bind(self.state.generation, &asset, true);
        self.media.reset_position();
        // A retargeted output doesn't keep the previous volume.
        self.media.set_volume(self.state.volume);
        true
    }

    /// Ask the Media Output to play or pause, whichever is the opposite of the
    /// most recent intent. Returns the request issued.
    pub fn toggle_play_pause(&mut self) -> Request {
        let request = if self.intends_playing() {
            self.media.pause();
            Request::Pause
        } else {
            self.media.play();
            Request::Play
        };
        debug!(?request, generation = self.state.generation, "playback requested");
        self.state.pending = Some(request);
        request
    }

    /// Set the volume, clamped into `0.0..=1.0`. NaN is ignored.
    ///
    /// Returns the volume now in effect.
    pub fn set_volume(&mut self, value: f32) -> f32 {
        if value.is_nan() {
            warn!("ignoring NaN volume");
            return self.state.volume;
        }
        let volume = value.clamp(0.0, 1.0);
        self.state.volume = volume;
        self.media.set_volume(volume);
        volume
    }

    /// Move the volume by `delta`, snapped to the slider grid.
    pub fn nudge_volume(&mut self, delta: f32) -> f32 {
        let target = ((self.state.volume + delta) / VOLUME_GRID).round() * VOLUME_GRID;
        self.set_volume(target)
    }

    /// Reconcile playback state with a Media Output notification.
    ///
    /// Returns `true` when the playback state changed.
    pub fn handle_media_event(&mut self, event: MediaEvent) -> bool {
        if event.generation != self.state.generation {
            debug!(?event, current = self.state.generation, "dropping stale media event");
            return false;
        }

        let before = self.state.playback;
        match event.kind {
            MediaEventKind::Started => {
                self.state.playback = PlaybackState::Playing;
                if self.state.pending == Some(Request::Play) {
                    self.state.pending = None;
                }
            }
            MediaEventKind::Paused => {
                self.state.playback = PlaybackState::Stopped;
                if self.state.pending == Some(Request::Pause) {
                    self.state.pending = None;
                }
            }
            MediaEventKind::Ended => {
                self.state.playback = PlaybackState::Stopped;
                self.state.pending = None;
            }
            MediaEventKind::Rejected => {
                info!(track = %self.selected_entry().name, "play request was rejected");
                self.state.playback = PlaybackState::Stopped;
                if self.state.pending == Some(Request::Play) {
                    self.state.pending = None;
                }
            }
        }
        before != self.state.playback
    }

    #[cfg(test)]
    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selected(&self) -> usize {
        self.state.selected
    }

    pub fn selected_entry(&self) -> &TrackEntry {
        &self.catalog.entries()[self.state.selected]
    }

    pub fn playback(&self) -> PlaybackState {
        self.state.playback
    }

    pub fn is_playing(&self) -> bool {
        self.state.playback == PlaybackState::Playing
    }

    pub fn volume(&self) -> f32 {
        self.state.volume
    }

    /// Playing state once every outstanding request has been answered.
    pub fn intends_playing(&self) -> bool {
        match self.state.pending {
            Some(Request::Play) => true,
            Some(Request::Pause) => false,
            None => self.is_playing(),
        }
    }

    pub fn pending(&self) -> Option<Request> {
        self.state.pending
    }

    #[cfg(test)]
    pub fn generation(&self) -> u64 {
        self.state.generation
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    #[cfg(test)]
    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }
}
