//! Application model types: `App`, `Focus` and `Hit`.
//!
//! Every interactive control can be reached by keyboard focus and by mouse,
//! and both paths end in the same `Player` operation.

use crate::audio::MediaOutput;
use crate::catalog::AssetInfo;
use crate::player::{Player, VOLUME_GRID};

/// The control that receives Enter/Space.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Focus {
    Track(usize),
    PlayPause,
    Volume,
}

/// A control under the mouse pointer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Hit {
    Track(usize),
    PlayPause,
    /// Position along the slider, `0.0` at the left edge and `1.0` at the right.
    Volume { ratio: f32 },
}

/// The main application model.
pub struct App<M: MediaOutput> {
    pub player: Player<M>,
    pub focus: Focus,
    pub show_help: bool,
    /// Amount moved by one slider step from the keyboard.
    pub volume_step: f32,
    /// Probe results, indexed like the catalog. May be empty.
    pub assets: Vec<AssetInfo>,
}

impl<M: MediaOutput> App<M> {
    /// Create a new `App` around `player`, focused on the first track button.
    pub fn new(player: Player<M>, volume_step: f32) -> Self {
        Self {
            player,
            focus: Focus::Track(0),
            show_help: false,
            volume_step,
            assets: Vec::new(),
        }
    }

    /// Record what is known about each catalog asset.
    pub fn set_assets(&mut self, assets: Vec<AssetInfo>) {
        self.assets = assets;
    }

    pub fn asset_info(&self, index: usize) -> Option<&AssetInfo> {
        self.assets.get(index)
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    fn track_count(&self) -> usize {
        self.player.catalog().len()
    }

    /// Move focus forward in Tab order: tracks, play/pause, volume, then wrap.
    pub fn focus_next(&mut self) {
        let last = self.track_count() - 1;
        self.focus = match self.focus {
            Focus::Track(i) if i < last => Focus::Track(i + 1),
            Focus::Track(_) => Focus::PlayPause,
            Focus::PlayPause => Focus::Volume,
            Focus::Volume => Focus::Track(0),
        };
    }

    /// Move focus backward in Tab order.
    pub fn focus_prev(&mut self) {
        let last = self.track_count() - 1;
        self.focus = match self.focus {
            Focus::Track(0) => Focus::Volume,
            Focus::Track(i) => Focus::Track(i - 1),
            Focus::PlayPause => Focus::Track(last),
            Focus::Volume => Focus::PlayPause,
        };
    }

    /// Left arrow: previous track button, or a quieter slider.
    pub fn move_left(&mut self) {
        match self.focus {
            Focus::Track(i) => self.focus = Focus::Track(self.player.catalog().prev_index(i)),
            Focus::Volume => self.volume_down(),
            Focus::PlayPause => {}
        }
    }

    /// Right arrow: next track button, or a louder slider.
    pub fn move_right(&mut self) {
        match self.focus {
            Focus::Track(i) => self.focus = Focus::Track(self.player.catalog().next_index(i)),
            Focus::Volume => self.volume_up(),
            Focus::PlayPause => {}
        }
    }

    /// Enter/Space on the focused control.
    pub fn activate(&mut self) {
        match self.focus {
            Focus::Track(i) => {
                self.player.select_track(i);
            }
            Focus::PlayPause => {
                self.player.toggle_play_pause();
            }
            Focus::Volume => {}
        }
    }

    /// Pointer activation: focus the control under the pointer, then act on it.
    pub fn click(&mut self, hit: Hit) {
        match hit {
            Hit::Track(i) => {
                if i < self.track_count() {
                    self.focus = Focus::Track(i);
                    self.activate();
                }
            }
            Hit::PlayPause => {
                self.focus = Focus::PlayPause;
                self.activate();
            }
            Hit::Volume { ratio } => {
                self.focus = Focus::Volume;
                let snapped = (ratio / VOLUME_GRID).round() * VOLUME_GRID;
                self.player.set_volume(snapped);
            }
        }
    }

    /// Number-key shortcut: select the `n`th track (1-based).
    pub fn select_shortcut(&mut self, n: usize) {
        if n >= 1 && n <= self.track_count() {
            self.focus = Focus::Track(n - 1);
            self.player.select_track(n - 1);
        }
    }

    pub fn volume_up(&mut self) {
        self.player.nudge_volume(self.volume_step);
    }

    pub fn volume_down(&mut self) {
        self.player.nudge_volume(-self.volume_step);
    }

    /// Play unless playing is already the outstanding intent.
    pub fn request_play(&mut self) {
        if !self.player.intends_playing() {
            self.player.toggle_play_pause();
        }
    }

    /// Pause unless pausing is already the outstanding intent.
    pub fn request_pause(&mut self) {
        if self.player.intends_playing() {
            self.player.toggle_play_pause();
        }
    }

    /// Stop and rewind the current track.
    pub fn stop(&mut self) {
        let current = self.player.selected();
        self.player.select_track(current);
    }

    pub fn select_next_track(&mut self) {
        let next = self.player.catalog().next_index(self.player.selected());
        self.player.select_track(next);
    }

    pub fn select_prev_track(&mut self) {
        let prev = self.player.catalog().prev_index(self.player.selected());
        self.player.select_track(prev);
    }
}
