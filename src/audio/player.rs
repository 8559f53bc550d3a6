use std::path::Path;
use std::sync::Mutex;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::warn;

use super::thread::spawn_audio_thread;
use super::types::{AudioCmd, MediaEvent, MediaOutput};

/// `MediaOutput` backed by the rodio audio thread.
pub struct AudioPlayer {
    tx: Sender<AudioCmd>,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl AudioPlayer {
    /// Spawn the audio thread. The returned receiver yields its lifecycle notifications.
    pub fn new() -> (Self, Receiver<MediaEvent>) {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let (event_tx, event_rx) = mpsc::channel::<MediaEvent>();

        let audio_handle = spawn_audio_thread(rx, event_tx);

        let player = Self {
            tx,
            join: Mutex::new(Some(audio_handle)),
        };
        (player, event_rx)
    }

    pub fn send(&self, cmd: AudioCmd) -> Result<(), mpsc::SendError<AudioCmd>> {
        self.tx.send(cmd)
    }

    fn dispatch(&self, cmd: AudioCmd) {
        if let Err(e) = self.send(cmd) {
            warn!(cmd = ?e.0, "audio thread is gone");
        }
    }

    pub fn quit_softly(&self, fade_out: Duration) {
        let _ = self.send(AudioCmd::Quit {
            fade_out_ms: fade_millis(fade_out),
        });

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }
}

/// Whole milliseconds of `d`, saturating at `u64::MAX`.
pub(super) fn fade_millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

impl MediaOutput for AudioPlayer {
    fn bind(&mut self, generation: u64, asset: &Path, looped: bool) {
        self.dispatch(AudioCmd::Bind {
            generation,
            asset: asset.to_path_buf(),
            looped,
        });
    }

    fn play(&mut self) {
        self.dispatch(AudioCmd::Play);
    }

    fn pause(&mut self) {
        self.dispatch(AudioCmd::Pause);
    }

    fn reset_position(&mut self) {
        self.dispatch(AudioCmd::ResetPosition);
    }

    fn set_volume(&mut self, volume: f32) {
        self.dispatch(AudioCmd::SetVolume(volume));
    }
}
