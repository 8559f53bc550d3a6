use std::path::PathBuf;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::{debug, error, info, warn};

use super::error::AudioError;
use super::sink::create_sink;
use super::types::{AudioCmd, MediaEvent, MediaEventKind};

/// The one binding owned by the audio thread.
struct Binding {
    generation: u64,
    asset: Option<PathBuf>,
    looped: bool,
    sink: Option<Sink>,
    paused: bool,
    /// The sink has not played since it was built.
    at_start: bool,
    volume: f32,
}

impl Default for Binding {
    fn default() -> Self {
        Self {
            generation: 0,
            asset: None,
            looped: true,
            sink: None,
            paused: true,
            at_start: true,
            volume: 1.0,
        }
    }
}

impl Binding {
    fn rebuild(&mut self, stream: Option<&OutputStream>) {
        if let Some(old) = self.sink.take() {
            old.stop();
        }
        self.at_start = true;

        let Some(asset) = self.asset.as_deref() else {
            return;
        };

        let created = match stream {
            Some(stream) => create_sink(stream, asset, self.looped),
            None => Err(AudioError::NoOutputDevice("output stream unavailable".to_string())),
        };

        match created {
            Ok(sink) => {
                sink.set_volume(self.volume);
                if !self.paused {
                    sink.play();
                }
                self.sink = Some(sink);
            }
            Err(e) => {
                warn!(error = %e, generation = self.generation, "binding left empty");
            }
        }
    }

    fn event(&self, kind: MediaEventKind) -> MediaEvent {
        MediaEvent::new(self.generation, kind)
    }
}

fn fade_out_sink(sink: &Sink, fade_out_ms: u64) {
    if fade_out_ms == 0 {
        sink.set_volume(0.0);
        return;
    }
    let start = sink.volume();
    let steps: u64 = 20;
    let step_ms = (fade_out_ms / steps).max(1);
    for step in 1..=steps {
        let t = step as f32 / steps as f32;
        sink.set_volume(start * (1.0 - t));
        thread::sleep(Duration::from_millis(step_ms));
    }
    sink.set_volume(0.0);
}

/// Apply one command to the binding. Returns `false` when the thread should exit.
fn handle_cmd(
    binding: &mut Binding,
    stream: Option<&OutputStream>,
    cmd: AudioCmd,
    emit: impl Fn(MediaEvent),
) -> bool {
    match cmd {
        AudioCmd::Bind {
            generation,
            asset,
            looped,
        } => {
            debug!(generation, asset = %asset.display(), looped, "bind");
            binding.generation = generation;
            binding.asset = Some(asset);
            binding.looped = looped;
            binding.paused = true;
            // A fresh binding starts at unity gain; the caller re-applies volume.
            binding.volume = 1.0;
            binding.rebuild(stream);
        }

        AudioCmd::Play => match binding.sink.as_ref() {
            Some(sink) => {
                sink.play();
                binding.paused = false;
                binding.at_start = false;
                emit(binding.event(MediaEventKind::Started));
            }
            None => {
                binding.paused = true;
                emit(binding.event(MediaEventKind::Rejected));
            }
        },

        AudioCmd::Pause => {
            if let Some(sink) = binding.sink.as_ref() {
                sink.pause();
            }
            binding.paused = true;
            emit(binding.event(MediaEventKind::Paused));
        }

        AudioCmd::ResetPosition => {
            // A fresh decoder is our seek-to-zero. A sink that never played is already there.
            if binding.asset.is_some() && !binding.at_start {
                binding.rebuild(stream);
            }
        }

        AudioCmd::SetVolume(v) => {
            binding.volume = v.clamp(0.0, 1.0);
            if let Some(sink) = binding.sink.as_ref() {
                sink.set_volume(binding.volume);
            }
        }

        AudioCmd::Quit { fade_out_ms } => {
            if let Some(sink) = binding.sink.take() {
                if !binding.paused {
                    fade_out_sink(&sink, fade_out_ms);
                }
                sink.stop();
            }
            info!("audio thread exiting");
            return false;
        }
    }
    true
}

/// Periodic check for a playing sink that ran out of source.
fn tick(binding: &mut Binding, emit: impl Fn(MediaEvent)) {
    let ran_out = !binding.paused && binding.sink.as_ref().map(Sink::empty).unwrap_or(false);
    if ran_out {
        binding.paused = true;
        emit(binding.event(MediaEventKind::Ended));
    }
}

pub(super) fn spawn_audio_thread(
    rx: Receiver<AudioCmd>,
    events: Sender<MediaEvent>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let stream = match OutputStreamBuilder::open_default_stream() {
            Ok(mut stream) => {
                // rodio logs to stderr when OutputStream is dropped, which would
                // scribble over the TUI.
                stream.log_on_drop(false);
                info!("audio output stream opened");
                Some(stream)
            }
            Err(e) => {
                error!(error = %AudioError::NoOutputDevice(e.to_string()), "playing will be rejected");
                None
            }
        };

        let mut binding = Binding::default();
        let emit = |event: MediaEvent| {
            debug!(?event, "media event");
            let _ = events.send(event);
        };

        loop {
            match rx.recv_timeout(Duration::from_millis(200)) {
                Ok(cmd) => {
                    if !handle_cmd(&mut binding, stream.as_ref(), cmd, &emit) {
                        break;
                    }
                }
                Err(RecvTimeoutError::Timeout) => tick(&mut binding, &emit),
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    })
}
