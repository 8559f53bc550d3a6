use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::fake::{Call, RecordingOutput};
use super::player::fade_millis;
use super::*;

#[test]
fn open_error_names_the_asset_and_keeps_the_source() {
    let err = AudioError::Open {
        path: PathBuf::from("/tmp/sounds/rain.mp3"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    };
    assert!(err.to_string().contains("rain.mp3"));
    assert!(err.source().is_some());
}

#[test]
fn no_output_device_error_is_readable() {
    let err = AudioError::NoOutputDevice("no default device".into());
    assert_eq!(err.to_string(), "no audio output device: no default device");
}

#[test]
fn fresh_binding_does_not_inherit_volume() {
    let mut out = RecordingOutput::default();
    out.set_volume(0.3);
    out.bind(4, Path::new("ocean.mp3"), true);
    assert_eq!(out.volume, 1.0);
    assert_eq!(out.generation, 4);
    assert!(out.looped);
}

#[test]
fn rejected_play_is_reported_for_the_current_binding() {
    let mut out = RecordingOutput {
        reject_play: true,
        ..RecordingOutput::default()
    };
    out.bind(2, Path::new("rain.mp3"), true);
    out.play();

    assert!(!out.playing);
    assert_eq!(
        out.take_events(),
        vec![MediaEvent::new(2, MediaEventKind::Rejected)]
    );
    assert_eq!(out.calls.last(), Some(&Call::Play));
}

#[test]
fn fade_length_saturates_instead_of_wrapping() {
    assert_eq!(fade_millis(Duration::from_millis(500)), 500);
    assert_eq!(fade_millis(Duration::from_micros(1_999)), 1);
    assert_eq!(fade_millis(Duration::MAX), u64::MAX);
}
