use std::path::Path;

use super::*;
use crate::audio::fake::{Call, RecordingOutput};
use crate::audio::{MediaEvent, MediaEventKind};
use crate::catalog::Catalog;

const WHITE_NOISE: usize = 0;
const RAIN: usize = 1;
const OCEAN: usize = 2;
const FOREST: usize = 3;

fn player() -> Player<RecordingOutput> {
    Player::new(
        Catalog::builtin(Path::new("/tmp/sounds")),
        RecordingOutput::default(),
        DEFAULT_VOLUME,
    )
}

/// Deliver every queued notification, like the event loop does.
fn settle(p: &mut Player<RecordingOutput>) {
    for event in p.media_mut().take_events() {
        p.handle_media_event(event);
    }
}

#[test]
fn new_player_is_stopped_on_first_track_at_default_volume() {
    let p = player();
    assert_eq!(p.selected_entry().name, "White Noise");
    assert_eq!(p.playback(), PlaybackState::Stopped);
    assert_eq!(p.volume(), 0.5);

    let media = p.media();
    assert_eq!(media.asset.as_deref(), Some(Path::new("/tmp/sounds/white-noise.mp3")));
    assert!(media.looped);
    assert_eq!(media.volume, 0.5);
}

#[test]
fn initial_volume_is_clamped() {
    let p = Player::new(
        Catalog::builtin(Path::new(".")),
        RecordingOutput::default(),
        7.0,
    );
    assert_eq!(p.volume(), 1.0);
    assert_eq!(p.media().volume, 1.0);
}

#[test]
fn select_track_selects_and_stops_for_every_entry() {
    let mut p = player();
    for i in [RAIN, OCEAN, FOREST, WHITE_NOISE] {
        assert!(p.select_track(i));
        settle(&mut p);
        assert_eq!(p.selected(), i);
        assert!(!p.is_playing());
        assert_eq!(p.media().asset.as_deref(), Some(p.selected_entry().asset.as_path()));
    }
}

#[test]
fn select_track_outside_catalog_changes_nothing() {
    let mut p = player();
    let before = p.state().clone();
    assert!(!p.select_track(9));
    assert_eq!(p.state(), &before);
}

#[test]
fn select_track_issues_pause_bind_reset_volume_in_order() {
    let mut p = player();
    p.media_mut().calls.clear();
    p.select_track(RAIN);

    assert_eq!(
        p.media().calls,
        vec![
            Call::Pause,
            Call::Bind {
                generation: 1,
                asset: Path::new("/tmp/sounds/rain.mp3").to_path_buf(),
                looped: true,
            },
            Call::ResetPosition,
            Call::SetVolume(0.5),
        ]
    );
}

#[test]
fn set_volume_reaches_media_output_exactly() {
    let mut p = player();
    for v in [0.0, 0.01, 0.25, 0.3, 0.5, 0.8, 0.99, 1.0] {
        assert_eq!(p.set_volume(v), v);
        assert_eq!(p.volume(), v);
        assert_eq!(p.media().volume, v);
    }
}

#[test]
fn set_volume_clamps_out_of_range_and_ignores_nan() {
    let mut p = player();
    assert_eq!(p.set_volume(1.7), 1.0);
    assert_eq!(p.set_volume(-0.2), 0.0);
    assert_eq!(p.media().volume, 0.0);

    p.set_volume(0.4);
    assert_eq!(p.set_volume(f32::NAN), 0.4);
    assert_eq!(p.media().volume, 0.4);
}

#[test]
fn nudge_volume_snaps_to_grid_and_clamps() {
    let mut p = player();
    let v = p.nudge_volume(0.05);
    assert!((v - 0.55).abs() < 1e-6);

    p.set_volume(0.333);
    let v = p.nudge_volume(0.0);
    assert!((v - 0.33).abs() < 1e-6);

    p.set_volume(0.98);
    assert_eq!(p.nudge_volume(0.05), 1.0);
    p.set_volume(0.02);
    assert_eq!(p.nudge_volume(-0.05), 0.0);
}

#[test]
fn selecting_the_same_track_twice_is_idempotent() {
    let mut once = player();
    once.select_track(OCEAN);
    settle(&mut once);

    let mut twice = player();
    twice.select_track(OCEAN);
    twice.select_track(OCEAN);
    settle(&mut twice);

    assert_eq!(once.selected(), twice.selected());
    assert_eq!(once.playback(), twice.playback());
    assert_eq!(once.volume(), twice.volume());
    assert_eq!(once.pending(), twice.pending());
    assert_eq!(once.media().asset, twice.media().asset);
    assert_eq!(once.media().volume, twice.media().volume);
    assert_eq!(once.media().playing, twice.media().playing);
    assert_eq!(once.media().at_start, twice.media().at_start);
}

#[test]
fn switching_tracks_stops_and_rewinds() {
    let mut p = player();
    p.toggle_play_pause();
    settle(&mut p);
    assert!(p.is_playing());
    assert!(!p.media().at_start);

    p.select_track(FOREST);
    assert!(!p.is_playing());
    assert!(!p.media().playing);
    assert!(p.media().at_start);

    settle(&mut p);
    assert!(!p.is_playing());
}

#[test]
fn volume_survives_track_switch() {
    let mut p = player();
    p.set_volume(0.3);
    p.select_track(RAIN);
    assert_eq!(p.media().volume, 0.3);
    assert_eq!(p.volume(), 0.3);
}

#[test]
fn toggle_twice_goes_playing_then_stopped() {
    let mut p = player();

    assert_eq!(p.toggle_play_pause(), Request::Play);
    settle(&mut p);
    assert_eq!(p.playback(), PlaybackState::Playing);
    assert_eq!(p.pending(), None);

    assert_eq!(p.toggle_play_pause(), Request::Pause);
    settle(&mut p);
    assert_eq!(p.playback(), PlaybackState::Stopped);
    assert_eq!(p.pending(), None);
}

#[test]
fn toggle_does_not_flip_state_before_notification() {
    let mut p = player();
    p.toggle_play_pause();
    assert_eq!(p.playback(), PlaybackState::Stopped);
    assert_eq!(p.pending(), Some(Request::Play));

    settle(&mut p);
    assert_eq!(p.playback(), PlaybackState::Playing);
}

#[test]
fn rapid_toggles_alternate_intent() {
    let mut p = player();
    p.media_mut().calls.clear();

    assert_eq!(p.toggle_play_pause(), Request::Play);
    assert_eq!(p.toggle_play_pause(), Request::Pause);
    assert_eq!(p.toggle_play_pause(), Request::Play);
    assert_eq!(p.media().calls, vec![Call::Play, Call::Pause, Call::Play]);

    settle(&mut p);
    assert!(p.is_playing());
    assert_eq!(p.pending(), None);
}

#[test]
fn rejected_play_settles_to_stopped() {
    let mut p = player();
    p.media_mut().reject_play = true;

    p.toggle_play_pause();
    settle(&mut p);
    assert_eq!(p.playback(), PlaybackState::Stopped);
    assert_eq!(p.pending(), None);

    // Not retried on its own; the next toggle asks again.
    assert!(p.media().pending.is_empty());
    assert_eq!(p.toggle_play_pause(), Request::Play);
}

#[test]
fn late_start_from_previous_binding_is_ignored() {
    let mut p = player();
    p.toggle_play_pause();
    // The Started for White Noise is still in flight when the user switches.
    p.select_track(RAIN);
    settle(&mut p);

    assert_eq!(p.selected(), RAIN);
    assert!(!p.is_playing());
    assert_eq!(p.pending(), None);
}

#[test]
fn stale_event_is_reported_as_no_change() {
    let mut p = player();
    p.select_track(RAIN);
    let stale = MediaEvent::new(0, MediaEventKind::Started);
    assert!(!p.handle_media_event(stale));
    assert!(!p.is_playing());
}

#[test]
fn ended_notification_stops_playback() {
    let mut p = player();
    p.toggle_play_pause();
    settle(&mut p);
    assert!(p.is_playing());

    let ended = MediaEvent::new(p.generation(), MediaEventKind::Ended);
    assert!(p.handle_media_event(ended));
    assert_eq!(p.playback(), PlaybackState::Stopped);
}

#[test]
fn rain_play_volume_ocean_scenario() {
    let mut p = player();
    assert_eq!(p.selected_entry().name, "White Noise");
    assert_eq!(p.volume(), 0.5);
    assert!(!p.is_playing());

    p.select_track(RAIN);
    settle(&mut p);
    assert_eq!(p.selected_entry().name, "Rain");
    assert!(!p.is_playing());

    p.toggle_play_pause();
    settle(&mut p);
    assert!(p.is_playing());

    p.set_volume(0.8);
    assert_eq!(p.media().volume, 0.8);
    assert!(p.is_playing());

    p.select_track(OCEAN);
    settle(&mut p);
    assert_eq!(p.selected_entry().name, "Ocean");
    assert!(!p.is_playing());
    assert!(p.media().at_start);
    assert_eq!(p.media().volume, 0.8);
}
