use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::debug;

use crate::app::App;
use crate::audio::{AudioPlayer, MediaEvent};
use crate::config;
use crate::mpris::{ControlCmd, MprisHandle};
use crate::player::PlaybackState;
use crate::runtime::mpris_sync::update_mpris;
use crate::ui::{self, HitMap};

/// State tracked by the runtime event loop across iterations.
pub struct EventLoopState {
    /// Control rectangles from the most recent frame.
    pub hits: HitMap,
    /// Last (selection, playback) pushed to MPRIS.
    pub last_mpris: (usize, PlaybackState),
}

impl EventLoopState {
    /// Construct a new `EventLoopState` seeded from `app`.
    pub fn new(app: &App<AudioPlayer>) -> Self {
        Self {
            hits: HitMap::default(),
            last_mpris: (app.player.selected(), app.player.playback()),
        }
    }
}

/// Main terminal event loop: reconciles media notifications, draws, and
/// handles input from the terminal and MPRIS. Returns `Ok(())` when shutdown
/// is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App<AudioPlayer>,
    media_events: &mpsc::Receiver<MediaEvent>,
    mpris: &MprisHandle,
    control_rx: &mpsc::Receiver<ControlCmd>,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        // Playback state only moves when the audio thread says so.
        while let Ok(event) = media_events.try_recv() {
            app.player.handle_media_event(event);
        }

        let now = (app.player.selected(), app.player.playback());
        if now != state.last_mpris {
            update_mpris(mpris, app);
            state.last_mpris = now;
        }

        terminal.draw(|f| state.hits = ui::draw(f, app, &settings.ui))?;

        while let Ok(cmd) = control_rx.try_recv() {
            if handle_control_cmd(cmd, app) {
                quit(settings, app);
                return Ok(());
            }
        }

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if handle_key_event(key, app) {
                        quit(settings, app);
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => handle_mouse_event(mouse, app, &state.hits),
                _ => {}
            }
        }
    }
}

fn quit(settings: &config::Settings, app: &App<AudioPlayer>) {
    app.player
        .media()
        .quit_softly(Duration::from_millis(settings.audio.quit_fade_out_ms));
}

/// Apply an MPRIS command. Returns `true` when the app should quit.
fn handle_control_cmd(cmd: ControlCmd, app: &mut App<AudioPlayer>) -> bool {
    debug!(?cmd, "control command");
    match cmd {
        ControlCmd::Quit => return true,
        ControlCmd::Play => app.request_play(),
        ControlCmd::Pause => app.request_pause(),
        ControlCmd::PlayPause => {
            app.player.toggle_play_pause();
        }
        ControlCmd::Stop => app.stop(),
        ControlCmd::Next => app.select_next_track(),
        ControlCmd::Prev => app.select_prev_track(),
    }
    false
}

/// Apply a key press. Returns `true` when the app should quit.
fn handle_key_event(key: KeyEvent, app: &mut App<AudioPlayer>) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Esc => {
            if app.show_help {
                app.toggle_help();
            } else {
                return true;
            }
        }
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Left | KeyCode::Char('h') => app.move_left(),
        KeyCode::Right | KeyCode::Char('l') => app.move_right(),
        // Enter and Space are the keyboard equivalent of a click.
        KeyCode::Enter | KeyCode::Char(' ') => app.activate(),
        KeyCode::Char('p') => {
            app.player.toggle_play_pause();
        }
        KeyCode::Char('+') | KeyCode::Char('=') => app.volume_up(),
        KeyCode::Char('-') | KeyCode::Char('_') => app.volume_down(),
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(n) = c.to_digit(10) {
                app.select_shortcut(n as usize);
            }
        }
        _ => {}
    }
    false
}

fn handle_mouse_event(mouse: MouseEvent, app: &mut App<AudioPlayer>, hits: &HitMap) {
    let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
        return;
    };
    if let Some(hit) = hits.hit(mouse.column, mouse.row) {
        app.click(hit);
    }
}
