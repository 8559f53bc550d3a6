use std::env;
use std::io::Write;
use std::path::PathBuf;
use std::sync::mpsc;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::mpris::ControlCmd;

mod event_loop;
mod logging;
mod mpris_sync;
mod settings;
mod startup;

const USAGE: &str = "usage: lull [SOUNDS_DIR]

Plays one of four looping ambient sounds (white noise, rain, ocean, forest).
SOUNDS_DIR must contain white-noise.mp3, rain.mp3, ocean.mp3 and forest.mp3.";

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let arg = env::args().nth(1);
    if matches!(arg.as_deref(), Some("-h" | "--help")) {
        println!("{USAGE}");
        return Ok(());
    }

    let (mut settings, config_problem) = settings::load_settings();
    logging::init(&settings.logging);
    if let Some(problem) = config_problem {
        warn!(%problem, "using default settings");
    }

    if let Some(dir) = arg {
        settings.catalog.sounds_dir = PathBuf::from(dir);
    }
    info!(sounds_dir = %settings.catalog.sounds_dir.display(), "starting");

    let (mut app, media_events) = startup::build_app(&settings);

    let (control_tx, control_rx) = mpsc::channel::<ControlCmd>();
    let mpris = crate::mpris::spawn_mpris(control_tx);
    mpris_sync::update_mpris(&mpris, &app);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if settings.ui.mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result: Result<(), Box<dyn std::error::Error>> = (|| {
        let mut state = event_loop::EventLoopState::new(&app);

        event_loop::run(
            &mut terminal,
            &settings,
            &mut app,
            &media_events,
            &mpris,
            &control_rx,
            &mut state,
        )
    })();

    let restored = restore_terminal(&mut terminal, settings.ui.mouse);

    info!("bye");
    run_result?;
    restored
}

/// Undo raw mode, the alternate screen and mouse capture. Every step runs even
/// when an earlier one fails; the first error is returned.
fn restore_terminal<W: Write>(
    terminal: &mut Terminal<CrosstermBackend<W>>,
    mouse: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut results = vec![disable_raw_mode()];
    if mouse {
        results.push(execute!(terminal.backend_mut(), DisableMouseCapture));
    }
    results.push(execute!(terminal.backend_mut(), LeaveAlternateScreen));
    results.push(terminal.show_cursor());
    first_error(results)?;
    Ok(())
}

fn first_error(results: Vec<std::io::Result<()>>) -> std::io::Result<()> {
    results.into_iter().find(Result::is_err).unwrap_or(Ok(()))
}
