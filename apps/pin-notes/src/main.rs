//! Pin Notes - a note taking TUI with a pinned reference note.
//!
//! Features:
//! - Save the active note as `note_<N>.txt`
//! - Open any `.txt` note through a file picker
//! - Pin one note side by side with the active note
//! - Dark and light themes

mod app;
mod config;
mod editor;
mod error;
mod logging;
mod notification;
mod picker;
mod session;
mod theme;
mod ui;

use std::env;
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};

use app::App;
use config::Config;

fn main() -> Result<()> {
    let file_path = env::args().nth(1).map(PathBuf::from);
    let config = Config::load();

    if let Err(e) = logging::init(&config.logging) {
        eprintln!("Logging disabled: {e:#}");
    }
    let mut terminal = setup_terminal()?;

    let mut app = App::startup(config, file_path);
    tracing::info!(
        notes_dir = %app.session.notes_dir().display(),
        target = %app.session.save_target(),
        "starting pin-notes"
    );

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "exited with error");
    }
    result
}

/// Enter raw mode and the alternate screen, undoing both if the terminal
/// cannot be created.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    let terminal = execute!(stdout, EnterAlternateScreen)
        .map_err(anyhow::Error::from)
        .and_then(|()| Ok(Terminal::new(CrosstermBackend::new(stdout))?));

    if terminal.is_err() {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
    terminal
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let tick_rate = Duration::from_millis(100);

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if app.handle_key(key) {
                    tracing::info!("quit");
                    return Ok(());
                }
            }
        }
    }
}
