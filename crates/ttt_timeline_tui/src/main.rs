//! ttt - terminal frontend for the tic-tac-toe timeline engine.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::TuiConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument, warn};
use tracing_subscriber::EnvFilter;
use ttt_timeline::{GameEngine, PlayOutcome, view};

use app::App;
use input::action_for;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, descending } => run_play(config, descending),
        Command::Replay {
            cells,
            jump,
            descending,
        } => run_replay(cells, jump, descending),
    }
}

/// Run the interactive TUI.
fn run_play(config_path: std::path::PathBuf, descending: bool) -> Result<()> {
    let mut config = TuiConfig::load_or_default(&config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;
    if descending {
        config = config.with_descending();
    }

    // Log to a file to avoid interfering with the TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(config = ?config, "Starting ttt TUI");

    let mut terminal = setup_terminal()?;

    let app = App::new(*config.order_ascending());
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Enters raw mode and the alternate screen.
///
/// A failure part way through undoes the steps already taken, so the shell
/// is never left in raw mode.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    restore_on_err(execute!(stdout, EnterAlternateScreen), || {
        let _ = disable_raw_mode();
    })?;
    let terminal = restore_on_err(Terminal::new(CrosstermBackend::new(stdout)), || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    })?;
    Ok(terminal)
}

/// Runs `restore` when `result` is an error, then hands the result back.
fn restore_on_err<T, E>(result: Result<T, E>, restore: impl FnOnce()) -> Result<T, E> {
    if result.is_err() {
        restore();
    }
    result
}

/// Draw, wait for a key, apply it. Repeat until quit.
#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(action) = action_for(key.code, app.focus())
            && !app.handle(action)
        {
            return Ok(());
        }
    }
}

/// Replay cells non-interactively and print the result.
#[instrument(skip(cells), fields(moves = cells.len()))]
fn run_replay(cells: Vec<usize>, jump: Option<usize>, descending: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut engine = GameEngine::new();
    for cell in cells {
        if let PlayOutcome::Ignored(rejection) = engine.play(cell) {
            warn!(cell, %rejection, "Skipping move");
        }
    }
    if let Some(step) = jump {
        engine.jump_to(step)?;
    }
    if descending {
        engine.toggle_order();
    }

    let state = engine.state();
    println!("{}", state.current_board().display());
    println!();
    println!("{}", view::status_line(state));
    println!();
    for entry in view::history_entries(state) {
        let marker = if entry.is_current { '*' } else { ' ' };
        println!("{} {}", marker, entry);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_restore_runs_on_error() {
        let restored = Cell::new(false);
        let result: Result<(), &str> = restore_on_err(Err("no tty"), || restored.set(true));
        assert_eq!(result, Err("no tty"));
        assert!(restored.get());
    }

    #[test]
    fn test_restore_skipped_on_success() {
        let restored = Cell::new(false);
        let result: Result<u8, &str> = restore_on_err(Ok(7), || restored.set(true));
        assert_eq!(result, Ok(7));
        assert!(!restored.get());
    }
}
