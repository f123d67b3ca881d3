//! Terminal UI for tic-tac-toe.

mod controller;
mod input;
mod screen;
mod screens;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument};

use crate::config::GameConfig;

pub use controller::Controller;
pub use input::{digit_to_cell, move_cursor};
pub use screen::{Screen, ScreenTransition};
pub use screens::{BoardScreen, NameEntryScreen};
pub use ui::{center_rect, draw_board, player_color};

/// Runs the terminal UI until the players quit.
///
/// Puts the terminal in raw mode on an alternate screen and restores it on
/// the way out, including when setup or the event loop fails.
#[instrument(skip(config))]
pub fn run_tui(config: GameConfig, skip_names: bool) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    run_then_restore(|| run_session(config, skip_names), restore_terminal)
}

/// Enters the alternate screen and drives the controller.
fn run_session(config: GameConfig, skip_names: bool) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut controller = Controller::new(config, skip_names);
    controller.run(&mut terminal)
}

/// Leaves raw mode and the alternate screen and shows the cursor.
fn restore_terminal() -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)?;
    Ok(())
}

/// Runs `body`, then `restore` whatever `body` returned.
///
/// The body's error wins over a restore error.
fn run_then_restore(
    body: impl FnOnce() -> Result<()>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<()> {
    let res = body();
    if let Err(err) = &res {
        error!(error = ?err, "Terminal session failed");
    }
    let restored = restore();
    if let Err(err) = &restored {
        error!(error = ?err, "Failed to restore terminal");
    }
    res.and(restored)
}
