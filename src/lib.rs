//! Tic-tac-toe in the terminal.
//!
//! The game rules live in [`tictactoe_engine`]; this crate is the front end
//! that drives the engine.
//!
//! # Architecture
//!
//! - **Config**: TOML settings for players, board size and reset policy
//! - **CLI**: command-line overrides on top of the config file
//! - **TUI**: name entry and board screens built on ratatui

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod tui;

// Crate-level exports - CLI and configuration
pub use cli::Cli;
pub use config::{ConfigError, GameConfig, PlayerEntry};

// Crate-level exports - Terminal UI
pub use tui::{
    BoardScreen, Controller, NameEntryScreen, Screen, ScreenTransition, center_rect, digit_to_cell,
    draw_board, move_cursor, player_color, run_tui,
};

// Crate-level exports - Game engine
pub use tictactoe_engine::{
    BOARD_SIZE, Board, Coord, GameEngine, GameStatus, InvalidConfigError, Move, PlayOutcome,
    Player, PlayerColor, ResetPolicy, WinningCombo,
};
