//! Pure tic-tac-toe game logic.
//!
//! The engine owns an N×N board, cycles through two or more players and
//! detects wins and ties. It knows nothing about rendering: a front end asks
//! whether a move is valid, applies it, and reads back the state.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, Move, Player, PlayerColor};
//!
//! # fn main() -> Result<(), tictactoe_engine::InvalidConfigError> {
//! let players = vec![
//!     Player::new("Ana", "X", PlayerColor::Blue),
//!     Player::new("Bia", "O", PlayerColor::Green),
//! ];
//! let mut engine = GameEngine::with_default_size(players)?;
//!
//! let mv = Move::new(1, 1, engine.current_player().label().clone());
//! if engine.is_valid_move(&mv) {
//!     engine.apply_move(mv);
//!     if !engine.has_winner() && !engine.is_tied() {
//!         engine.toggle_turn();
//!     }
//! }
//! assert_eq!(engine.current_player().name(), "Bia");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod engine;
mod error;
mod player;
pub mod rules;

pub use action::{Coord, Move};
pub use board::Board;
pub use engine::{BOARD_SIZE, GameEngine, GameStatus, PlayOutcome, ResetPolicy};
pub use error::{InvalidConfigError, InvalidConfigKind};
pub use player::{Player, PlayerColor};
pub use rules::{LineKind, WinningCombo, compute_winning_combos};
