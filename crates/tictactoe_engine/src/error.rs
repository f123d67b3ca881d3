//! Construction errors for the game engine.

use derive_more::{Display, Error};
use tracing::instrument;

/// Reason an engine configuration was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InvalidConfigKind {
    /// Fewer than two players were supplied.
    #[display("at least 2 players are required, got {count}")]
    TooFewPlayers {
        /// Number of players actually supplied.
        count: usize,
    },

    /// The board would have no cells.
    #[display("board size must be at least 1")]
    EmptyBoard,

    /// A player label is not a single character.
    #[display("player label must be exactly one character, got {label:?}")]
    InvalidLabel {
        /// The offending label.
        label: String,
    },
}

/// Engine construction error with location tracking.
///
/// Routine bad input (occupied cells, moves after the game ended) is never
/// reported through this type; see [`GameEngine::is_valid_move`](crate::GameEngine::is_valid_move).
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid config: {} at {}:{}", kind, file, line)]
pub struct InvalidConfigError {
    /// What was wrong with the configuration.
    pub kind: InvalidConfigKind,
    /// Line number where the error was raised.
    pub line: u32,
    /// Source file where the error was raised.
    pub file: &'static str,
}

impl InvalidConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: InvalidConfigKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
