//! Game engine: board, turn rotation and outcome tracking.

use crate::action::{Coord, Move};
use crate::board::Board;
use crate::error::{InvalidConfigError, InvalidConfigKind};
use crate::player::Player;
use crate::rules::{self, WinningCombo};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::{debug, info, instrument, warn};

/// Board size used when none is given.
pub const BOARD_SIZE: usize = 3;

/// Who starts the next game after [`GameEngine::reset`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ResetPolicy {
    /// The rotation keeps going: the player after the current one starts.
    #[default]
    Advance,
    /// The first player always starts a new game.
    Restart,
}

/// Where a game instance stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum GameStatus {
    /// Moves can still be made.
    InProgress,
    /// A line is owned by one label.
    Won,
    /// The board is full and nobody owns a line.
    Tied,
}

/// Result of [`GameEngine::play`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The cell was occupied, off the board, or the game is over.
    Rejected,
    /// The move stood and the turn passed on.
    Continue {
        /// Player whose turn it is now.
        next: Player,
    },
    /// The move completed a line. The turn does not pass on.
    Won {
        /// Player who completed the line.
        winner: Player,
        /// The completed line.
        combo: WinningCombo,
    },
    /// The move filled the board without completing a line.
    Tied,
}

/// Tic-tac-toe engine for two or more players on an N×N board.
///
/// Invalid input is never an error here: [`is_valid_move`](Self::is_valid_move)
/// answers `false` and the caller ignores the click.
#[derive(Debug, Clone)]
pub struct GameEngine {
    players: Vec<Player>,
    current: usize,
    board: Board,
    winning_combos: Vec<WinningCombo>,
    winner_combo: Option<WinningCombo>,
    reset_policy: ResetPolicy,
}

impl GameEngine {
    /// Creates an engine with an empty `board_size`×`board_size` board.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidConfigError`] if fewer than two players are given,
    /// the board size is zero, or a label is not exactly one character.
    #[instrument(skip(players), fields(player_count = players.len()))]
    pub fn new(players: Vec<Player>, board_size: usize) -> Result<Self, InvalidConfigError> {
        if players.len() < 2 {
            warn!("Rejecting engine with too few players");
            return Err(InvalidConfigError::new(InvalidConfigKind::TooFewPlayers {
                count: players.len(),
            }));
        }
        if board_size < 1 {
            warn!("Rejecting engine with empty board");
            return Err(InvalidConfigError::new(InvalidConfigKind::EmptyBoard));
        }
        if let Some(player) = players.iter().find(|p| p.label().chars().count() != 1) {
            warn!(label = %player.label(), "Rejecting player label");
            return Err(InvalidConfigError::new(InvalidConfigKind::InvalidLabel {
                label: player.label().clone(),
            }));
        }

        info!(board_size, first = %players[0], "Creating game engine");
        Ok(Self {
            players,
            current: 0,
            board: Board::new(board_size),
            winning_combos: rules::compute_winning_combos(board_size),
            winner_combo: None,
            reset_policy: ResetPolicy::default(),
        })
    }

    /// Creates an engine with the default 3×3 board.
    ///
    /// # Errors
    ///
    /// Same as [`GameEngine::new`].
    pub fn with_default_size(players: Vec<Player>) -> Result<Self, InvalidConfigError> {
        Self::new(players, BOARD_SIZE)
    }

    /// Sets who starts after a reset.
    pub fn with_reset_policy(mut self, reset_policy: ResetPolicy) -> Self {
        self.reset_policy = reset_policy;
        self
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Returns the players in turn order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the number of rows (and columns).
    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    /// Returns every winning line, computed once at construction.
    pub fn winning_combos(&self) -> &[WinningCombo] {
        &self.winning_combos
    }

    /// Returns the reset policy in effect.
    pub fn reset_policy(&self) -> ResetPolicy {
        self.reset_policy
    }

    /// Checks that nobody has won yet and the target cell is unoccupied.
    ///
    /// Does not look at whose turn it is; callers stamp the move with the
    /// current player's label. Cells outside the board are never valid.
    #[instrument(skip(self, mv), fields(row = mv.row, col = mv.col))]
    pub fn is_valid_move(&self, mv: &Move) -> bool {
        let valid = !self.has_winner() && self.board.is_empty(mv.row, mv.col);
        if !valid {
            debug!(has_winner = self.has_winner(), "Move rejected");
        }
        valid
    }

    /// Writes a move to the board and records a win if it completed a line.
    ///
    /// The caller must have checked [`is_valid_move`](Self::is_valid_move);
    /// occupancy is not re-checked. A move off the board is ignored.
    #[instrument(skip(self, mv), fields(mv = %mv))]
    pub fn apply_move(&mut self, mv: Move) {
        if let Err(e) = self.board.set(mv) {
            warn!(error = e, "Ignoring move outside the board");
            return;
        }

        if let Some(combo) = rules::find_winner(&self.board, &self.winning_combos) {
            info!(line = %combo.kind(), "Line completed");
            self.winner_combo = Some(combo.clone());
        }
    }

    /// Returns true once a move has completed a line.
    pub fn has_winner(&self) -> bool {
        self.winner_combo.is_some()
    }

    /// Returns the completed line, or an empty slice while there is none.
    pub fn winner_combo(&self) -> &[Coord] {
        self.winner_combo
            .as_ref()
            .map(WinningCombo::cells)
            .unwrap_or(&[])
    }

    /// Returns the player whose label fills the completed line.
    pub fn winner(&self) -> Option<&Player> {
        let combo = self.winner_combo.as_ref()?;
        let label = combo.owner(&self.board)?;
        self.players.iter().find(|p| p.label() == label)
    }

    /// Returns true if the board is full and nobody has won.
    pub fn is_tied(&self) -> bool {
        !self.has_winner() && rules::is_draw(&self.board, &self.winning_combos)
    }

    /// Returns the current game status.
    pub fn status(&self) -> GameStatus {
        if self.has_winner() {
            GameStatus::Won
        } else if self.is_tied() {
            GameStatus::Tied
        } else {
            GameStatus::InProgress
        }
    }

    /// Passes the turn to the next player, wrapping after the last.
    #[instrument(skip(self))]
    pub fn toggle_turn(&mut self) {
        self.current = (self.current + 1) % self.players.len();
        debug!(current = %self.current_player(), "Turn passed");
    }

    /// Clears the board and the winner for a new game.
    ///
    /// With [`ResetPolicy::Advance`] the rotation moves on one player, so the
    /// starter differs from the player who was current; with
    /// [`ResetPolicy::Restart`] the first player starts.
    #[instrument(skip(self), fields(policy = %self.reset_policy))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.winner_combo = None;
        match self.reset_policy {
            ResetPolicy::Advance => self.toggle_turn(),
            ResetPolicy::Restart => self.current = 0,
        }
        info!(starter = %self.current_player(), "Game reset");
    }

    /// Plays the current player's mark at `(row, col)`.
    ///
    /// Runs validation, application, tie and win checks, and passes the
    /// turn on when the game continues.
    #[instrument(skip(self))]
    pub fn play(&mut self, row: usize, col: usize) -> PlayOutcome {
        let mv = Move::new(row, col, self.current_player().label().clone());
        if !self.is_valid_move(&mv) {
            return PlayOutcome::Rejected;
        }
        self.apply_move(mv);

        if self.is_tied() {
            info!("Game tied");
            return PlayOutcome::Tied;
        }
        if let Some(combo) = &self.winner_combo {
            let winner = self.current_player().clone();
            info!(winner = %winner, "Game won");
            return PlayOutcome::Won {
                winner,
                combo: combo.clone(),
            };
        }

        self.toggle_turn();
        PlayOutcome::Continue {
            next: self.current_player().clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PlayerColor;

    fn players() -> Vec<Player> {
        vec![
            Player::new("Ana", "X", PlayerColor::Blue),
            Player::new("Bia", "O", PlayerColor::Green),
        ]
    }

    fn engine() -> GameEngine {
        GameEngine::with_default_size(players()).unwrap()
    }

    #[test]
    fn test_new_engine_starts_clean() {
        let engine = engine();
        assert_eq!(engine.board_size(), 3);
        assert_eq!(engine.current_player().name(), "Ana");
        assert!(!engine.has_winner());
        assert!(engine.winner_combo().is_empty());
        assert_eq!(engine.winning_combos().len(), 8);
        assert_eq!(engine.status(), GameStatus::InProgress);
        assert_eq!(engine.reset_policy(), ResetPolicy::Advance);
    }

    #[test]
    fn test_rejects_zero_board() {
        let err = GameEngine::new(players(), 0).unwrap_err();
        assert_eq!(err.kind, InvalidConfigKind::EmptyBoard);
    }

    #[test]
    fn test_rejects_multi_character_label() {
        let mut roster = players();
        roster.push(Player::new("Caio", "XO", PlayerColor::Red));
        let err = GameEngine::new(roster, 3).unwrap_err();
        assert_eq!(
            err.kind,
            InvalidConfigKind::InvalidLabel {
                label: "XO".to_string()
            }
        );
    }

    #[test]
    fn test_off_board_move_is_invalid_and_ignored() {
        let mut engine = engine();
        let mv = Move::new(3, 0, "X".to_string());
        assert!(!engine.is_valid_move(&mv));
        engine.apply_move(mv);
        assert_eq!(engine.board(), &Board::new(3));
    }

    #[test]
    fn test_play_passes_turn() {
        let mut engine = engine();
        let outcome = engine.play(1, 1);
        assert_eq!(
            outcome,
            PlayOutcome::Continue {
                next: players()[1].clone()
            }
        );
        assert_eq!(engine.board().label((1, 1)), Some("X"));
        assert_eq!(engine.play(1, 1), PlayOutcome::Rejected);
        assert_eq!(engine.current_player().name(), "Bia");
    }

    #[test]
    fn test_play_reports_win_without_passing_turn() {
        let mut engine = engine();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            engine.play(row, col);
        }
        match engine.play(0, 2) {
            PlayOutcome::Won { winner, combo } => {
                assert_eq!(winner.name(), "Ana");
                assert_eq!(combo.cells(), &[(0, 0), (0, 1), (0, 2)]);
            }
            other => panic!("expected a win, got {other:?}"),
        }
        assert_eq!(engine.current_player().name(), "Ana");
        assert_eq!(engine.winner().map(|p| p.name().as_str()), Some("Ana"));
        assert_eq!(engine.play(2, 2), PlayOutcome::Rejected);
    }

    #[test]
    fn test_winner_is_none_for_unknown_label() {
        let mut engine = engine();
        for col in 0..3 {
            engine.apply_move(Move::new(2, col, "Z".to_string()));
        }
        assert!(engine.has_winner());
        assert!(engine.winner().is_none());
    }

    #[test]
    fn test_restart_policy_returns_to_first_player() {
        let mut engine = engine().with_reset_policy(ResetPolicy::Restart);
        engine.toggle_turn();
        engine.reset();
        assert_eq!(engine.current_player().name(), "Ana");
    }
}
