//! Draw detection.

use super::win::{WinningCombo, find_winner};
use crate::board::Board;
use tracing::instrument;

/// Checks if the board is full and no line is owned by a single label.
///
/// A board that fills up on a winning move is a win, never a draw.
#[instrument(skip_all)]
pub fn is_draw(board: &Board, combos: &[WinningCombo]) -> bool {
    board.is_full() && find_winner(board, combos).is_none()
}
