//! Win detection for N×N boards.

use crate::action::Coord;
use crate::board::Board;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Which line of the board a combo covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum LineKind {
    /// A full row.
    #[display("row {_0}")]
    Row(usize),
    /// A full column.
    #[display("column {_0}")]
    Column(usize),
    /// Top-left to bottom-right.
    #[display("diagonal")]
    Diagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

/// One way to win: `size` coordinates that must all carry the same label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningCombo {
    kind: LineKind,
    cells: Vec<Coord>,
}

impl WinningCombo {
    /// Returns which line this combo covers.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Returns the coordinates in line order.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Checks if the combo passes through `coord`.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Returns the label filling this line, if exactly one non-empty label does.
    pub fn owner<'b>(&self, board: &'b Board) -> Option<&'b str> {
        let labels: HashSet<&str> = self
            .cells
            .iter()
            .filter_map(|&coord| board.label(coord))
            .collect();
        if labels.len() != 1 {
            return None;
        }
        labels.into_iter().next().filter(|label| !label.is_empty())
    }
}

/// Builds every winning line for a `size`×`size` board.
///
/// Order is fixed: rows top to bottom, columns left to right, the main
/// diagonal, then the anti-diagonal, `2 * size + 2` combos in total.
#[instrument]
pub fn compute_winning_combos(size: usize) -> Vec<WinningCombo> {
    let rows = (0..size).map(|row| WinningCombo {
        kind: LineKind::Row(row),
        cells: (0..size).map(|col| (row, col)).collect(),
    });
    let columns = (0..size).map(|col| WinningCombo {
        kind: LineKind::Column(col),
        cells: (0..size).map(|row| (row, col)).collect(),
    });
    let diagonal = WinningCombo {
        kind: LineKind::Diagonal,
        cells: (0..size).map(|i| (i, i)).collect(),
    };
    let anti_diagonal = WinningCombo {
        kind: LineKind::AntiDiagonal,
        cells: (0..size).map(|i| (i, size - 1 - i)).collect(),
    };

    let combos: Vec<WinningCombo> = rows
        .chain(columns)
        .chain([diagonal, anti_diagonal])
        .collect();
    debug!(count = combos.len(), "Winning combos computed");
    combos
}

/// Returns the first combo in `combos` owned by a single label.
#[instrument(skip_all)]
pub fn find_winner<'c>(board: &Board, combos: &'c [WinningCombo]) -> Option<&'c WinningCombo> {
    combos.iter().find(|combo| combo.owner(board).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;

    fn mark(board: &mut Board, label: &str, cells: &[Coord]) {
        for &(row, col) in cells {
            board.set(Move::new(row, col, label.to_string())).unwrap();
        }
    }

    #[test]
    fn test_three_by_three_lines() {
        let combos = compute_winning_combos(3);
        assert_eq!(combos.len(), 8);
        assert_eq!(combos[0].cells(), &[(0, 0), (0, 1), (0, 2)]);
        assert_eq!(combos[3].cells(), &[(0, 0), (1, 0), (2, 0)]);
        assert_eq!(combos[6].kind(), LineKind::Diagonal);
        assert_eq!(combos[6].cells(), &[(0, 0), (1, 1), (2, 2)]);
        assert_eq!(combos[7].kind(), LineKind::AntiDiagonal);
        assert_eq!(combos[7].cells(), &[(0, 2), (1, 1), (2, 0)]);
    }

    #[test]
    fn test_single_cell_board() {
        let combos = compute_winning_combos(1);
        assert_eq!(combos.len(), 4);
        assert!(combos.iter().all(|c| c.cells() == [(0, 0)]));
    }

    #[test]
    fn test_no_owner_on_empty_line() {
        let board = Board::new(3);
        assert!(compute_winning_combos(3).iter().all(|c| c.owner(&board).is_none()));
    }

    #[test]
    fn test_mixed_line_has_no_owner() {
        let mut board = Board::new(3);
        mark(&mut board, "X", &[(0, 0), (0, 1)]);
        mark(&mut board, "O", &[(0, 2)]);
        let combos = compute_winning_combos(3);
        assert_eq!(combos[0].owner(&board), None);
        assert!(find_winner(&board, &combos).is_none());
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new(3);
        mark(&mut board, "O", &[(0, 2), (1, 1), (2, 0)]);
        let combos = compute_winning_combos(3);
        let winner = find_winner(&board, &combos).unwrap();
        assert_eq!(winner.kind(), LineKind::AntiDiagonal);
        assert_eq!(winner.owner(&board), Some("O"));
    }

    #[test]
    fn test_line_kind_display() {
        assert_eq!(LineKind::Row(2).to_string(), "row 2");
        assert_eq!(LineKind::AntiDiagonal.to_string(), "anti-diagonal");
    }
}
