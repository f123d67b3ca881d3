//! N×N board storage.

use crate::action::{Coord, Move};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Square grid of cells in row-major order.
///
/// Every cell is a [`Move`] whose coordinate matches its slot, so
/// `board.get(r, c).map(|m| m.coord()) == Some((r, c))` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Move>,
}

impl Board {
    /// Creates an empty board with `size` rows and columns.
    #[instrument]
    pub fn new(size: usize) -> Self {
        let cells = (0..size)
            .flat_map(|row| (0..size).map(move |col| Move::empty(row, col)))
            .collect();
        Self { size, cells }
    }

    /// Returns the number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }

    /// Gets the cell at `(row, col)`, or `None` off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<&Move> {
        self.index(row, col).map(|i| &self.cells[i])
    }

    /// Gets the label at a coordinate, or `None` off the board.
    pub fn label(&self, (row, col): Coord) -> Option<&str> {
        self.get(row, col).map(|m| m.label.as_str())
    }

    /// Checks if the cell at `(row, col)` exists and is unoccupied.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(Move::is_empty)
    }

    /// Stores a move in the cell it names.
    pub fn set(&mut self, mv: Move) -> Result<(), &'static str> {
        let Some(i) = self.index(mv.row, mv.col) else {
            return Err("Position out of bounds");
        };
        self.cells[i] = mv;
        Ok(())
    }

    /// Returns every cell to its unoccupied state.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Move::empty(cell.row, cell.col);
        }
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|m| !m.is_empty())
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Move] {
        &self.cells
    }

    /// Iterates over the board one row at a time.
    pub fn rows(&self) -> impl Iterator<Item = &[Move]> {
        self.cells.chunks(self.size.max(1))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let separator = vec!["-"; self.size].join("+");
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
                writeln!(f, "{separator}")?;
            }
            let labels: Vec<&str> = row
                .iter()
                .map(|m| if m.is_empty() { "." } else { m.label.as_str() })
                .collect();
            write!(f, "{}", labels.join("|"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_cells_know_their_coordinates() {
        let board = Board::new(4);
        assert_eq!(board.cells().len(), 16);
        for row in 0..4 {
            for col in 0..4 {
                let cell = board.get(row, col).unwrap();
                assert_eq!(cell.coord(), (row, col));
                assert!(cell.is_empty());
            }
        }
    }

    #[test]
    fn test_out_of_bounds_is_none() {
        let board = Board::new(3);
        assert!(board.get(3, 0).is_none());
        assert!(board.get(0, 3).is_none());
        assert!(!board.is_empty(5, 5));
    }

    #[test]
    fn test_set_rejects_off_board_move() {
        let mut board = Board::new(3);
        assert!(board.set(Move::new(3, 1, "X".to_string())).is_err());
        assert!(board.set(Move::new(1, 1, "X".to_string())).is_ok());
        assert_eq!(board.label((1, 1)), Some("X"));
    }

    #[test]
    fn test_clear_restores_empty_cells() {
        let mut board = Board::new(2);
        for (row, col) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
            board.set(Move::new(row, col, "O".to_string())).unwrap();
        }
        assert!(board.is_full());

        board.clear();
        assert!(!board.is_full());
        assert_eq!(board, Board::new(2));
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(3);
        board.set(Move::new(0, 0, "X".to_string())).unwrap();
        board.set(Move::new(1, 1, "O".to_string())).unwrap();
        assert_eq!(board.to_string(), "X|.|.\n-+-+-\n.|O|.\n-+-+-\n.|.|.");
    }
}
