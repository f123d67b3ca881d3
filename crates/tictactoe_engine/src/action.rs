//! Moves as plain values.
//!
//! A move doubles as the content of a board cell: an empty label means the
//! cell at `(row, col)` is unoccupied.

use derive_new::new;
use serde::{Deserialize, Serialize};

/// A `(row, col)` board coordinate.
pub type Coord = (usize, usize);

/// A mark at a board coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, new)]
pub struct Move {
    /// Row index, `0..size`.
    pub row: usize,
    /// Column index, `0..size`.
    pub col: usize,
    /// Label of the player who owns the cell, empty when unoccupied.
    pub label: String,
}

impl Move {
    /// Creates an unoccupied cell at the given coordinate.
    pub fn empty(row: usize, col: usize) -> Self {
        Self::new(row, col, String::new())
    }

    /// Returns true if no player has marked this cell.
    pub fn is_empty(&self) -> bool {
        self.label.is_empty()
    }

    /// Returns the coordinate of this move.
    pub fn coord(&self) -> Coord {
        (self.row, self.col)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            write!(f, "empty ({}, {})", self.row, self.col)
        } else {
            write!(f, "{} -> ({}, {})", self.label, self.row, self.col)
        }
    }
}
