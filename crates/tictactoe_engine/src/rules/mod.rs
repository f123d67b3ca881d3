//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). The engine caches the
//! winning combinations once and feeds them back in on every move.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{LineKind, WinningCombo, compute_winning_combos, find_winner};
