//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tictactoe_engine::Coord;

/// Moves the cursor with arrow keys or `hjkl`, staying on a `size`×`size` board.
///
/// Other keys leave the cursor where it is.
pub fn move_cursor((row, col): Coord, key: KeyCode, size: usize) -> Coord {
    let last = size.saturating_sub(1);
    match key {
        KeyCode::Up | KeyCode::Char('k') => (row.saturating_sub(1), col),
        KeyCode::Down | KeyCode::Char('j') => ((row + 1).min(last), col),
        KeyCode::Left | KeyCode::Char('h') => (row, col.saturating_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => (row, (col + 1).min(last)),
        _ => (row, col),
    }
}

/// Maps a digit key to a cell on boards of up to 3×3, numbered 1-9 row by row.
pub fn digit_to_cell(c: char, size: usize) -> Option<Coord> {
    if size > 3 {
        return None;
    }
    let digit = c.to_digit(10)? as usize;
    let index = digit.checked_sub(1)?;
    (index < size * size).then(|| (index / size, index % size))
}
