//! Screen implementations.

mod board;
mod name_entry;

pub use board::BoardScreen;
pub use name_entry::NameEntryScreen;
