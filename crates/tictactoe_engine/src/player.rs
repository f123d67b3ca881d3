//! Player identities.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::instrument;

/// Display colour token attached to a player.
///
/// The engine never interprets colours; front ends map them to whatever
/// their toolkit understands.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PlayerColor {
    /// Black (the colour of an untouched cell).
    #[default]
    Black,
    /// Blue.
    Blue,
    /// Green.
    Green,
    /// Red.
    Red,
    /// Yellow.
    Yellow,
    /// Magenta.
    Magenta,
    /// Cyan.
    Cyan,
    /// White.
    White,
}

/// A participant in the game.
///
/// Immutable once created; two players are equal when all fields match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Player {
    /// Display name.
    name: String,
    /// Mark placed on the board, e.g. `"X"`.
    label: String,
    /// Colour used when rendering this player's marks.
    color: PlayerColor,
}

impl Player {
    /// Creates a new player.
    #[instrument(skip(name, label))]
    pub fn new(name: impl Into<String>, label: impl Into<String>, color: PlayerColor) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            color,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_color_parses_case_insensitively() {
        assert_eq!(PlayerColor::from_str("Blue"), Ok(PlayerColor::Blue));
        assert_eq!(PlayerColor::from_str("GREEN"), Ok(PlayerColor::Green));
        assert!(PlayerColor::from_str("mauve").is_err());
    }

    #[test]
    fn test_players_compare_structurally() {
        let a = Player::new("Ana", "X", PlayerColor::Blue);
        let b = Player::new(String::from("Ana"), 'X'.to_string(), PlayerColor::Blue);
        assert_eq!(a, b);
        assert_ne!(a, Player::new("Ana", "O", PlayerColor::Blue));
        assert_eq!(a.to_string(), "Ana (X)");
    }
}
