//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tictactoe_engine::{BOARD_SIZE, GameEngine, InvalidConfigError, Player, PlayerColor, ResetPolicy};
use tracing::{debug, info, instrument};

/// One player as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerEntry {
    /// Display name.
    name: String,
    /// Board mark, a single character.
    label: String,
    /// Colour name, e.g. `"blue"`.
    #[serde(default = "default_color")]
    color: String,
}

#[instrument]
fn default_color() -> String {
    PlayerColor::default().to_string()
}

impl PlayerEntry {
    /// Creates a new player entry.
    pub fn new(name: impl Into<String>, label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            color: color.into(),
        }
    }

    /// Converts the entry into an engine player.
    #[instrument(skip(self), fields(name = %self.name))]
    pub fn to_player(&self) -> Result<Player, ConfigError> {
        let color = PlayerColor::from_str(&self.color)
            .map_err(|_| ConfigError::new(format!("Unknown colour {:?}", self.color)))?;
        Ok(Player::new(self.name.clone(), self.label.clone(), color))
    }
}

/// Settings for a game session.
///
/// Every key is optional; missing keys take the defaults of the classic
/// game: X in blue against O in green on a 3×3 board.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Rows and columns of the board.
    board_size: usize,
    /// Who starts after "play again".
    reset_policy: ResetPolicy,
    /// Where tracing output is written.
    log_file: PathBuf,
    /// Players in turn order.
    players: Vec<PlayerEntry>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            reset_policy: ResetPolicy::default(),
            log_file: PathBuf::from("tictactoe.log"),
            players: vec![
                PlayerEntry::new("Player 1", "X", "blue"),
                PlayerEntry::new("Player 2", "O", "green"),
            ],
        }
    }
}

impl GameConfig {
    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(
            board_size = config.board_size,
            players = config.players.len(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Sets the board size.
    pub fn set_board_size(&mut self, board_size: usize) {
        self.board_size = board_size;
    }

    /// Sets the reset policy.
    pub fn set_reset_policy(&mut self, reset_policy: ResetPolicy) {
        self.reset_policy = reset_policy;
    }

    /// Sets the log file path.
    pub fn set_log_file(&mut self, log_file: PathBuf) {
        self.log_file = log_file;
    }

    /// Replaces player names in turn order.
    ///
    /// Blank names keep the configured name; extra names are ignored.
    #[instrument(skip(self))]
    pub fn rename_players(&mut self, names: &[String]) {
        for (entry, name) in self.players.iter_mut().zip(names) {
            let name = name.trim();
            if !name.is_empty() {
                entry.name = name.to_string();
            }
        }
    }

    /// Builds a game engine from these settings.
    #[instrument(skip(self))]
    pub fn build_engine(&self) -> Result<GameEngine, ConfigError> {
        let players = self
            .players
            .iter()
            .map(PlayerEntry::to_player)
            .collect::<Result<Vec<_>, _>>()?;
        let engine = GameEngine::new(players, self.board_size)?.with_reset_policy(self.reset_policy);
        Ok(engine)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<InvalidConfigError> for ConfigError {
    #[track_caller]
    fn from(err: InvalidConfigError) -> Self {
        Self::new(err.kind.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_game() {
        let config = GameConfig::default();
        let engine = config.build_engine().unwrap();
        assert_eq!(engine.board_size(), 3);
        assert_eq!(engine.players()[0].label(), "X");
        assert_eq!(*engine.players()[0].color(), PlayerColor::Blue);
        assert_eq!(engine.players()[1].label(), "O");
        assert_eq!(*engine.players()[1].color(), PlayerColor::Green);
        assert_eq!(engine.reset_policy(), ResetPolicy::Advance);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GameConfig::from_toml("board_size = 4\nreset_policy = \"restart\"").unwrap();
        assert_eq!(*config.board_size(), 4);
        assert_eq!(*config.reset_policy(), ResetPolicy::Restart);
        assert_eq!(config.players().len(), 2);
        assert_eq!(config.log_file(), &PathBuf::from("tictactoe.log"));
    }

    #[test]
    fn test_rename_skips_blank_names() {
        let mut config = GameConfig::default();
        config.rename_players(&["  Ana ".to_string(), "   ".to_string()]);
        assert_eq!(config.players()[0].name(), "Ana");
        assert_eq!(config.players()[1].name(), "Player 2");
    }

    #[test]
    fn test_unknown_colour_is_config_error() {
        let entry = PlayerEntry::new("Ana", "X", "chartreuse");
        let err = entry.to_player().unwrap_err();
        assert!(err.message.contains("chartreuse"));
    }

    #[test]
    fn test_engine_errors_become_config_errors() {
        let mut config = GameConfig::default();
        config.set_board_size(0);
        let err = config.build_engine().unwrap_err();
        assert_eq!(err.message, "board size must be at least 1");
    }
}
