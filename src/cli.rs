//! Command-line interface for tictactoe.

use crate::config::{ConfigError, GameConfig};
use clap::Parser;
use std::path::PathBuf;
use tictactoe_engine::ResetPolicy;
use tracing::instrument;

/// Tic-Tac-Toe - two players, one terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Name of the first player
    #[arg(long)]
    pub player1: Option<String>,

    /// Name of the second player
    #[arg(long)]
    pub player2: Option<String>,

    /// Rows and columns of the board
    #[arg(short, long)]
    pub board_size: Option<usize>,

    /// Who starts after "play again": advance or restart
    #[arg(long)]
    pub reset_policy: Option<ResetPolicy>,

    /// Skip the name entry screen
    #[arg(long)]
    pub skip_names: bool,

    /// Where to write logs
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Loads the config file (or defaults) and applies command-line overrides.
    #[instrument(skip(self))]
    pub fn load_config(&self) -> Result<GameConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };

        let names = [self.player1.clone(), self.player2.clone()].map(Option::unwrap_or_default);
        config.rename_players(&names);
        if let Some(size) = self.board_size {
            config.set_board_size(size);
        }
        if let Some(policy) = self.reset_policy {
            config.set_reset_policy(policy);
        }
        if let Some(log_file) = &self.log_file {
            config.set_log_file(log_file.clone());
        }
        Ok(config)
    }
}
