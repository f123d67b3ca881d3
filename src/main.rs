//! Tic-tac-toe - terminal entry point.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tictactoe::{Cli, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.load_config()?;

    initialize_tracing(config.log_file())?;
    info!(
        board_size = config.board_size(),
        reset_policy = %config.reset_policy(),
        "Configuration ready"
    );

    run_tui(config, cli.skip_names)
}

/// Sends logs to a file so they do not interfere with the TUI.
#[instrument]
fn initialize_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tictactoe=debug,tictactoe_engine=debug")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
