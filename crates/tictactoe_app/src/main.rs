//! Tic-tac-toe - unified CLI.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_app::{AppConfig, Cli, Command, logging, run_replay, run_tui};
use tictactoe_core::Order;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, ascending } => {
            let mut config = AppConfig::load_or_default(&config)
                .with_context(|| format!("Failed to load {}", config.display()))?;
            if ascending {
                config = config.with_ascending(true);
            }
            logging::init_file_logging(config.log_file(), config.log_filter())?;
            info!(?config, "Configuration resolved");
            run_tui(&config)
        }
        Command::Replay {
            cells,
            step,
            ascending,
            log_filter,
        } => {
            logging::init_stderr_logging(&log_filter);
            let view = run_replay(&cells, step, Order::from_ascending(ascending))?;
            println!("{}", serde_json::to_string_pretty(&view)?);
            Ok(())
        }
    }
}
