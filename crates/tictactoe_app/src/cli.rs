//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Path to the TOML config file (defaults apply if missing)
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: PathBuf,

        /// List moves oldest first
        #[arg(long)]
        ascending: bool,
    },

    /// Play cells headlessly and print the resulting view as JSON
    Replay {
        /// Cell indices (0-8, row-major), clicked in order
        cells: Vec<usize>,

        /// Step to view after replaying (defaults to the latest)
        #[arg(long)]
        step: Option<usize>,

        /// List moves oldest first
        #[arg(long)]
        ascending: bool,

        /// Log filter used when RUST_LOG is unset
        #[arg(long, default_value = "warn")]
        log_filter: String,
    },
}
