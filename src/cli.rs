//! Command-line interface for timetravel_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "timetravel_tictactoe")]
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
    /// Play interactively in the terminal
    Play {
        /// Path to a TOML session config
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Play a fixed sequence of moves and print the resulting view
    Replay {
        /// Square indices (0-8, row-major), comma separated
        #[arg(short, long, value_delimiter = ',')]
        moves: Vec<usize>,

        /// Jump to this move after replaying
        #[arg(short, long)]
        jump: Option<usize>,

        /// List moves newest first
        #[arg(long)]
        toggle_order: bool,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
}
