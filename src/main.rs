//! Tic-tac-toe with time travel - command-line entry point.

use anyhow::{Context, Result};
use clap::Parser;
use timetravel_tictactoe::{Cli, Command, SessionConfig, render_text, replay, run_tui};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config } => {
            let config = SessionConfig::load(config.as_deref())?;
            run_tui(&config)
        }
        Command::Replay {
            moves,
            jump,
            toggle_order,
            json,
        } => run_replay(moves, jump, toggle_order, json),
    }
}

/// Replays moves and prints the resulting view to stdout.
fn run_replay(moves: Vec<usize>, jump: Option<usize>, toggle_order: bool, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(count = moves.len(), "Replaying moves");
    let session = replay(&moves, jump, toggle_order).context("Replay failed")?;
    let view = session.view_state().context("Failed to build view")?;
    debug!(status = %view.status(), "View built");

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render_text(&view));
    }
    Ok(())
}
