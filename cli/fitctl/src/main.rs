//! fitctl (fit) - CLI for the FitTrack platform
//!
//! The terminal-side interface to the tracker service: session management,
//! leaderboard views, tutorial browsing, and producer event injection.

use anyhow::Result;
use clap::Parser;

mod client;
mod commands;
mod config;
mod error;
mod output;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Run the command
    if let Err(e) = cli.run().await {
        // Print error in a user-friendly way
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
