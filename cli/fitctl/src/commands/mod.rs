//! CLI commands.

mod auth;
mod context;
mod leaderboard;
mod push;
mod stats;
mod tutorials;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::client::ApiClient;
use crate::config::Config;
use crate::output::OutputFormat;

/// FitTrack CLI - Track workouts and climb the leaderboard.
#[derive(Debug, Parser)]
#[command(name = "fit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, default_value = "table")]
    format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Manage the session (register, login, logout, whoami).
    Auth(auth::AuthCommand),

    /// View the leaderboard and ranks.
    Leaderboard(leaderboard::LeaderboardCommand),

    /// Browse exercise tutorials.
    Tutorials(tutorials::TutorialsCommand),

    /// Show the signed-in participant's progress.
    Stats(stats::StatsCommand),

    /// Submit a raw producer event frame (testing aid).
    Push(push::PushCommand),

    /// Show or change saved CLI settings.
    Context(context::ContextCommand),
}

/// Shared state handed to every command.
pub struct CommandContext {
    pub client: ApiClient,
    pub format: OutputFormat,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let format = OutputFormat::parse(&self.format)?;

        // Context commands work offline; everything else needs a client.
        match self.command {
            Commands::Context(cmd) => cmd.run().await,
            command => {
                let config = Config::load()?;
                let ctx = CommandContext {
                    client: ApiClient::new(&config)?,
                    format,
                };

                match command {
                    Commands::Auth(cmd) => cmd.run(ctx).await,
                    Commands::Leaderboard(cmd) => cmd.run(ctx).await,
                    Commands::Tutorials(cmd) => cmd.run(ctx).await,
                    Commands::Stats(cmd) => cmd.run(ctx).await,
                    Commands::Push(cmd) => cmd.run(ctx).await,
                    Commands::Context(_) => unreachable!("handled above"),
                }
            }
        }
    }
}
