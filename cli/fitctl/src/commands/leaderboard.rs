//! Leaderboard commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::output::{print_info, print_output, print_success};

use super::CommandContext;

/// Leaderboard commands.
#[derive(Debug, Args)]
pub struct LeaderboardCommand {
    #[command(subcommand)]
    command: Option<LeaderboardSubcommand>,
}

#[derive(Debug, Subcommand)]
enum LeaderboardSubcommand {
    /// List the full board (default).
    List,

    /// Look up one participant's rank.
    Rank(RankArgs),
}

#[derive(Debug, Args)]
struct RankArgs {
    /// Display name to look up.
    username: String,
}

/// Leaderboard response from the API.
#[derive(Debug, Deserialize)]
struct LeaderboardResponse {
    items: Vec<EntryRow>,
    #[serde(default)]
    your_rank: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize, Tabled)]
struct EntryRow {
    #[tabled(rename = "Rank")]
    rank: usize,

    #[tabled(rename = "Username")]
    username: String,

    #[tabled(rename = "Level")]
    level: u32,

    #[tabled(rename = "XP")]
    xp: u64,
}

#[derive(Debug, Serialize, Deserialize)]
struct RankResponse {
    username: String,
    rank: usize,
}

impl LeaderboardCommand {
    pub async fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command.unwrap_or(LeaderboardSubcommand::List) {
            LeaderboardSubcommand::List => list(ctx).await,
            LeaderboardSubcommand::Rank(args) => rank(ctx, args).await,
        }
    }
}

async fn list(ctx: CommandContext) -> Result<()> {
    let board: LeaderboardResponse = ctx.client.get("/v1/leaderboard").await?;

    print_output(&board.items, ctx.format);
    if let Some(your_rank) = board.your_rank {
        print_info(&format!("Your rank: #{your_rank}"));
    }
    Ok(())
}

async fn rank(ctx: CommandContext, args: RankArgs) -> Result<()> {
    let path = format!("/v1/leaderboard/rank/{}", args.username);
    let rank: RankResponse = ctx.client.get(&path).await?;

    print_success(&format!("{} is rank #{}", rank.username, rank.rank));
    Ok(())
}
