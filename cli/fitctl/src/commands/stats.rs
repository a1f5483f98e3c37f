//! Progress stats command.

use anyhow::Result;
use clap::Args;
use serde::{Deserialize, Serialize};

use crate::output::print_single;

use super::CommandContext;

/// Show the signed-in participant's progress.
#[derive(Debug, Args)]
pub struct StatsCommand {}

/// Stats response from the API.
#[derive(Debug, Serialize, Deserialize)]
struct StatsResponse {
    username: String,
    level: u32,
    xp: u64,
    xp_for_next_level: u64,
    progress_percent: f64,
    exercises_today: u32,
    #[serde(default)]
    rank: Option<usize>,
}

impl StatsCommand {
    pub async fn run(self, ctx: CommandContext) -> Result<()> {
        let stats: StatsResponse = ctx.client.get("/v1/stats").await?;
        print_single(&stats);
        Ok(())
    }
}
