//! Tutorial catalog commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::output::print_output;

use super::CommandContext;

/// Tutorial commands.
#[derive(Debug, Args)]
pub struct TutorialsCommand {
    #[command(subcommand)]
    command: Option<TutorialsSubcommand>,
}

#[derive(Debug, Subcommand)]
enum TutorialsSubcommand {
    /// List tutorials (default).
    List(ListArgs),
}

#[derive(Debug, Args, Default)]
struct ListArgs {
    /// Filter by category (squats, pushups, biceps).
    #[arg(long)]
    category: Option<String>,
}

/// Tutorial list response from the API.
#[derive(Debug, Deserialize)]
struct ListTutorialsResponse {
    items: Vec<TutorialRow>,
}

#[derive(Debug, Serialize, Deserialize, Tabled)]
struct TutorialRow {
    #[tabled(rename = "Title")]
    title: String,

    #[tabled(rename = "Category")]
    category: String,

    #[tabled(rename = "Level")]
    level: String,

    #[tabled(rename = "Duration")]
    duration: String,

    #[tabled(rename = "Video")]
    video_url: String,
}

impl TutorialsCommand {
    pub async fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command.unwrap_or(TutorialsSubcommand::List(ListArgs::default())) {
            TutorialsSubcommand::List(args) => list(ctx, args).await,
        }
    }
}

async fn list(ctx: CommandContext, args: ListArgs) -> Result<()> {
    let path = match &args.category {
        Some(category) => format!("/v1/tutorials?category={category}"),
        None => "/v1/tutorials".to_string(),
    };

    let tutorials: ListTutorialsResponse = ctx.client.get(&path).await?;
    print_output(&tutorials.items, ctx.format);
    Ok(())
}
