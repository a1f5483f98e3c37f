//! Producer event injection.
//!
//! Lets an operator replay or hand-craft the frames the exercise detector
//! would emit, straight into the tracker's intake endpoint.

use std::fs;
use std::io::Read;

use anyhow::{Context, Result};
use clap::Args;
use serde::Deserialize;

use crate::output::print_success;

use super::CommandContext;

/// Submit a raw producer event frame.
#[derive(Debug, Args)]
pub struct PushCommand {
    /// Path to a JSON frame file, or '-' for stdin.
    #[arg(long, default_value = "-")]
    file: String,
}

#[derive(Debug, Deserialize)]
struct AcceptedResponse {
    event: String,
}

impl PushCommand {
    pub async fn run(self, ctx: CommandContext) -> Result<()> {
        let raw = if self.file == "-" {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read frame from stdin")?;
            buf
        } else {
            fs::read_to_string(&self.file)
                .with_context(|| format!("Failed to read frame file: {}", self.file))?
        };

        let frame: serde_json::Value =
            serde_json::from_str(&raw).context("Frame is not valid JSON")?;

        let accepted: AcceptedResponse = ctx.client.post("/v1/events", &frame).await?;
        print_success(&format!("Applied {} event", accepted.event));
        Ok(())
    }
}
