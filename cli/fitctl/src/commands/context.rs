//! Saved CLI settings.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::config::Config;
use crate::output::{print_single, print_success};

/// Saved CLI settings.
#[derive(Debug, Args)]
pub struct ContextCommand {
    #[command(subcommand)]
    command: ContextSubcommand,
}

#[derive(Debug, Subcommand)]
enum ContextSubcommand {
    /// Show the current settings.
    Show,

    /// Set the tracker API endpoint.
    SetUrl(SetUrlArgs),

    /// Remove saved settings, reverting to defaults.
    Clear,
}

#[derive(Debug, Args)]
struct SetUrlArgs {
    /// Tracker base URL (example: http://127.0.0.1:8080).
    url: String,
}

impl ContextCommand {
    pub async fn run(self) -> Result<()> {
        match self.command {
            ContextSubcommand::Show => {
                let config = Config::load()?;
                print_single(&config);
                Ok(())
            }
            ContextSubcommand::SetUrl(args) => {
                let mut config = Config::load()?;
                config.api_url = args.url.trim_end_matches('/').to_string();
                config.save()?;
                print_success(&format!("API endpoint set to {}", config.api_url));
                Ok(())
            }
            ContextSubcommand::Clear => {
                Config::clear()?;
                print_success("Settings cleared");
                Ok(())
            }
        }
    }
}
