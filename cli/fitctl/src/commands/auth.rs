//! Session commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::{Deserialize, Serialize};

use crate::output::{print_single, print_success};

use super::CommandContext;

/// Session commands.
#[derive(Debug, Args)]
pub struct AuthCommand {
    #[command(subcommand)]
    command: AuthSubcommand,
}

#[derive(Debug, Subcommand)]
enum AuthSubcommand {
    /// Register a new participant and start a session.
    Register(RegisterArgs),

    /// Sign in and start a session.
    Login(LoginArgs),

    /// End the session.
    Logout,

    /// Show the current session's profile.
    Whoami,
}

#[derive(Debug, Args)]
struct RegisterArgs {
    /// Display name shown on the leaderboard.
    username: String,

    /// Email address.
    email: String,

    /// Password (min 8 characters).
    #[arg(long, env = "FIT_PASSWORD")]
    password: String,
}

#[derive(Debug, Args)]
struct LoginArgs {
    /// Email address.
    email: String,

    /// Password (min 8 characters).
    #[arg(long, env = "FIT_PASSWORD")]
    password: String,
}

/// Profile response from the API.
#[derive(Debug, Serialize, Deserialize)]
struct ProfileResponse {
    id: String,
    username: String,
    email: String,
    level: u32,
    xp: u64,
    exercises_today: u32,
    achievements: Vec<String>,
}

impl AuthCommand {
    pub async fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command {
            AuthSubcommand::Register(args) => register(ctx, args).await,
            AuthSubcommand::Login(args) => login(ctx, args).await,
            AuthSubcommand::Logout => logout(ctx).await,
            AuthSubcommand::Whoami => whoami(ctx).await,
        }
    }
}

async fn register(ctx: CommandContext, args: RegisterArgs) -> Result<()> {
    let profile: ProfileResponse = ctx
        .client
        .post(
            "/v1/auth/register",
            &serde_json::json!({
                "username": args.username,
                "email": args.email,
                "password": args.password,
            }),
        )
        .await?;

    print_success(&format!("Registered and signed in as {}", profile.username));
    Ok(())
}

async fn login(ctx: CommandContext, args: LoginArgs) -> Result<()> {
    let profile: ProfileResponse = ctx
        .client
        .post(
            "/v1/auth/login",
            &serde_json::json!({
                "email": args.email,
                "password": args.password,
            }),
        )
        .await?;

    print_success(&format!(
        "Signed in as {} (level {})",
        profile.username, profile.level
    ));
    Ok(())
}

async fn logout(ctx: CommandContext) -> Result<()> {
    ctx.client.post_empty("/v1/auth/logout").await?;
    print_success("Signed out");
    Ok(())
}

async fn whoami(ctx: CommandContext) -> Result<()> {
    let profile: ProfileResponse = ctx.client.get("/v1/auth/whoami").await?;
    print_single(&profile);
    Ok(())
}
