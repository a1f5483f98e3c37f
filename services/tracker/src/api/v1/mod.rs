//! API v1 routes.

mod auth;
mod events;
mod leaderboard;
mod stats;
mod tutorials;

use axum::Router;

use crate::state::AppState;

/// Create API v1 routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::routes())
        .nest("/events", events::routes())
        .nest("/leaderboard", leaderboard::routes())
        .nest("/stats", stats::routes())
        .nest("/tutorials", tutorials::routes())
}
