//! Progress figures for the signed-in participant.

use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use fittrack_id::RequestId;
use fittrack_scoreboard::progress;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(get_stats))
}

/// Dashboard figures: where the participant stands on the level curve.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub username: String,
    pub level: u32,
    pub xp: u64,
    pub xp_for_next_level: u64,
    pub progress_percent: f64,
    pub exercises_today: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<usize>,
}

/// The signed-in participant's stats.
///
/// GET /v1/stats
async fn get_stats(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let request_id = RequestId::new();

    let tracker = state.tracker().await;
    let profile = tracker.profile().ok_or_else(|| {
        ApiError::unauthorized("not_signed_in", "No active session")
            .with_request_id(request_id.to_string())
    })?;

    Ok(Json(StatsResponse {
        username: profile.username.clone(),
        level: profile.level,
        xp: profile.xp,
        xp_for_next_level: progress::xp_for_next_level(profile.level),
        progress_percent: progress::progress_percent(profile.xp, profile.level),
        exercises_today: profile.exercises_today,
        rank: tracker.board().rank_of(&profile.username),
    }))
}
