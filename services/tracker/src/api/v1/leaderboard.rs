//! Leaderboard endpoints.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use fittrack_id::RequestId;
use fittrack_scoreboard::{ScoreEntry, Scoreboard};
use serde::Serialize;

use crate::api::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_leaderboard))
        .route("/rank/{username}", get(get_rank))
}

// =============================================================================
// Request/Response Types
// =============================================================================

/// One ranked entry.
#[derive(Debug, Serialize)]
pub struct EntryResponse {
    pub rank: usize,
    pub id: String,
    pub username: String,
    pub xp: u64,
    pub level: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl EntryResponse {
    fn new(rank: usize, entry: &ScoreEntry) -> Self {
        Self {
            rank,
            id: entry.id.clone(),
            username: entry.username.clone(),
            xp: entry.xp,
            level: entry.level,
            avatar: entry.avatar.clone(),
        }
    }
}

/// The full board in rank order.
#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub items: Vec<EntryResponse>,
    pub total: usize,
    /// The signed-in participant's rank, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub your_rank: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub username: String,
    pub rank: usize,
}

fn board_response(board: &Scoreboard, your_rank: Option<usize>) -> LeaderboardResponse {
    LeaderboardResponse {
        items: board
            .entries()
            .iter()
            .enumerate()
            .map(|(i, entry)| EntryResponse::new(i + 1, entry))
            .collect(),
        total: board.len(),
        your_rank,
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// The current board.
///
/// GET /v1/leaderboard
async fn get_leaderboard(State(state): State<AppState>) -> impl IntoResponse {
    let tracker = state.tracker().await;
    let your_rank = tracker
        .profile()
        .and_then(|p| tracker.board().rank_of(&p.username));

    Json(board_response(tracker.board(), your_rank))
}

/// A single participant's rank.
///
/// GET /v1/leaderboard/rank/{username}
async fn get_rank(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let request_id = RequestId::new();

    let tracker = state.tracker().await;
    let rank = tracker.board().rank_of(&username).ok_or_else(|| {
        ApiError::not_found("unknown_username", format!("'{username}' is not on the board"))
            .with_request_id(request_id.to_string())
    })?;

    Ok(Json(RankResponse { username, rank }))
}
