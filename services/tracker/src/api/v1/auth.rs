//! Authentication and session endpoints.
//!
//! The credential provider behind these is the local mock in
//! `fittrack-session`; the HTTP contract would not change with a real one.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use fittrack_id::RequestId;
use fittrack_session::{Profile, SessionError};
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/whoami", get(whoami))
}

// =============================================================================
// Request/Response Types
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// The signed-in participant, as returned by auth endpoints.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub level: u32,
    pub xp: u64,
    pub exercises_today: u32,
    pub achievements: Vec<String>,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id.to_string(),
            username: profile.username,
            email: profile.email,
            level: profile.level,
            xp: profile.xp,
            exercises_today: profile.exercises_today,
            achievements: profile.achievements,
        }
    }
}

fn session_error(err: SessionError, request_id: &RequestId) -> ApiError {
    let api_error = match &err {
        SessionError::NotSignedIn => ApiError::unauthorized("not_signed_in", err.to_string()),
        SessionError::InvalidUsername(_) => ApiError::bad_request("invalid_username", err.to_string()),
        SessionError::InvalidEmail(_) => ApiError::bad_request("invalid_email", err.to_string()),
        SessionError::InvalidPassword(_) => ApiError::bad_request("invalid_password", err.to_string()),
    };
    api_error.with_request_id(request_id.to_string())
}

// =============================================================================
// Handlers
// =============================================================================

/// Register a new participant and start their session.
///
/// POST /v1/auth/register
async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let request_id = RequestId::new();

    let mut tracker = state.tracker().await;
    let profile = tracker
        .register(&req.username, &req.email, &req.password)
        .map_err(|e| session_error(e, &request_id))?;

    Ok((
        StatusCode::CREATED,
        Json(ProfileResponse::from(profile)),
    ))
}

/// Sign in and start a session.
///
/// POST /v1/auth/login
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let request_id = RequestId::new();

    let mut tracker = state.tracker().await;
    let profile = tracker
        .sign_in(&req.email, &req.password)
        .map_err(|e| session_error(e, &request_id))?;

    Ok(Json(ProfileResponse::from(profile)))
}

/// End the session. Idempotent.
///
/// POST /v1/auth/logout
async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    let mut tracker = state.tracker().await;
    tracker.sign_out();
    StatusCode::NO_CONTENT
}

/// The current session's profile.
///
/// GET /v1/auth/whoami
async fn whoami(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let request_id = RequestId::new();

    let tracker = state.tracker().await;
    let profile = tracker.profile().cloned().ok_or_else(|| {
        ApiError::unauthorized("not_signed_in", "No active session")
            .with_request_id(request_id.to_string())
    })?;

    Ok(Json(ProfileResponse::from(profile)))
}
