//! Inbound producer event intake.
//!
//! This is the trust boundary: frames are raw JSON until `decode` accepts
//! them. Rejected frames are logged and dropped; they never touch the board.

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use fittrack_events::EventError;
use fittrack_id::RequestId;
use serde::Serialize;
use tracing::{info, warn};

use crate::api::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", post(submit_event))
}

#[derive(Debug, Serialize)]
pub struct AcceptedResponse {
    pub accepted: bool,
    /// The frame type that was applied.
    pub event: &'static str,
}

fn event_error(err: EventError, request_id: &RequestId) -> ApiError {
    let code = match &err {
        EventError::MissingType => "missing_type",
        EventError::UnknownEventType(_) => "unknown_event_type",
        EventError::InvalidPayload(_) | EventError::Serialization(_) => "invalid_payload",
    };
    ApiError::bad_request(code, err.to_string()).with_request_id(request_id.to_string())
}

/// Accept one producer frame.
///
/// POST /v1/events
async fn submit_event(
    State(state): State<AppState>,
    Json(frame): Json<serde_json::Value>,
) -> Result<impl IntoResponse, ApiError> {
    let request_id = RequestId::new();

    let event = fittrack_events::decode(&frame).map_err(|e| {
        warn!(request_id = %request_id, error = %e, "Rejected inbound frame");
        event_error(e, &request_id)
    })?;

    let frame_type = event.frame_type();
    info!(request_id = %request_id, event = frame_type, "Applying inbound event");

    let mut tracker = state.tracker().await;
    tracker.apply_event(event);

    Ok((
        StatusCode::ACCEPTED,
        Json(AcceptedResponse {
            accepted: true,
            event: frame_type,
        }),
    ))
}
