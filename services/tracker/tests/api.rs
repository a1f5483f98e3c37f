//! End-to-end API tests over an in-process router.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use fittrack_tracker::api;
use fittrack_tracker::state::{AppState, Tracker};
use fittrack_tracker::store::SnapshotStore;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

fn test_app() -> (TempDir, Router) {
    let dir = tempfile::tempdir().unwrap();
    let app = app_over(&dir);
    (dir, app)
}

fn app_over(dir: &TempDir) -> Router {
    let store = SnapshotStore::new(dir.path().to_path_buf());
    let state = AppState::new(Tracker::bootstrap(store));
    api::create_router(state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

async fn login(app: &Router, email: &str) -> Value {
    let (status, body) = post(
        app,
        "/v1/auth/login",
        json!({ "email": email, "password": "correcthorse" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body
}

#[tokio::test]
async fn healthz_reports_ok() {
    let (_dir, app) = test_app();
    let (status, body) = get(&app, "/healthz").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "tracker");
}

#[tokio::test]
async fn leaderboard_starts_from_seed_list() {
    let (_dir, app) = test_app();
    let (status, body) = get(&app, "/v1/leaderboard").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 10);
    assert_eq!(body["items"][0]["rank"], 1);
    assert_eq!(body["items"][0]["username"], "fitness_pro");
    assert_eq!(body["items"][9]["username"], "active_achiever");
    assert!(body.get("your_rank").is_none());
}

#[tokio::test]
async fn login_folds_participant_into_board() {
    let (_dir, app) = test_app();
    let profile = login(&app, "rookie@example.com").await;
    assert_eq!(profile["username"], "rookie");
    assert_eq!(profile["level"], 1);

    let (_, board) = get(&app, "/v1/leaderboard").await;
    assert_eq!(board["total"], 11);
    assert_eq!(board["your_rank"], 11);

    let (status, whoami) = get(&app, "/v1/auth/whoami").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(whoami["username"], "rookie");
}

#[tokio::test]
async fn producer_event_reranks_the_board() {
    let (_dir, app) = test_app();

    let (status, body) = post(
        &app,
        "/v1/events",
        json!({
            "type": "updateLeaderboard",
            "data": { "username": "newuser", "xp": 5000, "level": 12 }
        }),
    )
    .await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body["accepted"], true);

    let (status, rank) = get(&app, "/v1/leaderboard/rank/newuser").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rank["rank"], 6);
}

#[tokio::test]
async fn malformed_event_is_rejected_without_touching_the_board() {
    let (_dir, app) = test_app();

    let (status, body) = post(
        &app,
        "/v1/events",
        json!({
            "type": "updateLeaderboard",
            "data": { "username": "newuser", "level": 12 }
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_payload");

    let (_, board) = get(&app, "/v1/leaderboard").await;
    assert_eq!(board["total"], 10);
}

#[tokio::test]
async fn unknown_event_type_is_rejected() {
    let (_dir, app) = test_app();

    let (status, body) = post(
        &app,
        "/v1/events",
        json!({ "type": "somethingElse", "data": {} }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "unknown_event_type");
}

#[tokio::test]
async fn workout_progress_updates_the_session_profile() {
    let (_dir, app) = test_app();
    login(&app, "lifter@example.com").await;

    let (status, _) = post(
        &app,
        "/v1/events",
        json!({
            "type": "exerciseData",
            "data": {
                "exerciseType": "squat",
                "reps": 15,
                "xp": 6000,
                "level": 13,
                "exercisesToday": 2,
                "formQuality": { "good": 12, "poor": 3 },
                "formFeedback": "Keep weight in your heels"
            }
        }),
    )
    .await;
    assert_eq!(status, StatusCode::ACCEPTED);

    let (_, stats) = get(&app, "/v1/stats").await;
    assert_eq!(stats["xp"], 6000);
    assert_eq!(stats["level"], 13);
    assert_eq!(stats["exercises_today"], 2);
    assert_eq!(stats["rank"], 5);
}

#[tokio::test]
async fn rank_of_unknown_username_is_not_found() {
    let (_dir, app) = test_app();
    let (status, body) = get(&app, "/v1/leaderboard/rank/nobody").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "unknown_username");
}

#[tokio::test]
async fn tutorials_list_and_filter() {
    let (_dir, app) = test_app();

    let (status, all) = get(&app, "/v1/tutorials").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all["total"], 6);

    let (_, squats) = get(&app, "/v1/tutorials?category=squats").await;
    assert_eq!(squats["total"], 2);
    assert_eq!(squats["items"][0]["title"], "Perfect Squat Form");

    let (status, body) = get(&app, "/v1/tutorials?category=deadlifts").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "unknown_category");
}

#[tokio::test]
async fn stats_requires_a_session() {
    let (_dir, app) = test_app();
    let (status, body) = get(&app, "/v1/stats").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "not_signed_in");
}

#[tokio::test]
async fn fresh_login_sits_at_the_start_of_the_level_curve() {
    let (_dir, app) = test_app();
    login(&app, "rookie@example.com").await;

    let (_, stats) = get(&app, "/v1/stats").await;
    assert_eq!(stats["level"], 1);
    assert_eq!(stats["xp"], 0);
    assert_eq!(stats["xp_for_next_level"], 150);
    assert_eq!(stats["progress_percent"], 0.0);
}

#[tokio::test]
async fn register_validates_credentials() {
    let (_dir, app) = test_app();

    let (status, body) = post(
        &app,
        "/v1/auth/register",
        json!({ "username": "ok", "email": "ok@example.com", "password": "short" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_password");

    let (status, _) = post(
        &app,
        "/v1/auth/register",
        json!({ "username": "ok", "email": "ok@example.com", "password": "longenough" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn logout_ends_the_session_but_keeps_the_entry() {
    let (_dir, app) = test_app();
    login(&app, "rookie@example.com").await;

    let (status, _) = post(&app, "/v1/auth/logout", json!({})).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = get(&app, "/v1/auth/whoami").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (_, board) = get(&app, "/v1/leaderboard").await;
    assert_eq!(board["total"], 11);
    assert!(board.get("your_rank").is_none());
}

#[tokio::test]
async fn board_survives_a_restart() {
    let (dir, app) = test_app();

    post(
        &app,
        "/v1/events",
        json!({
            "type": "updateLeaderboard",
            "data": { "username": "newuser", "xp": 5000, "level": 12 }
        }),
    )
    .await;
    drop(app);

    let app = app_over(&dir);
    let (_, rank) = get(&app, "/v1/leaderboard/rank/newuser").await;
    assert_eq!(rank["rank"], 6);
}
