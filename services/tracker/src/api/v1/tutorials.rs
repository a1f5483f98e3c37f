//! Tutorial catalog endpoints.

use axum::{extract::Query, response::IntoResponse, routing::get, Json, Router};
use fittrack_id::RequestId;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::state::AppState;
use crate::tutorials::{self, Category, Tutorial};

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(list_tutorials))
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Optional category slug (squats, pushups, biceps).
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ListTutorialsResponse {
    pub items: Vec<&'static Tutorial>,
    pub total: usize,
}

/// The tutorial catalog, optionally filtered by category.
///
/// GET /v1/tutorials?category=squats
async fn list_tutorials(Query(query): Query<ListQuery>) -> Result<impl IntoResponse, ApiError> {
    let request_id = RequestId::new();

    let items: Vec<&'static Tutorial> = match query.category.as_deref() {
        None => tutorials::catalog().iter().collect(),
        Some(slug) => {
            let category = Category::parse(slug).ok_or_else(|| {
                ApiError::bad_request("unknown_category", format!("'{slug}' is not a category"))
                    .with_request_id(request_id.to_string())
            })?;
            tutorials::by_category(category)
        }
    };

    let total = items.len();
    Ok(Json(ListTutorialsResponse { items, total }))
}
