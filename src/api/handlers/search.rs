//! Free-text component search handler.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;
use utoipa::IntoParams;

use crate::api::state::AppState;
use crate::errors::{AppError, AppResult};

/// Create search routes
pub fn search_routes() -> Router<AppState> {
    Router::new().route("/", get(search_components))
}

/// Search query parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Name fragment to match case-insensitively
    pub query: Option<String>,
}

/// Search components by name
#[utoipa::path(
    get,
    path = "/search",
    tag = "Search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching components"),
        (status = 400, description = "Missing query parameter")
    )
)]
pub async fn search_components(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<Value>> {
    let query = params
        .query
        .filter(|q| !q.is_empty())
        .ok_or_else(|| AppError::bad_request("Query parameter is required"))?;

    Ok(Json(state.search.components_by_name(&query).await?))
}
