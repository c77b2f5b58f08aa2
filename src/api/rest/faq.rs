//! FAQ matching endpoints

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use super::{truncate_chars, ApiError, ApiResponse};
use crate::api::state::{AppState, MAX_MATCH_LIMIT, MAX_MESSAGE_CHARS};

/// Query parameters for matching
#[derive(Debug, Deserialize)]
pub struct MatchParams {
    /// Free text query; a missing parameter is treated as blank
    #[serde(default)]
    pub q: String,
    /// Maximum number of matches; the matcher default when absent
    pub limit: Option<usize>,
}

/// GET /api/faq/match - Score a query against the knowledge base
pub async fn match_faqs(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MatchParams>,
) -> impl IntoResponse {
    if params.q.trim().is_empty() {
        let error = ApiError::bad_request("Query parameter 'q' is required");
        return (StatusCode::BAD_REQUEST, Json(error)).into_response();
    }

    let limit = params
        .limit
        .unwrap_or(state.matcher.config().default_limit)
        .min(MAX_MATCH_LIMIT);

    let query = truncate_chars(&params.q, MAX_MESSAGE_CHARS);
    let matches = state.matcher.find_matches(query, limit).await;
    let total = matches.len();
    (StatusCode::OK, Json(ApiResponse::with_total(matches, total))).into_response()
}

/// GET /api/faq/stats - Statistics of the loaded knowledge base
pub async fn get_stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiResponse::new(state.matcher.stats()))
}

/// POST /api/faq/reload - Reload the knowledge base from the store
pub async fn reload(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiResponse::new(state.matcher.load_faqs().await))
}
