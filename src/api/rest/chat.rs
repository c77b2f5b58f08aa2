//! Chatbot endpoint

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;

use super::{truncate_chars, ApiError, ApiResponse};
use crate::api::state::{AppState, MAX_MESSAGE_CHARS};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// POST /api/chat - Answer a user message
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> impl IntoResponse {
    if request.message.trim().is_empty() {
        let error = ApiError::bad_request("Field 'message' must not be empty");
        return (StatusCode::BAD_REQUEST, Json(error)).into_response();
    }

    let message = truncate_chars(&request.message, MAX_MESSAGE_CHARS);
    let reply = state.responder.respond(message).await;
    (StatusCode::OK, Json(ApiResponse::new(reply))).into_response()
}
