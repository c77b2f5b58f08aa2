//! Shared application state for HTTP handlers

use std::sync::Arc;

use crate::chatbot::ChatResponder;
use crate::matcher::FaqMatcher;

/// Maximum `limit` accepted by the match endpoint
pub const MAX_MATCH_LIMIT: usize = 50;

/// Queries and chat messages are cut to this many characters
pub const MAX_MESSAGE_CHARS: usize = 2000;

/// Request bodies larger than this are rejected with 413
pub const MAX_REQUEST_BODY_BYTES: usize = 64 * 1024;

pub struct AppState {
    pub matcher: Arc<FaqMatcher>,
    pub responder: Arc<ChatResponder>,
}

impl AppState {
    pub fn new(matcher: Arc<FaqMatcher>, responder: Arc<ChatResponder>) -> Self {
        Self { matcher, responder }
    }
}
