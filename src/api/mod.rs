//! API module for HTTP endpoints
//!
//! This module exposes the matcher and chatbot to the marketplace frontend.

pub mod http;
pub mod rest;
pub mod state;

pub use http::create_router;
pub use state::AppState;
