//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use super::rest::{chat, faq};
use super::state::{AppState, MAX_REQUEST_BODY_BYTES};

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // REST API endpoints
        .route("/api/faq/match", get(faq::match_faqs))
        .route("/api/faq/stats", get(faq::get_stats))
        .route("/api/faq/reload", post(faq::reload))
        .route("/api/chat", post(chat::chat))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::state::MAX_MESSAGE_CHARS;
    use crate::chatbot::ChatResponder;
    use crate::matcher::{FaqMatcher, MatcherConfig};
    use crate::store::{InMemoryFaqStore, MemoryAnalyticsSink};
    use crate::types::FaqRecord;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use tower::util::ServiceExt;

    fn test_state() -> (Arc<AppState>, Arc<InMemoryFaqStore>) {
        let store = Arc::new(InMemoryFaqStore::new(vec![
            FaqRecord::new("pay", "Apa metode pembayaran yang tersedia?", "Transfer bank."),
            FaqRecord::new("sell", "Bagaimana cara menjual produk?", "Klik tombol jual."),
        ]));
        let config = MatcherConfig::default().with_detached_analytics(false);
        let matcher = Arc::new(FaqMatcher::with_config(
            store.clone(),
            Arc::new(MemoryAnalyticsSink::new()),
            config,
        ));
        let responder = Arc::new(ChatResponder::new(matcher.clone(), None));
        (Arc::new(AppState::new(matcher, responder)), store)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let (state, _) = test_state();
        let app = create_router(state);

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn test_match_endpoint() {
        let (state, _) = test_state();
        let app = create_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/faq/match?q=cara%20jual%20barang&limit=3")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["total"], 1);
        assert_eq!(json["data"][0]["id"], "sell");
        assert_eq!(json["data"][0]["matchType"], "keyword");
    }

    #[tokio::test]
    async fn test_match_requires_query() {
        let (state, _) = test_state();
        let app = create_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/faq/match?q=%20%20")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_match_without_query_parameter() {
        let (state, _) = test_state();
        let app = create_router(state);

        let response = app
            .oneshot(Request::builder().uri("/api/faq/match").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_long_query_is_truncated() {
        let store = Arc::new(InMemoryFaqStore::new(vec![FaqRecord::new(
            "pay",
            "Apa metode pembayaran yang tersedia?",
            "Transfer bank.",
        )]));
        let sink = Arc::new(MemoryAnalyticsSink::new());
        let config = MatcherConfig::default().with_detached_analytics(false);
        let matcher = Arc::new(FaqMatcher::with_config(store, sink.clone(), config));
        let responder = Arc::new(ChatResponder::new(matcher.clone(), None));
        let app = create_router(Arc::new(AppState::new(matcher, responder)));

        let uri = format!("/api/faq/match?q=metode%20pembayaran{}", "%20x".repeat(3000));
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["data"][0]["id"], "pay");
        assert_eq!(sink.events()[0].message_length, Some(MAX_MESSAGE_CHARS));
    }

    #[tokio::test]
    async fn test_oversized_chat_body_rejected() {
        let (state, _) = test_state();
        let app = create_router(state);

        let body = format!(r#"{{"message":"{}"}}"#, "a".repeat(MAX_REQUEST_BODY_BYTES));
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/chat")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_reload_and_stats() {
        let (state, store) = test_state();
        let app = create_router(state);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/faq/reload")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(body_json(response).await["data"]["entryCount"], 2);

        store.replace(vec![FaqRecord::new("only", "Satu-satunya?", "Ya.")]);
        app.clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/faq/reload")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let response = app
            .oneshot(Request::builder().uri("/api/faq/stats").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(body_json(response).await["data"]["entryCount"], 1);
    }

    #[tokio::test]
    async fn test_chat_endpoint() {
        let (state, _) = test_state();
        let app = create_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/chat")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"message":"metode pembayaran"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["answer"], "Transfer bank.");
        assert_eq!(json["data"]["source"]["kind"], "faq");
        assert_eq!(json["data"]["source"]["id"], "pay");
    }
}
