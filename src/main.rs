//! FAQ Server - Binary Entry Point
//!
//! Serves the FAQ matcher and support chatbot over HTTP.

use std::sync::Arc;

use tracing::info;

use faq_matcher::api::{create_router, AppState};
use faq_matcher::chatbot::{ChatResponder, HttpTextGenerator, TextGenerator};
use faq_matcher::config::AppConfig;
use faq_matcher::logging::init_logging;
use faq_matcher::matcher::FaqMatcher;
use faq_matcher::store::{JsonlAnalyticsSink, JsonlFaqStore};
use faq_matcher::Result;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let config = AppConfig::from_env()?;
    info!(
        faq_file = %config.faq_file_path.display(),
        analytics = %config.analytics_path.display(),
        "Starting FAQ server"
    );

    let store = Arc::new(JsonlFaqStore::new(&config.faq_file_path));
    let analytics = Arc::new(JsonlAnalyticsSink::new(&config.analytics_path));
    let matcher = Arc::new(FaqMatcher::with_config(
        store,
        analytics,
        config.matcher_config(),
    ));
    matcher.load_faqs().await;

    let generator: Option<Arc<dyn TextGenerator>> = match &config.llm {
        Some(llm) => {
            info!(endpoint = %llm.endpoint, model = %llm.model, "LLM fallback enabled");
            Some(Arc::new(HttpTextGenerator::new(
                llm.endpoint.clone(),
                llm.model.clone(),
                llm.api_key.clone(),
            )?))
        }
        None => {
            info!("FAQ_LLM_ENDPOINT not set, LLM fallback disabled");
            None
        }
    };

    let responder = Arc::new(
        ChatResponder::new(matcher.clone(), generator)
            .with_confidence_threshold(config.confidence_threshold),
    );

    let state = Arc::new(AppState::new(matcher, responder));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.http_addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down");
        })
        .await?;

    Ok(())
}
