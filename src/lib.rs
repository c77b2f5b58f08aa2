//! FAQ Matcher
//!
//! The matching engine behind the marketplace support chatbot. It indexes a
//! small bilingual (Indonesian/English) knowledge base and scores free text
//! questions against it.
//!
//! # Features
//!
//! - **Four strategies**: exact substring, keyword/synonym overlap, fuzzy
//!   edit distance and partial word overlap, applied in priority order
//! - **Inverted index**: keyword → FAQ ids, rebuilt whole on every load
//! - **Never fails**: store and analytics failures degrade silently
//! - **LLM fallback**: low-confidence questions go to a text generator
//!
//! # Modules
//!
//! - `types`: Core data structures (FaqRecord, FaqEntry, FaqMatch, AnalyticsEvent)
//! - `search`: Stopwords, synonyms, keyword extraction, similarity, index
//! - `matcher`: The matching engine
//! - `store`: Data store and analytics sink seams with JSONL/in-memory backends
//! - `chatbot`: FAQ-first responder with LLM fallback
//! - `api`: HTTP endpoints
//! - `config`, `logging`, `error`: Ambient plumbing
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use faq_matcher::store::{InMemoryFaqStore, MemoryAnalyticsSink};
//! use faq_matcher::{FaqMatcher, FaqRecord};
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = Arc::new(InMemoryFaqStore::new(vec![FaqRecord::new(
//!         "1",
//!         "Bagaimana cara menjual produk?",
//!         "Klik tombol Jual di halaman utama.",
//!     )]));
//!     let matcher = FaqMatcher::new(store, Arc::new(MemoryAnalyticsSink::new()));
//!
//!     for m in matcher.find_matches("cara jual barang", 5).await {
//!         println!("{} ({:.2}, {})", m.question, m.score, m.match_type);
//!     }
//! }
//! ```

pub mod api;
pub mod chatbot;
pub mod config;
pub mod error;
pub mod logging;
pub mod matcher;
pub mod search;
pub mod store;
pub mod types;

// Re-export commonly used items at crate root
pub use chatbot::{ChatReply, ChatResponder, ReplySource, TextGenerator};
pub use error::{FaqError, Result};
pub use matcher::{FaqMatcher, KnowledgeStats, MatcherConfig};
pub use types::{AnalyticsEvent, FaqEntry, FaqMatch, FaqRecord, MatchType};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
