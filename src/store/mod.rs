//! Data store seams consumed by the matcher
//!
//! - `FaqStore`: fetch all active knowledge base rows
//! - `AnalyticsSink`: append analytics events
//!
//! JSONL file-backed implementations back the server binary; in-memory
//! implementations serve embedders and tests.

mod jsonl;
mod memory;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{AnalyticsEvent, FaqRecord};

pub use jsonl::{JsonlAnalyticsSink, JsonlFaqStore};
pub use memory::{InMemoryFaqStore, MemoryAnalyticsSink};

/// Source of knowledge base rows
#[async_trait]
pub trait FaqStore: Send + Sync {
    /// Fetch every row whose active flag is set. Ordering is not significant.
    async fn fetch_active_faqs(&self) -> Result<Vec<FaqRecord>>;
}

/// Append-only destination for analytics events
#[async_trait]
pub trait AnalyticsSink: Send + Sync {
    async fn insert_event(&self, event: &AnalyticsEvent) -> Result<()>;
}
