//! FAQ matcher - core matching engine
//!
//! Holds the in-memory knowledge base and keyword index, and scores free
//! text queries against it with four strategies applied in priority order:
//!
//! ```text
//! query ──► exact ──► keyword ──► fuzzy ──► partial ──► sort ──► truncate
//!                                                                  │
//!                                         analytics (top match) ◄──┘
//! ```
//!
//! Neither `load_faqs` nor `find_matches` returns an error: store failures
//! degrade to an empty knowledge base, analytics failures are logged.

mod snapshot;
mod strategies;

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::error::FaqError;
use crate::search::KeywordExtractor;
use crate::store::{AnalyticsSink, FaqStore};
use crate::types::{AnalyticsEvent, FaqMatch};

use snapshot::KnowledgeSnapshot;
use strategies::{MatchSet, QueryContext};

pub use snapshot::KnowledgeStats;

/// Default number of matches returned by [`FaqMatcher::find`]
pub const DEFAULT_MATCH_LIMIT: usize = 5;

/// Default bound on a knowledge base fetch
pub const DEFAULT_LOAD_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for the matcher
#[derive(Debug, Clone)]
pub struct MatcherConfig {
    /// Fetches taking longer than this degrade to an empty knowledge base
    pub load_timeout: Duration,
    /// Limit used by [`FaqMatcher::find`]
    pub default_limit: usize,
    /// Spawn analytics writes instead of awaiting them
    pub detach_analytics: bool,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            load_timeout: DEFAULT_LOAD_TIMEOUT,
            default_limit: DEFAULT_MATCH_LIMIT,
            detach_analytics: true,
        }
    }
}

impl MatcherConfig {
    pub fn with_load_timeout(mut self, timeout: Duration) -> Self {
        self.load_timeout = timeout;
        self
    }

    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = limit;
        self
    }

    pub fn with_detached_analytics(mut self, detach: bool) -> Self {
        self.detach_analytics = detach;
        self
    }
}

/// Multi-strategy FAQ matcher
///
/// One instance owns its knowledge base and index; independent instances
/// share nothing.
pub struct FaqMatcher {
    store: Arc<dyn FaqStore>,
    analytics: Arc<dyn AnalyticsSink>,
    extractor: KeywordExtractor,
    config: MatcherConfig,
    /// Published knowledge base, replaced whole on every load
    snapshot: RwLock<Arc<KnowledgeSnapshot>>,
    /// Serializes loads so concurrent lazy loads share one fetch
    load_lock: Mutex<()>,
}

impl FaqMatcher {
    /// Create a matcher with default configuration
    pub fn new(store: Arc<dyn FaqStore>, analytics: Arc<dyn AnalyticsSink>) -> Self {
        Self::with_config(store, analytics, MatcherConfig::default())
    }

    /// Create a matcher with custom configuration
    pub fn with_config(
        store: Arc<dyn FaqStore>,
        analytics: Arc<dyn AnalyticsSink>,
        config: MatcherConfig,
    ) -> Self {
        Self {
            store,
            analytics,
            extractor: KeywordExtractor::new(),
            config,
            snapshot: RwLock::new(Arc::new(KnowledgeSnapshot::default())),
            load_lock: Mutex::new(()),
        }
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    pub fn extractor(&self) -> &KeywordExtractor {
        &self.extractor
    }

    /// Statistics of the currently published knowledge base
    pub fn stats(&self) -> KnowledgeStats {
        self.current().stats()
    }

    /// Extract keywords the way queries are analysed
    pub fn extract_keywords(&self, text: &str) -> Vec<String> {
        self.extractor.extract_keywords(text)
    }

    fn current(&self) -> Arc<KnowledgeSnapshot> {
        self.snapshot.read().clone()
    }

    /// Reload the knowledge base from the store
    ///
    /// Always a full replace. On fetch failure or timeout the knowledge base
    /// becomes empty and the error is logged.
    pub async fn load_faqs(&self) -> KnowledgeStats {
        let _guard = self.load_lock.lock().await;
        self.load_locked().await.stats()
    }

    async fn load_locked(&self) -> Arc<KnowledgeSnapshot> {
        let timeout = self.config.load_timeout;
        let fetched = tokio::time::timeout(timeout, self.store.fetch_active_faqs()).await;

        let records = match fetched {
            Ok(Ok(records)) => records,
            Ok(Err(e)) => {
                error!(error = %e, "Failed to load FAQs, continuing with empty knowledge base");
                Vec::new()
            }
            Err(_) => {
                let e = FaqError::LoadTimeout(timeout);
                error!(error = %e, "Failed to load FAQs, continuing with empty knowledge base");
                Vec::new()
            }
        };

        let snapshot = Arc::new(KnowledgeSnapshot::build(records, &self.extractor));
        *self.snapshot.write() = Arc::clone(&snapshot);

        let stats = snapshot.stats();
        info!(
            entries = stats.entry_count,
            keywords = stats.unique_keywords,
            skipped = stats.skipped_rows,
            "Knowledge base loaded"
        );

        snapshot
    }

    /// Current knowledge base, loading it first if it is empty
    async fn ensure_loaded(&self) -> Arc<KnowledgeSnapshot> {
        let snapshot = self.current();
        if !snapshot.is_empty() {
            return snapshot;
        }

        let _guard = self.load_lock.lock().await;
        // another caller may have finished a load while we waited
        let snapshot = self.current();
        if !snapshot.is_empty() {
            return snapshot;
        }

        self.load_locked().await
    }

    /// Find matches using the configured default limit
    pub async fn find(&self, query: &str) -> Vec<FaqMatch> {
        self.find_matches(query, self.config.default_limit).await
    }

    /// Score `query` against the knowledge base
    ///
    /// Returns at most `limit` matches, best first, each FAQ at most once.
    /// A blank query or an empty knowledge base yields no matches.
    pub async fn find_matches(&self, query: &str, limit: usize) -> Vec<FaqMatch> {
        let message_length = query.chars().count();
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let snapshot = self.ensure_loaded().await;
        if snapshot.is_empty() {
            return Vec::new();
        }

        let ctx = QueryContext::new(query, &self.extractor);
        let mut found = MatchSet::default();

        strategies::exact(&snapshot, &ctx, &mut found);
        strategies::keyword(&snapshot, &ctx, &self.extractor, &mut found);
        strategies::fuzzy(&snapshot, &ctx, &mut found);
        strategies::partial(&snapshot, &ctx, &mut found);

        let mut matches = found.into_matches();
        // stable: ties keep strategy priority order
        matches.sort_by(|a, b| b.score.total_cmp(&a.score));
        matches.truncate(limit);

        debug!(
            query_len = message_length,
            keywords = ctx.keywords.len(),
            matches = matches.len(),
            "FAQ matching finished"
        );

        if !matches.is_empty() {
            self.record_match(&matches, message_length, &ctx.keywords).await;
        }

        matches
    }

    async fn record_match(&self, matches: &[FaqMatch], message_length: usize, keywords: &[String]) {
        let Some(event) = AnalyticsEvent::faq_match(matches, message_length, keywords) else {
            return;
        };

        if self.config.detach_analytics {
            let sink = Arc::clone(&self.analytics);
            tokio::spawn(async move {
                if let Err(e) = sink.insert_event(&event).await {
                    warn!(error = %e, "Failed to record FAQ match analytics");
                }
            });
        } else if let Err(e) = self.analytics.insert_event(&event).await {
            warn!(error = %e, "Failed to record FAQ match analytics");
        }
    }
}
