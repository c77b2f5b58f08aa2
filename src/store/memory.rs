//! In-memory store and analytics sink

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};

use super::{AnalyticsSink, FaqStore};
use crate::error::Result;
use crate::types::{AnalyticsEvent, FaqRecord};

/// Replaceable in-memory row set
#[derive(Debug, Default)]
pub struct InMemoryFaqStore {
    records: RwLock<Vec<FaqRecord>>,
}

impl InMemoryFaqStore {
    pub fn new(records: Vec<FaqRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Swap the whole row set; visible on the next fetch
    pub fn replace(&self, records: Vec<FaqRecord>) {
        *self.records.write() = records;
    }
}

#[async_trait]
impl FaqStore for InMemoryFaqStore {
    async fn fetch_active_faqs(&self) -> Result<Vec<FaqRecord>> {
        Ok(self
            .records
            .read()
            .iter()
            .filter(|r| r.is_active)
            .cloned()
            .collect())
    }
}

/// Collects events in memory
#[derive(Debug, Default)]
pub struct MemoryAnalyticsSink {
    events: Mutex<Vec<AnalyticsEvent>>,
}

impl MemoryAnalyticsSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of recorded events in insertion order
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

#[async_trait]
impl AnalyticsSink for MemoryAnalyticsSink {
    async fn insert_event(&self, event: &AnalyticsEvent) -> Result<()> {
        self.events.lock().push(event.clone());
        Ok(())
    }
}
