//! Immutable knowledge base snapshot
//!
//! A snapshot pairs the validated FAQ list with the keyword index built
//! from it. Snapshots are built whole and published by swapping an `Arc`,
//! so readers see either the previous or the next knowledge base, never a
//! mix of both.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

use crate::search::{KeywordExtractor, KeywordIndex};
use crate::types::{FaqEntry, FaqRecord};

#[derive(Debug, Default)]
pub(crate) struct KnowledgeSnapshot {
    pub(crate) faqs: Vec<FaqEntry>,
    pub(crate) index: KeywordIndex,
    skipped_rows: usize,
    loaded_at: Option<DateTime<Utc>>,
}

impl KnowledgeSnapshot {
    /// Validate `records` and index the survivors
    pub(crate) fn build(records: Vec<FaqRecord>, extractor: &KeywordExtractor) -> Self {
        let mut seen_ids: HashSet<String> = HashSet::new();
        let mut faqs = Vec::with_capacity(records.len());
        let mut skipped_rows = 0;

        for record in records {
            let id = record.id.clone();
            match FaqEntry::try_from(record) {
                Ok(entry) if seen_ids.insert(entry.id.clone()) => faqs.push(entry),
                Ok(_) => {
                    warn!(faq_id = %id, "Skipping duplicate FAQ row");
                    skipped_rows += 1;
                }
                Err(reason) => {
                    warn!(faq_id = %id, reason, "Skipping unusable FAQ row");
                    skipped_rows += 1;
                }
            }
        }

        let index = KeywordIndex::build(&faqs, extractor);

        Self {
            faqs,
            index,
            skipped_rows,
            loaded_at: Some(Utc::now()),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.faqs.is_empty()
    }

    pub(crate) fn stats(&self) -> KnowledgeStats {
        let index = self.index.stats();
        KnowledgeStats {
            entry_count: self.faqs.len(),
            unique_keywords: index.unique_keywords,
            skipped_rows: self.skipped_rows,
            loaded_at: self.loaded_at,
        }
    }
}

/// Summary of the currently published knowledge base
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeStats {
    pub entry_count: usize,
    pub unique_keywords: usize,
    pub skipped_rows: usize,
    /// `None` until the first load attempt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loaded_at: Option<DateTime<Utc>>,
}
