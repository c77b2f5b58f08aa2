//! Inverted keyword index over the knowledge base
//!
//! Maps each extracted keyword to the ids of the FAQ entries whose
//! question or answer produced it. The index is only ever built whole;
//! a reload constructs a fresh one and replaces the old.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use super::keywords::KeywordExtractor;
use crate::types::FaqEntry;

/// Inverted index for candidate lookup
#[derive(Debug, Default, Clone)]
pub struct KeywordIndex {
    /// keyword → Set<faq id>
    postings: HashMap<String, HashSet<String>>,

    /// Total indexed entries count
    entry_count: usize,
}

impl KeywordIndex {
    /// Create a new empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from scratch over `entries`
    pub fn build(entries: &[FaqEntry], extractor: &KeywordExtractor) -> Self {
        let mut index = Self::new();
        for entry in entries {
            index.index_entry(entry, extractor);
        }
        index
    }

    fn index_entry(&mut self, entry: &FaqEntry, extractor: &KeywordExtractor) {
        for keyword in extractor.extract_keywords(&entry.searchable_text()) {
            self.postings
                .entry(keyword)
                .or_default()
                .insert(entry.id.clone());
        }
        self.entry_count += 1;
    }

    /// Ids posted under a single keyword
    pub fn lookup(&self, keyword: &str) -> Option<&HashSet<String>> {
        self.postings.get(keyword)
    }

    /// Union of the postings of every keyword
    pub fn candidates<S: AsRef<str>>(&self, keywords: &[S]) -> HashSet<String> {
        let mut results = HashSet::new();
        for keyword in keywords {
            if let Some(ids) = self.postings.get(keyword.as_ref()) {
                results.extend(ids.iter().cloned());
            }
        }
        results
    }

    /// Get total indexed entries
    pub fn len(&self) -> usize {
        self.entry_count
    }

    /// Check if index is empty
    pub fn is_empty(&self) -> bool {
        self.entry_count == 0
    }

    /// Get index statistics
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            entry_count: self.entry_count,
            unique_keywords: self.postings.len(),
            total_postings: self.postings.values().map(HashSet::len).sum(),
        }
    }
}

/// Index statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStats {
    pub entry_count: usize,
    pub unique_keywords: usize,
    pub total_postings: usize,
}
