//! Analytics events emitted by the matcher

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{FaqMatch, MatchType};

/// Kind of analytics event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalyticsEventType {
    FaqMatch,
}

/// Append-only analytics record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub event_type: AnalyticsEventType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faq_match_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_faq_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_length: Option<usize>,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl AnalyticsEvent {
    /// Describe the top match of a non-empty result list
    ///
    /// `message_length` is the raw query length in characters.
    pub fn faq_match(matches: &[FaqMatch], message_length: usize, query_keywords: &[String]) -> Option<Self> {
        let top = matches.first()?;
        let match_types: Vec<MatchType> = matches.iter().map(|m| m.match_type).collect();

        Some(Self {
            event_type: AnalyticsEventType::FaqMatch,
            faq_match_score: Some(top.score),
            matched_faq_id: Some(top.id.clone()),
            message_length: Some(message_length),
            timestamp: Utc::now(),
            metadata: json!({
                "total_matches": matches.len(),
                "match_types": match_types,
                "query_keywords": query_keywords,
            }),
        })
    }
}
