//! Match result types

use serde::{Deserialize, Serialize};

use super::FaqEntry;

/// Strategy that produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Exact,
    Keyword,
    Fuzzy,
    /// Reserved for the raw keyword-set overlap; never emitted
    Semantic,
    Partial,
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchType::Exact => write!(f, "exact"),
            MatchType::Keyword => write!(f, "keyword"),
            MatchType::Fuzzy => write!(f, "fuzzy"),
            MatchType::Semantic => write!(f, "semantic"),
            MatchType::Partial => write!(f, "partial"),
        }
    }
}

/// A scored FAQ match for a single query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqMatch {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub score: f64,
    pub match_type: MatchType,
    #[serde(default)]
    pub matched_terms: Vec<String>,
}

impl FaqMatch {
    pub fn new(entry: &FaqEntry, score: f64, match_type: MatchType, matched_terms: Vec<String>) -> Self {
        Self {
            id: entry.id.clone(),
            question: entry.question.clone(),
            answer: entry.answer.clone(),
            score,
            match_type,
            matched_terms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_serializes_camel_case() {
        let entry = FaqEntry {
            id: "faq-1".to_string(),
            question: "Q".to_string(),
            answer: "A".to_string(),
        };
        let m = FaqMatch::new(&entry, 1.0, MatchType::Exact, vec!["q".to_string()]);
        let json = serde_json::to_value(&m).unwrap();

        assert_eq!(json["matchType"], "exact");
        assert_eq!(json["matchedTerms"][0], "q");
        assert_eq!(MatchType::Partial.to_string(), "partial");
    }
}
