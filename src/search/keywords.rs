//! Keyword extraction with stopword filtering and synonym expansion

use std::collections::HashSet;

use super::stopwords::Stopwords;
use super::synonyms::SynonymMap;

/// Tokens of this many characters or fewer are dropped
const MIN_TOKEN_CHARS: usize = 2;

/// Turns free text into a deduplicated, synonym-expanded keyword list
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    stopwords: Stopwords,
    synonyms: SynonymMap,
}

impl KeywordExtractor {
    /// Bilingual stopwords with the marketplace synonym groups
    pub fn new() -> Self {
        Self::with_tables(Stopwords::bilingual(), SynonymMap::marketplace())
    }

    /// Extractor over caller-supplied tables
    pub fn with_tables(stopwords: Stopwords, synonyms: SynonymMap) -> Self {
        Self { stopwords, synonyms }
    }

    pub fn synonyms(&self) -> &SynonymMap {
        &self.synonyms
    }

    /// Extract keywords from `text`
    ///
    /// Surviving tokens come first in order of appearance, followed by the
    /// synonyms they pulled in. Each keyword appears once.
    pub fn extract_keywords(&self, text: &str) -> Vec<String> {
        let tokens: Vec<String> = tokenize(text)
            .into_iter()
            .filter(|token| token.chars().count() > MIN_TOKEN_CHARS)
            .filter(|token| !self.stopwords.contains(token))
            .collect();

        let mut seen: HashSet<String> = HashSet::new();
        let mut keywords = Vec::new();

        for token in &tokens {
            if seen.insert(token.clone()) {
                keywords.push(token.clone());
            }
        }

        for token in &tokens {
            for synonym in self.synonyms.synonyms_of(token) {
                if seen.insert(synonym.clone()) {
                    keywords.push(synonym.clone());
                }
            }
        }

        keywords
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Lower-case and split on anything that is not a word character
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
