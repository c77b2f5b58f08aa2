//! Text matching primitives
//!
//! This module provides the building blocks used by the matcher:
//! - Bilingual stopword tables
//! - Synonym expansion bridging Indonesian and English vocabulary
//! - Keyword extraction
//! - Inverted keyword index
//! - Edit-distance and keyword-set similarity

mod index;
mod keywords;
mod similarity;
mod stopwords;
mod synonyms;

pub use index::{IndexStats, KeywordIndex};
pub use keywords::KeywordExtractor;
pub use similarity::{fuzzy_score, levenshtein_distance, semantic_similarity};
pub use stopwords::{Stopwords, ENGLISH_STOPWORDS, INDONESIAN_STOPWORDS};
pub use synonyms::{SynonymMap, SYNONYM_GROUPS};
