//! Stopword tables for Indonesian and English queries
//!
//! Only tokens longer than two characters reach the stopword check, so
//! shorter function words are omitted from the tables.

use std::collections::HashSet;

pub const INDONESIAN_STOPWORDS: &[&str] = &[
    "yang", "dan", "dari", "ini", "itu", "untuk", "dengan", "pada", "adalah", "ada", "saya",
    "aku", "kami", "kita", "anda", "kamu", "dia", "mereka", "tidak", "bukan", "bisa", "dapat",
    "akan", "sudah", "telah", "belum", "juga", "atau", "apa", "apakah", "bagaimana", "cara",
    "kapan", "dimana", "mana", "siapa", "mengapa", "kenapa", "berapa", "saja", "hanya", "lebih",
    "sangat", "dalam", "oleh", "karena", "jika", "kalau", "agar", "supaya", "bagi", "para",
    "tersebut", "tentang", "seperti", "masih", "harus", "boleh", "mau", "ingin", "tolong",
    "mohon", "sih", "dong", "deh", "nya", "lagi", "pun", "kah", "lah", "tapi", "tetapi",
    "namun", "sebagai", "secara", "setelah", "sebelum", "sampai", "hingga", "antara", "ketika",
    "saat", "maka", "sehingga", "yaitu", "yakni", "tanpa", "per", "kok", "gimana",
];

pub const ENGLISH_STOPWORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "any", "can", "had", "her", "was",
    "one", "our", "out", "has", "have", "how", "what", "when", "where", "which", "who", "whom",
    "why", "this", "that", "these", "those", "with", "from", "they", "them", "their", "there",
    "will", "would", "should", "could", "been", "were", "your", "yours", "does", "did", "doing",
    "about", "into", "than", "then", "some", "each", "just", "also", "very", "its", "his",
    "she", "him", "myself", "yourself", "more", "most", "other", "such", "only", "own", "same",
    "too", "again", "further", "once", "here", "both", "few", "nor", "off", "over", "under",
    "until", "while", "because", "being", "between", "through", "during", "before", "after",
    "above", "below", "please", "may", "might", "must", "shall",
];

/// Lookup set over both stopword tables
#[derive(Debug, Clone)]
pub struct Stopwords {
    words: HashSet<&'static str>,
}

impl Stopwords {
    /// Build the combined Indonesian + English set
    pub fn bilingual() -> Self {
        let words = INDONESIAN_STOPWORDS
            .iter()
            .chain(ENGLISH_STOPWORDS.iter())
            .copied()
            .collect();
        Self { words }
    }

    /// Check a lower-cased token
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::bilingual()
    }
}
