//! The four matching strategies
//!
//! Strategies run in priority order (exact, keyword, fuzzy, partial).
//! Each one only looks at entries no earlier strategy has claimed, so an
//! entry is reported once, under the first strategy that matched it.

use std::collections::HashSet;

use rayon::prelude::*;

use super::snapshot::KnowledgeSnapshot;
use crate::search::{fuzzy_score, semantic_similarity, KeywordExtractor};
use crate::types::{FaqEntry, FaqMatch, MatchType};

/// Knowledge bases larger than this are fuzzy-scanned in parallel
const PARALLEL_FUZZY_THRESHOLD: usize = 1000;

const KEYWORD_WEIGHT: f64 = 0.8;
const KEYWORD_MIN_SIMILARITY: f64 = 0.1;

const FUZZY_WEIGHT: f64 = 0.7;
const FUZZY_MIN_SCORE: f64 = 0.6;

const PARTIAL_WEIGHT: f64 = 0.6;
const PARTIAL_MIN_QUERY_CHARS: usize = 10;
const PARTIAL_MIN_WORD_CHARS: usize = 3;
const PARTIAL_MIN_WORDS: usize = 2;
const PARTIAL_MIN_RATIO: f64 = 0.3;

/// Per-query values shared by every strategy
pub(crate) struct QueryContext<'a> {
    /// Trimmed query as given
    pub(crate) text: &'a str,
    pub(crate) lowered: String,
    pub(crate) keywords: Vec<String>,
}

impl<'a> QueryContext<'a> {
    pub(crate) fn new(text: &'a str, extractor: &KeywordExtractor) -> Self {
        Self {
            text,
            lowered: text.to_lowercase(),
            keywords: extractor.extract_keywords(text),
        }
    }
}

/// Matches in discovery order plus the ids already claimed
#[derive(Debug, Default)]
pub(crate) struct MatchSet {
    matches: Vec<FaqMatch>,
    claimed: HashSet<String>,
}

impl MatchSet {
    fn is_claimed(&self, id: &str) -> bool {
        self.claimed.contains(id)
    }

    fn claim(&mut self, found: FaqMatch) {
        if self.claimed.insert(found.id.clone()) {
            self.matches.push(found);
        }
    }

    pub(crate) fn into_matches(self) -> Vec<FaqMatch> {
        self.matches
    }
}

/// Question contains the query, or the query contains the question
pub(crate) fn exact(snapshot: &KnowledgeSnapshot, ctx: &QueryContext<'_>, found: &mut MatchSet) {
    for entry in &snapshot.faqs {
        if found.is_claimed(&entry.id) {
            continue;
        }

        let question = entry.question.to_lowercase();
        if question.contains(&ctx.lowered) || ctx.lowered.contains(&question) {
            found.claim(FaqMatch::new(
                entry,
                1.0,
                MatchType::Exact,
                vec![ctx.text.to_string()],
            ));
        }
    }
}

/// Jaccard overlap between query keywords and an entry's keywords
///
/// Candidates come from the inverted index; each candidate's keywords are
/// re-extracted from its question and answer.
pub(crate) fn keyword(
    snapshot: &KnowledgeSnapshot,
    ctx: &QueryContext<'_>,
    extractor: &KeywordExtractor,
    found: &mut MatchSet,
) {
    if ctx.keywords.is_empty() {
        return;
    }

    let candidates = snapshot.index.candidates(&ctx.keywords);
    if candidates.is_empty() {
        return;
    }

    // walk the FAQ list rather than the candidate set to keep discovery order stable
    for entry in &snapshot.faqs {
        if !candidates.contains(&entry.id) || found.is_claimed(&entry.id) {
            continue;
        }

        let faq_keywords = extractor.extract_keywords(&entry.searchable_text());
        let similarity = semantic_similarity(&ctx.keywords, &faq_keywords);
        if similarity <= KEYWORD_MIN_SIMILARITY {
            continue;
        }

        let faq_keywords: HashSet<&str> = faq_keywords.iter().map(String::as_str).collect();
        let matched_terms = ctx
            .keywords
            .iter()
            .filter(|k| faq_keywords.contains(k.as_str()))
            .cloned()
            .collect();

        found.claim(FaqMatch::new(
            entry,
            similarity * KEYWORD_WEIGHT,
            MatchType::Keyword,
            matched_terms,
        ));
    }
}

/// Edit-distance similarity between the query and each question
///
/// The threshold applies to the raw score; the reported score is damped.
pub(crate) fn fuzzy(snapshot: &KnowledgeSnapshot, ctx: &QueryContext<'_>, found: &mut MatchSet) {
    let score_entry = |entry: &FaqEntry| -> Option<FaqMatch> {
        let raw = fuzzy_score(ctx.text, &entry.question);
        (raw > FUZZY_MIN_SCORE)
            .then(|| FaqMatch::new(entry, raw * FUZZY_WEIGHT, MatchType::Fuzzy, Vec::new()))
    };

    let scored: Vec<FaqMatch> = if snapshot.faqs.len() > PARALLEL_FUZZY_THRESHOLD {
        snapshot
            .faqs
            .par_iter()
            .filter(|entry| !found.is_claimed(&entry.id))
            .filter_map(score_entry)
            .collect()
    } else {
        snapshot
            .faqs
            .iter()
            .filter(|entry| !found.is_claimed(&entry.id))
            .filter_map(score_entry)
            .collect()
    };

    for m in scored {
        found.claim(m);
    }
}

/// Share of query words found verbatim in an entry's question and answer
///
/// Only attempted for queries longer than ten characters. Every
/// whitespace-separated word counts toward the denominator; only words
/// longer than three characters can match.
pub(crate) fn partial(snapshot: &KnowledgeSnapshot, ctx: &QueryContext<'_>, found: &mut MatchSet) {
    if ctx.text.chars().count() <= PARTIAL_MIN_QUERY_CHARS {
        return;
    }

    let words: Vec<&str> = ctx.text.split_whitespace().collect();
    let lowered_words: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
    let total = words.len() as f64;

    for entry in &snapshot.faqs {
        if found.is_claimed(&entry.id) {
            continue;
        }

        let text = entry.searchable_text().to_lowercase();
        let matching: Vec<String> = words
            .iter()
            .zip(&lowered_words)
            .filter(|(_, lowered)| lowered.chars().count() > PARTIAL_MIN_WORD_CHARS)
            .filter(|(_, lowered)| text.contains(lowered.as_str()))
            .map(|(word, _)| word.to_string())
            .collect();

        let ratio = matching.len() as f64 / total;
        if matching.len() >= PARTIAL_MIN_WORDS && ratio > PARTIAL_MIN_RATIO {
            found.claim(FaqMatch::new(
                entry,
                ratio * PARTIAL_WEIGHT,
                MatchType::Partial,
                matching,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FaqRecord;

    fn snapshot(rows: &[(&str, &str, &str)]) -> KnowledgeSnapshot {
        let records = rows
            .iter()
            .map(|(id, q, a)| FaqRecord::new(*id, *q, *a))
            .collect();
        KnowledgeSnapshot::build(records, &KeywordExtractor::new())
    }

    #[test]
    fn test_exact_both_directions() {
        let extractor = KeywordExtractor::new();
        let kb = snapshot(&[
            ("1", "Apa metode pembayaran yang tersedia?", "Transfer bank."),
            ("2", "Ongkir", "Gratis."),
        ]);

        let ctx = QueryContext::new("metode PEMBAYARAN", &extractor);
        let mut found = MatchSet::default();
        exact(&kb, &ctx, &mut found);
        let matches = found.into_matches();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, "1");
        assert_eq!(matches[0].score, 1.0);
        assert_eq!(matches[0].matched_terms, vec!["metode PEMBAYARAN".to_string()]);

        // query contains the whole question
        let ctx = QueryContext::new("berapa ongkir ke bandung", &extractor);
        let mut found = MatchSet::default();
        exact(&kb, &ctx, &mut found);
        assert_eq!(found.into_matches()[0].id, "2");
    }

    #[test]
    fn test_keyword_uses_synonyms() {
        let extractor = KeywordExtractor::new();
        let kb = snapshot(&[("1", "Bagaimana cara menjual produk?", "Klik tombol jual.")]);
        let ctx = QueryContext::new("jual barang", &extractor);

        let mut found = MatchSet::default();
        keyword(&kb, &ctx, &extractor, &mut found);
        let matches = found.into_matches();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].match_type, MatchType::Keyword);
        assert!(matches[0].score > 0.0 && matches[0].score <= KEYWORD_WEIGHT);
        assert!(matches[0].matched_terms.contains(&"jual".to_string()));
        assert!(matches[0].matched_terms.contains(&"barang".to_string()));
    }

    #[test]
    fn test_keyword_skips_claimed_entries() {
        let extractor = KeywordExtractor::new();
        let kb = snapshot(&[("1", "jual barang", "Klik jual.")]);
        let ctx = QueryContext::new("jual barang", &extractor);

        let mut found = MatchSet::default();
        exact(&kb, &ctx, &mut found);
        keyword(&kb, &ctx, &extractor, &mut found);
        let matches = found.into_matches();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].match_type, MatchType::Exact);
    }

    #[test]
    fn test_fuzzy_threshold_on_raw_score() {
        let extractor = KeywordExtractor::new();
        let kb = snapshot(&[
            ("1", "lupa sandi", "Reset lewat email."),
            ("2", "zzzzzzzzzz", "Tidak relevan."),
        ]);
        // one substitution out of ten characters
        let ctx = QueryContext::new("lupa sendi", &extractor);

        let mut found = MatchSet::default();
        fuzzy(&kb, &ctx, &mut found);
        let matches = found.into_matches();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].match_type, MatchType::Fuzzy);
        assert!((matches[0].score - 0.9 * FUZZY_WEIGHT).abs() < 1e-9);
        assert!(matches[0].matched_terms.is_empty());
    }

    fn near_miss_snapshot(count: usize) -> KnowledgeSnapshot {
        let records = (0..count)
            .map(|i| FaqRecord::new(i.to_string(), format!("ab cd e{i}"), "Jawaban."))
            .collect();
        KnowledgeSnapshot::build(records, &KeywordExtractor::new())
    }

    fn fuzzy_matches(kb: &KnowledgeSnapshot, ctx: &QueryContext<'_>) -> Vec<FaqMatch> {
        let mut found = MatchSet::default();
        fuzzy(kb, ctx, &mut found);
        found.into_matches()
    }

    #[test]
    fn test_parallel_fuzzy_scan_matches_serial_order() {
        let extractor = KeywordExtractor::new();
        // two-letter words: no keywords, too short for partial matching
        let ctx = QueryContext::new("ab cd ef", &extractor);
        assert!(ctx.keywords.is_empty());

        let large = near_miss_snapshot(1200);
        assert!(large.faqs.len() > PARALLEL_FUZZY_THRESHOLD);
        let small = near_miss_snapshot(PARALLEL_FUZZY_THRESHOLD);

        let parallel = fuzzy_matches(&large, &ctx);
        assert_eq!(parallel.len(), 1200);
        assert_eq!(parallel, fuzzy_matches(&large, &ctx));

        let ids: HashSet<&str> = parallel.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids.len(), parallel.len());

        // serial scan over the first entries yields the same prefix
        let serial = fuzzy_matches(&small, &ctx);
        assert_eq!(serial.len(), PARALLEL_FUZZY_THRESHOLD);
        assert_eq!(&parallel[..serial.len()], serial.as_slice());

        let expected: Vec<String> = (0..1200).map(|i| i.to_string()).collect();
        let actual: Vec<String> = parallel.iter().map(|m| m.id.clone()).collect();
        assert_eq!(actual, expected);
        assert!(parallel.iter().all(|m| m.match_type == MatchType::Fuzzy));
    }

    #[test]
    fn test_parallel_fuzzy_scan_skips_claimed() {
        let extractor = KeywordExtractor::new();
        let ctx = QueryContext::new("ab cd ef", &extractor);
        let large = near_miss_snapshot(1100);

        let mut found = MatchSet::default();
        found.claim(FaqMatch::new(&large.faqs[7], 1.0, MatchType::Exact, Vec::new()));
        fuzzy(&large, &ctx, &mut found);
        let matches = found.into_matches();

        assert_eq!(matches.len(), 1100);
        assert_eq!(matches[0].match_type, MatchType::Exact);
        assert_eq!(matches.iter().filter(|m| m.id == "7").count(), 1);
    }

    #[test]
    fn test_partial_requires_two_long_words() {
        let extractor = KeywordExtractor::new();
        let kb = snapshot(&[(
            "1",
            "Kapan saya bisa menerima dana hasil penjualan?",
            "Dana masuk ke saldo setelah pembeli konfirmasi.",
        )]);

        let ctx = QueryContext::new("sudah bisa kapan saja", &extractor);
        let mut found = MatchSet::default();
        partial(&kb, &ctx, &mut found);
        let matches = found.into_matches();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].match_type, MatchType::Partial);
        assert!((matches[0].score - 0.5 * PARTIAL_WEIGHT).abs() < 1e-9);
        assert_eq!(matches[0].matched_terms, vec!["bisa".to_string(), "kapan".to_string()]);

        // a single matching word is not enough
        let ctx = QueryContext::new("kapan kiriman tiba", &extractor);
        let mut found = MatchSet::default();
        partial(&kb, &ctx, &mut found);
        assert!(found.into_matches().is_empty());
    }

    #[test]
    fn test_partial_skips_short_queries() {
        let extractor = KeywordExtractor::new();
        let kb = snapshot(&[("1", "kapan bisa", "kapan bisa")]);
        let ctx = QueryContext::new("kapan bisa", &extractor);

        let mut found = MatchSet::default();
        partial(&kb, &ctx, &mut found);
        assert!(found.into_matches().is_empty());
    }
}
