//! Keyword-overlap relevance ranking.
//!
//! A record's score is the number of whitespace-separated tokens of its
//! question (lowercased) that occur anywhere inside the lowercased user
//! question. Matching is substring containment, not whole-word equality,
//! so short tokens such as "a" or "i" match incidentally.

use super::FaqRecord;

/// Number of records returned when no explicit limit is configured.
pub const DEFAULT_TOP_K: usize = 3;

/// A FAQ record together with its overlap score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredFaq {
    pub record: FaqRecord,
    pub score: usize,
}

/// Score a single record against an already-lowercased question.
pub fn score(question_lower: &str, record: &FaqRecord) -> usize {
    record
        .question
        .to_lowercase()
        .split_whitespace()
        .filter(|token| question_lower.contains(token))
        .count()
}

/// Rank `faqs` against `question`, keeping scores.
///
/// Zero-score records are dropped, the rest are ordered by descending score
/// with ties kept in input order, and at most `top_k` are returned.
pub fn rank_scored(question: &str, faqs: &[FaqRecord], top_k: usize) -> Vec<ScoredFaq> {
    let question_lower = question.to_lowercase();

    let mut ranked: Vec<ScoredFaq> = faqs
        .iter()
        .filter_map(|record| {
            let score = score(&question_lower, record);
            (score > 0).then(|| ScoredFaq {
                record: record.clone(),
                score,
            })
        })
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(top_k);
    ranked
}

/// Select the `top_k` most relevant records for `question`.
pub fn rank(question: &str, faqs: &[FaqRecord], top_k: usize) -> Vec<FaqRecord> {
    rank_scored(question, faqs, top_k)
        .into_iter()
        .map(|scored| scored.record)
        .collect()
}
