//! FAQ knowledge base: loading records from disk and ranking them against a question.

mod loader;
pub mod ranker;

pub use loader::{load_faqs, parse_faqs};
pub use ranker::{rank, rank_scored, ScoredFaq, DEFAULT_TOP_K};

use serde::{Deserialize, Serialize};

/// A single question/answer pair from the FAQ file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqRecord {
    pub question: String,
    pub answer: String,
}

impl FaqRecord {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}
