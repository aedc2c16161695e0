//! FAQ-grounded answer generation.
//!
//! Ties the FAQ store, the ranker and the inference gateway together to
//! answer a single support question.

pub mod context;
mod engine;

pub use context::{compose_prompt, format_faqs_for_prompt};
pub use engine::{validate_question, SupportEngine};

use crate::faq::FaqRecord;
use serde::{Deserialize, Serialize};

/// Answer to a support question, with the FAQ records used as context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AskResponse {
    /// Text returned by the inference model, unmodified.
    pub answer: String,
    /// FAQ records passed to the model, most relevant first.
    pub relevant_faqs: Vec<FaqRecord>,
}
