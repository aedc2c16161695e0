//! Prompt composition from ranked FAQ records.

use crate::config::Prompts;
use crate::faq::FaqRecord;
use std::collections::HashMap;

/// Format FAQ records as `Q: ...` / `A: ...` line pairs, one record per pair.
pub fn format_faqs_for_prompt(faqs: &[FaqRecord]) -> String {
    faqs.iter()
        .map(|faq| format!("Q: {}\nA: {}", faq.question, faq.answer))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the prompt sent to the inference model.
pub fn compose_prompt(prompts: &Prompts, question: &str, relevant: &[FaqRecord]) -> String {
    let mut vars = HashMap::new();
    vars.insert("question".to_string(), question.to_string());
    vars.insert("context".to_string(), format_faqs_for_prompt(relevant));

    prompts.render_with_custom(&prompts.support.user, &vars)
}
