//! Search command implementation.

use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use crate::inference::HuggingFaceGateway;
use crate::rag::SupportEngine;
use anyhow::Result;
use std::sync::Arc;

/// Run the search command. Ranks FAQ entries only; the model is never called.
pub async fn run_search(query: &str, top_k: Option<usize>, settings: Settings) -> Result<()> {
    preflight::check(Operation::Search, &settings)?;

    let gateway = Arc::new(HuggingFaceGateway::new(&settings.inference)?);
    let mut engine = SupportEngine::from_settings(&settings, gateway)?;
    if let Some(k) = top_k {
        engine = engine.with_top_k(k);
    }

    let results = engine.retrieve(query).await?;

    if results.is_empty() {
        Output::warning(&format!(
            "No FAQ entries in {} share words with your query.",
            engine.faq_path().display()
        ));
    } else {
        Output::success(&format!("Found {} matching entries", results.len()));

        for scored in &results {
            Output::faq_result(
                &scored.record.question,
                &scored.record.answer,
                Some(scored.score),
            );
        }
    }

    Ok(())
}
