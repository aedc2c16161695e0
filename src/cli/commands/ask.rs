//! Ask command implementation.

use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use crate::inference::HuggingFaceGateway;
use crate::rag::SupportEngine;
use anyhow::Result;
use std::sync::Arc;

/// Run the ask command.
pub async fn run_ask(question: &str, top_k: Option<usize>, settings: Settings) -> Result<()> {
    if let Err(e) = preflight::check(Operation::Ask, &settings) {
        Output::error(&format!("{}", e));
        Output::info("Run 'hf-support doctor' for detailed diagnostics.");
        return Err(e.into());
    }

    let gateway = Arc::new(HuggingFaceGateway::new(&settings.inference)?);
    let mut engine = SupportEngine::from_settings(&settings, gateway)?;
    if let Some(k) = top_k {
        engine = engine.with_top_k(k);
    }

    let spinner = Output::spinner(&format!("Asking {}...", settings.inference.model));

    match engine.ask(question).await {
        Ok(response) => {
            spinner.finish_and_clear();

            println!("\n{}\n", response.answer.trim());

            if !response.relevant_faqs.is_empty() {
                Output::header("Relevant FAQs");
                for faq in &response.relevant_faqs {
                    Output::faq_result(&faq.question, &faq.answer, None);
                }
            }
        }
        Err(e) => {
            spinner.finish_and_clear();
            Output::error(&format!("Failed to generate answer: {}", e));
            return Err(e.into());
        }
    }

    Ok(())
}
