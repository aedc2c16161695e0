//! Pre-flight checks before serving or answering.
//!
//! Validates that the FAQ file and model configuration are in place
//! before starting operations that would otherwise fail on every request.

use crate::config::Settings;
use crate::error::{Result, SupportError};
use std::path::Path;

/// Requirements for different operations.
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    /// Serving requires the FAQ file and a model id.
    Serve,
    /// Asking requires the FAQ file and a model id.
    Ask,
    /// Search only reads the FAQ file.
    Search,
}

/// Run pre-flight checks for the given operation.
///
/// Returns Ok(()) if all checks pass, or an error describing what's missing.
pub fn check(operation: Operation, settings: &Settings) -> Result<()> {
    match operation {
        Operation::Serve | Operation::Ask => {
            check_faq_file(&settings.faq_path())?;
            check_model(settings)?;
        }
        Operation::Search => {
            check_faq_file(&settings.faq_path())?;
        }
    }
    Ok(())
}

/// Check that the FAQ file exists and is a regular file.
fn check_faq_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(SupportError::Config(format!(
            "FAQ file not found at {}. Create it with: hf-support init (or set FAQ_PATH)",
            path.display()
        )))
    }
}

/// Check that a model id is configured.
fn check_model(settings: &Settings) -> Result<()> {
    if settings.inference.model.trim().is_empty() {
        Err(SupportError::Config(
            "No inference model configured. Set it with: export HF_MODEL='google/flan-t5-base'"
                .to_string(),
        ))
    } else {
        Ok(())
    }
}
