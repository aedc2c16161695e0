//! Configuration module for hf-support.
//!
//! Handles loading and managing application settings and prompt templates.

mod prompts;
mod settings;

pub use prompts::{Prompts, SupportPrompts};
pub use settings::{
    FaqSettings, InferenceSettings, PromptSettings, RankingSettings, ServerSettings, Settings,
    DEFAULT_MODEL,
};
