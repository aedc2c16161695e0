//! Support question answering.

use super::{compose_prompt, AskResponse};
use crate::config::{Prompts, Settings};
use crate::error::{Result, SupportError};
use crate::faq::{load_faqs, rank_scored, ScoredFaq, DEFAULT_TOP_K};
use crate::inference::InferenceGateway;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, instrument};

const EMPTY_QUESTION: &str = "Question cannot be empty.";

/// Trim `question` and reject it if nothing is left.
pub fn validate_question(question: &str) -> Result<&str> {
    let trimmed = question.trim();
    if trimmed.is_empty() {
        return Err(SupportError::InvalidInput(EMPTY_QUESTION.to_string()));
    }
    Ok(trimmed)
}

/// Answers support questions from the FAQ file and an inference gateway.
///
/// Holds no per-request state; one engine serves every request.
pub struct SupportEngine {
    gateway: Arc<dyn InferenceGateway>,
    faq_path: PathBuf,
    top_k: usize,
    prompts: Prompts,
}

impl SupportEngine {
    /// Create a new engine reading FAQs from `faq_path`.
    pub fn new(gateway: Arc<dyn InferenceGateway>, faq_path: impl Into<PathBuf>) -> Self {
        Self {
            gateway,
            faq_path: faq_path.into(),
            top_k: DEFAULT_TOP_K,
            prompts: Prompts::default(),
        }
    }

    /// Create an engine configured from settings.
    pub fn from_settings(settings: &Settings, gateway: Arc<dyn InferenceGateway>) -> Result<Self> {
        let prompts = Prompts::load(
            settings.prompts.custom_dir.as_deref(),
            Some(&settings.prompts.variables),
        )?;

        Ok(Self::new(gateway, settings.faq_path())
            .with_top_k(settings.ranking.top_k)
            .with_prompts(prompts))
    }

    /// Set the maximum number of FAQ records used as context.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Set custom prompts (with user-defined variables).
    pub fn with_prompts(mut self, prompts: Prompts) -> Self {
        self.prompts = prompts;
        self
    }

    /// Path of the FAQ file read on every request.
    pub fn faq_path(&self) -> &std::path::Path {
        &self.faq_path
    }

    /// Load the FAQ file and rank it against `question`, keeping scores.
    pub async fn retrieve(&self, question: &str) -> Result<Vec<ScoredFaq>> {
        let question = validate_question(question)?;
        self.rank_faqs(question).await
    }

    /// Rank an already validated question.
    async fn rank_faqs(&self, question: &str) -> Result<Vec<ScoredFaq>> {
        let faqs = load_faqs(&self.faq_path).await?;
        debug!("Ranking {} FAQ entries", faqs.len());
        Ok(rank_scored(question, &faqs, self.top_k))
    }

    /// Answer a single question.
    #[instrument(skip(self), fields(model = %self.gateway.model()))]
    pub async fn ask(&self, question: &str) -> Result<AskResponse> {
        let question = validate_question(question)?;
        info!("Processing question: {}", question);

        let relevant: Vec<_> = self
            .rank_faqs(question)
            .await?
            .into_iter()
            .map(|scored| scored.record)
            .collect();
        debug!("Selected {} relevant FAQs", relevant.len());

        let prompt = compose_prompt(&self.prompts, question, &relevant);

        let answer = self.gateway.generate(&prompt).await.map_err(|e| match e {
            SupportError::Upstream(_) => e,
            other => SupportError::Upstream(other.to_string()),
        })?;

        Ok(AskResponse {
            answer,
            relevant_faqs: relevant,
        })
    }
}
