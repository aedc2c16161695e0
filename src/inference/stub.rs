//! In-process gateway used by tests.

use super::InferenceGateway;
use crate::error::{Result, SupportError};
use async_trait::async_trait;
use std::sync::Mutex;

/// Records every prompt and replays a canned reply.
pub(crate) struct StubGateway {
    reply: std::result::Result<String, String>,
    pub(crate) prompts: Mutex<Vec<String>>,
}

impl StubGateway {
    pub(crate) fn answering(answer: &str) -> Self {
        Self {
            reply: Ok(answer.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Fails with a non-upstream error, so callers must do the wrapping.
    pub(crate) fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl InferenceGateway for StubGateway {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply
            .clone()
            .map_err(|message| SupportError::Io(std::io::Error::other(message)))
    }

    fn model(&self) -> &str {
        "stub/model"
    }
}
