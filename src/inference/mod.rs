//! Text generation through a hosted inference service.

mod huggingface;
#[cfg(test)]
pub(crate) mod stub;

pub use huggingface::HuggingFaceGateway;

use crate::error::{Result, SupportError};
use async_trait::async_trait;
use std::time::Duration;

/// Default timeout for inference requests.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// A service that turns a prompt into generated text.
#[async_trait]
pub trait InferenceGateway: Send + Sync {
    /// Send `prompt` to the model and return the raw generated text.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Identifier of the model behind this gateway.
    fn model(&self) -> &str;
}

/// Create an HTTP client for inference calls with the given timeout.
pub fn create_http_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| SupportError::Config(format!("Failed to create HTTP client: {}", e)))
}
