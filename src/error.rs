//! Error types for hf-support.

use thiserror::Error;

/// Library-level error type for support agent operations.
#[derive(Error, Debug)]
pub enum SupportError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// The question was rejected before any work was done.
    #[error("{0}")]
    InvalidInput(String),

    #[error("Could not read FAQ file {path}: {source}")]
    DataSource {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Inference request failed: {0}")]
    Upstream(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl SupportError {
    /// Wrap any loader failure for the FAQ file at `path`.
    pub fn data_source(
        path: &std::path::Path,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        SupportError::DataSource {
            path: path.display().to_string(),
            source: source.into(),
        }
    }

    /// Whether this error was caused by the caller rather than by us.
    pub fn is_client_error(&self) -> bool {
        matches!(self, SupportError::InvalidInput(_))
    }
}

/// Result type alias for support agent operations.
pub type Result<T> = std::result::Result<T, SupportError>;
