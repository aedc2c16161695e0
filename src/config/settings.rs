//! Configuration settings for hf-support.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Model used when `HF_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "google/flan-t5-base";

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Settings {
    pub server: ServerSettings,
    pub faq: FaqSettings,
    pub ranking: RankingSettings,
    pub inference: InferenceSettings,
    pub prompts: PromptSettings,
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Host to bind to.
    pub host: String,
    /// Port to bind to.
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

/// FAQ knowledge file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqSettings {
    /// Path to the FAQ CSV file. Relative paths resolve against the working directory.
    pub path: String,
}

impl Default for FaqSettings {
    fn default() -> Self {
        Self {
            path: "faq_data/faqs.csv".to_string(),
        }
    }
}

/// Relevance ranking settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingSettings {
    /// Maximum number of FAQ records passed to the model as context.
    pub top_k: usize,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            top_k: crate::faq::DEFAULT_TOP_K,
        }
    }
}

/// Hugging Face Inference API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceSettings {
    /// Model repository id (e.g. "google/flan-t5-base").
    pub model: String,
    /// Base URL of the inference API; the model id is appended to it.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Access token. Only ever read from the environment.
    #[serde(skip)]
    pub token: Option<String>,
}

impl Default for InferenceSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: "https://api-inference.huggingface.co/models".to_string(),
            timeout_secs: crate::inference::DEFAULT_TIMEOUT_SECS,
            token: None,
        }
    }
}

/// Prompt customization settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct PromptSettings {
    /// Directory for custom prompts (overrides defaults).
    pub custom_dir: Option<String>,
    /// Custom variables available in all prompts as {{variable_name}}.
    pub variables: std::collections::HashMap<String, String>,
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Apply `HF_TOKEN`, `HF_MODEL` and `FAQ_PATH` from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply environment-style overrides from an arbitrary lookup.
    ///
    /// Empty values are treated as unset.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(token) = lookup("HF_TOKEN") {
            self.inference.token = Some(token);
        }
        if let Some(model) = lookup("HF_MODEL") {
            self.inference.model = model;
        }
        if let Some(path) = lookup("FAQ_PATH") {
            self.faq.path = path;
        }
    }

    /// Copy of these settings with the process environment applied on top.
    ///
    /// The receiver stays as loaded from disk, so it is safe to save back.
    pub fn with_env(&self) -> Self {
        let mut effective = self.clone();
        effective.apply_env();
        effective
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::SupportError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hf-support")
            .join("config.toml")
    }

    /// Expand shell variables in paths (e.g., ~).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }

    /// Get the expanded FAQ file path.
    pub fn faq_path(&self) -> PathBuf {
        Self::expand_path(&self.faq.path)
    }
}
