//! Prompt templates for hf-support.
//!
//! Prompts can be customized by placing TOML files in the custom prompts directory.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Collection of all prompt templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Prompts {
    pub support: SupportPrompts,
    /// Custom variables from config, available in all prompts.
    #[serde(skip)]
    pub variables: HashMap<String, String>,
}

/// Prompt sent to the inference model for a support question.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SupportPrompts {
    /// Template with `{{context}}` and `{{question}}` placeholders.
    pub user: String,
}

impl Default for SupportPrompts {
    fn default() -> Self {
        Self {
            user: "You are a helpful customer support assistant.\n\n\
                   Here are some relevant FAQs:\n\
                   {{context}}\n\n\
                   User Question: {{question}}\n\n\
                   Answer:"
                .to_string(),
        }
    }
}

impl Prompts {
    /// Load prompts from the default location, with optional custom directory and variables.
    pub fn load(
        custom_dir: Option<&str>,
        custom_variables: Option<&HashMap<String, String>>,
    ) -> crate::error::Result<Self> {
        let mut prompts = Prompts::default();

        if let Some(vars) = custom_variables {
            prompts.variables = vars.clone();
        }

        if let Some(dir) = custom_dir {
            let custom_path = PathBuf::from(shellexpand::tilde(dir).to_string());

            let support_path = custom_path.join("support.toml");
            if support_path.exists() {
                let content = std::fs::read_to_string(&support_path)?;
                prompts.support = toml::from_str(&content)?;
            }
        }

        Ok(prompts)
    }

    /// Render a prompt template with the given variables.
    ///
    /// Placeholders are substituted in a single left-to-right pass, so text
    /// inserted for one variable is never expanded again. Unknown placeholders
    /// are left untouched.
    pub fn render(template: &str, vars: &HashMap<String, String>) -> String {
        let mut result = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find("{{") {
            result.push_str(&rest[..open]);
            let after_open = &rest[open + 2..];

            let Some(close) = after_open.find("}}") else {
                result.push_str(&rest[open..]);
                return result;
            };

            let key = &after_open[..close];
            match vars.get(key) {
                Some(value) => result.push_str(value),
                None => result.push_str(&rest[open..open + close + 4]),
            }
            rest = &after_open[close + 2..];
        }

        result.push_str(rest);
        result
    }

    /// Render a prompt template with both provided variables and custom config variables.
    /// Provided variables take precedence over custom config variables.
    pub fn render_with_custom(&self, template: &str, vars: &HashMap<String, String>) -> String {
        let mut merged = self.variables.clone();
        for (key, value) in vars {
            merged.insert(key.clone(), value.clone());
        }
        Self::render(template, &merged)
    }
}
