//! Config command implementation.

use crate::cli::{ConfigAction, Output};
use crate::config::Settings;
use anyhow::Result;
use std::path::Path;

/// Run the config command.
///
/// `show` prints the effective `settings`; `edit` seeds a missing file from
/// `stored`, which carries no environment overrides.
pub fn run_config(
    action: &ConfigAction,
    settings: Settings,
    stored: &Settings,
    config_path: &Path,
) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let toml_str = toml::to_string_pretty(&settings)
                .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;
            println!("{}", toml_str);
            let token_state = if settings.inference.token.is_some() {
                "set"
            } else {
                "not set"
            };
            Output::kv("HF_TOKEN", token_state);
        }

        ConfigAction::Edit => {
            if ensure_config_file(config_path, stored)? {
                Output::info(&format!("Created default config at {:?}", config_path));
            }

            let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vim".to_string());

            Output::info(&format!("Opening config in {}...", editor));

            let status = std::process::Command::new(&editor)
                .arg(config_path)
                .status();

            match status {
                Ok(s) if s.success() => {
                    Output::success("Config saved.");
                }
                Ok(_) => {
                    Output::warning("Editor exited with non-zero status.");
                }
                Err(e) => {
                    Output::error(&format!("Failed to open editor: {}", e));
                    Output::info(&format!("Config file is at: {:?}", config_path));
                }
            }
        }

        ConfigAction::Path => {
            println!("{}", config_path.display());
        }
    }

    Ok(())
}

/// Write `stored` to `path` unless a file is already there.
fn ensure_config_file(path: &Path, stored: &Settings) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    stored.save_to(path)?;
    Ok(true)
}
