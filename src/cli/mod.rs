//! CLI module for hf-support.

pub mod commands;
mod output;
pub mod preflight;

pub use output::Output;

use crate::config::Settings;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// hf-support - FAQ-grounded customer support agent
///
/// Answers support questions using the closest entries from a local FAQ file
/// as context for a Hugging Face hosted model.
#[derive(Parser, Debug)]
#[command(name = "hf-support")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Config file in use: `--config` if given, otherwise the default location.
    pub fn config_path(&self) -> PathBuf {
        match &self.config {
            Some(path) => Settings::expand_path(path),
            None => Settings::default_config_path(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a default configuration and a sample FAQ file
    Init,

    /// Check configuration, credentials and the FAQ file
    Doctor,

    /// Start the HTTP API server
    Serve {
        /// Host to bind to (defaults to server.host from config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (defaults to server.port from config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Ask a single question from the command line
    Ask {
        /// The question to ask
        question: String,

        /// Maximum number of FAQ entries to use as context
        #[arg(short = 'k', long)]
        top_k: Option<usize>,
    },

    /// Show which FAQ entries match a question, without calling the model
    Search {
        /// Search query
        query: String,

        /// Maximum number of results
        #[arg(short = 'k', long)]
        top_k: Option<usize>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Open configuration file in editor
    Edit,

    /// Show configuration file path
    Path,
}
