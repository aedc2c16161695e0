//! hf-support CLI entry point.

use anyhow::Result;
use clap::Parser;
use hf_support::cli::{commands, Cli, Commands};
use hf_support::config::Settings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up HF_TOKEN / HF_MODEL from a local .env before anything reads the environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| format!("hf_support={},tower_http={}", log_level, log_level)),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Load configuration; `stored` is what gets written back, `settings` what runs
    let config_path = cli.config_path();
    let stored = Settings::load_from(Some(&config_path))?;
    let settings = stored.with_env();

    match &cli.command {
        Commands::Init => {
            commands::run_init(&settings, &stored, &config_path)?;
        }

        Commands::Doctor => {
            commands::run_doctor(&settings, &config_path)?;
        }

        Commands::Serve { host, port } => {
            commands::run_serve(host.clone(), *port, settings).await?;
        }

        Commands::Ask { question, top_k } => {
            commands::run_ask(question, *top_k, settings).await?;
        }

        Commands::Search { query, top_k } => {
            commands::run_search(query, *top_k, settings).await?;
        }

        Commands::Config { action } => {
            commands::run_config(action, settings, &stored, &config_path)?;
        }
    }

    Ok(())
}
