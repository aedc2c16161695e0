//! Init command - interactive first-run setup.

use crate::cli::Output;
use crate::config::Settings;
use console::style;
use std::io::{self, Write};
use std::path::Path;

/// FAQ entries written when no FAQ file exists yet.
const SAMPLE_FAQS: &str = "\
question,answer
How do I reset my password,\"Click \"\"Forgot password\"\" on the login page and follow the emailed link.\"
How do I contact support,Email support@example.com or use the chat widget on our website.
Where is my order,Open the Orders page in your account to see tracking details.
How do I cancel my subscription,Go to Account > Billing and choose Cancel subscription.
What is your refund policy,Purchases can be refunded within 30 days of delivery.
";

/// Run the init command for first-time setup.
///
/// `settings` includes environment overrides; `stored` is the file content
/// written to `config_path`.
pub fn run_init(
    settings: &Settings,
    stored: &Settings,
    config_path: &Path,
) -> anyhow::Result<()> {
    Output::header("HF Support Setup");
    println!();

    // Step 1: Check API token
    println!("{}", style("Step 1: Checking API configuration").bold().cyan());
    println!();

    if settings.inference.token.is_none() {
        Output::warning("HF_TOKEN is not set.");
        println!();
        println!("  Requests to the Hugging Face Inference API will be anonymous and heavily rate limited.");
        println!(
            "  Create a token at: {}",
            style("https://huggingface.co/settings/tokens").underlined()
        );
        println!("  Then add it to your environment or a .env file:");
        println!("  {}", style("HF_TOKEN=hf_...").green());
        println!();

        if !prompt_continue("Continue without a token?")? {
            println!();
            Output::info("Setup cancelled. Set HF_TOKEN and run 'hf-support init' again.");
            return Ok(());
        }
    } else {
        Output::success("Hugging Face token is configured!");
    }
    Output::kv("Model", &settings.inference.model);

    println!();

    // Step 2: FAQ data
    println!("{}", style("Step 2: FAQ data").bold().cyan());
    println!();

    let faq_path = settings.faq_path();
    if faq_path.exists() {
        Output::info(&format!("FAQ file exists: {}", faq_path.display()));
    } else if prompt_continue("Create a sample FAQ file?")? {
        write_sample_faqs(&faq_path)?;
        Output::success(&format!("Created FAQ file: {}", faq_path.display()));
    } else {
        Output::warning("No FAQ file. The server will answer every request with an error.");
    }

    println!();

    // Step 3: Create config file
    println!("{}", style("Step 3: Configuration file").bold().cyan());
    println!();

    if config_path.exists() {
        Output::info(&format!("Config file exists: {}", config_path.display()));
    } else if prompt_continue("Create default configuration file?")? {
        stored.save_to(config_path)?;
        Output::success(&format!("Created config file: {}", config_path.display()));
        println!();
        println!("  Edit your config with: {}", style("hf-support config edit").green());
    } else {
        Output::info("Skipped config file creation. Using defaults.");
    }

    println!();

    println!("{}", style("Setup Complete!").bold().green());
    println!();
    println!("Next steps:");
    println!("  {} Check system status", style("hf-support doctor").cyan());
    println!("  {} Try the ranking", style("hf-support search \"<question>\"").cyan());
    println!("  {} Start the API", style("hf-support serve").cyan());
    println!();
    println!("For more help: {}", style("hf-support --help").cyan());

    Ok(())
}

/// Write the sample FAQ file, creating parent directories.
fn write_sample_faqs(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, SAMPLE_FAQS)
}

/// Prompt user for yes/no confirmation.
fn prompt_continue(message: &str) -> io::Result<bool> {
    print!("{} {} ", style("?").cyan(), message);
    print!("{} ", style("[y/N]").dim());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let answer = input.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
