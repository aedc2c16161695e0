//! Doctor command - verify configuration, credentials and the FAQ file.

use crate::cli::Output;
use crate::config::Settings;
use crate::faq::parse_faqs;
use console::style;
use std::path::Path;

/// Check result for a single item.
#[derive(Debug)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum CheckStatus {
    Ok,
    Warning,
    Error,
}

impl CheckResult {
    fn ok(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Ok,
            message: message.to_string(),
            hint: None,
        }
    }

    fn warning(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Warning,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn error(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Error,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn print(&self) {
        let icon = match self.status {
            CheckStatus::Ok => style("✓").green(),
            CheckStatus::Warning => style("!").yellow(),
            CheckStatus::Error => style("✗").red(),
        };

        println!("  {} {} - {}", icon, style(&self.name).bold(), self.message);

        if let Some(hint) = &self.hint {
            println!("    {} {}", style("→").dim(), style(hint).dim());
        }
    }
}

/// Run all diagnostic checks.
pub fn run_doctor(settings: &Settings, config_path: &Path) -> anyhow::Result<()> {
    Output::header("HF Support Doctor");
    println!();
    println!("Checking configuration and data...\n");

    let mut checks = Vec::new();

    println!("{}", style("Inference").bold());
    let inference_checks = vec![
        check_token(settings.inference.token.as_deref()),
        check_model(&settings.inference.model),
    ];
    for check in &inference_checks {
        check.print();
    }
    checks.extend(inference_checks);

    println!();

    println!("{}", style("FAQ Data").bold());
    let faq_check = check_faq_file(&settings.faq_path());
    faq_check.print();
    checks.push(faq_check);

    println!();

    println!("{}", style("Configuration").bold());
    let config_check = check_config_file(config_path);
    config_check.print();
    checks.push(config_check);

    println!();

    let errors = checks.iter().filter(|c| c.status == CheckStatus::Error).count();
    let warnings = checks.iter().filter(|c| c.status == CheckStatus::Warning).count();

    if errors > 0 {
        Output::error(&format!(
            "{} error(s) found. Please fix them before serving requests.",
            errors
        ));
        std::process::exit(1);
    } else if warnings > 0 {
        Output::warning(&format!("All checks passed with {} warning(s).", warnings));
    } else {
        Output::success("All checks passed! Ready to answer questions.");
    }

    Ok(())
}

/// Check whether an access token is configured.
fn check_token(token: Option<&str>) -> CheckResult {
    match token {
        Some(token) if token.chars().count() > 8 => {
            let chars: Vec<char> = token.chars().collect();
            let head: String = chars[..3].iter().collect();
            let tail: String = chars[chars.len() - 4..].iter().collect();
            let masked = format!("{}...{}", head, tail);
            CheckResult::ok("HF_TOKEN", &format!("configured ({})", masked))
        }
        Some(_) => CheckResult::warning(
            "HF_TOKEN",
            "set but looks too short",
            "Expected a Hugging Face access token (hf_...)",
        ),
        None => CheckResult::warning(
            "HF_TOKEN",
            "not set, requests will be anonymous",
            "Set with: export HF_TOKEN='hf_...' (or add it to .env)",
        ),
    }
}

/// Check the configured model id.
fn check_model(model: &str) -> CheckResult {
    if model.trim().is_empty() {
        CheckResult::error(
            "HF_MODEL",
            "empty",
            "Set with: export HF_MODEL='google/flan-t5-base'",
        )
    } else if !model.contains('/') {
        CheckResult::warning(
            "HF_MODEL",
            model,
            "Model ids usually look like 'organization/model-name'",
        )
    } else {
        CheckResult::ok("HF_MODEL", model)
    }
}

/// Check that the FAQ file exists and parses.
fn check_faq_file(path: &Path) -> CheckResult {
    let hint = "Create a sample with: hf-support init (or set FAQ_PATH)";
    match std::fs::read_to_string(path) {
        Ok(content) => match parse_faqs(&content) {
            Ok(faqs) if faqs.is_empty() => CheckResult::warning(
                "FAQ file",
                &format!("{} (no entries)", path.display()),
                "Add rows with question and answer columns",
            ),
            Ok(faqs) => CheckResult::ok(
                "FAQ file",
                &format!("{} ({} entries)", path.display(), faqs.len()),
            ),
            Err(e) => CheckResult::error(
                "FAQ file",
                &format!("{} is malformed: {}", path.display(), e),
                "The header row must include question and answer columns",
            ),
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            CheckResult::error("FAQ file", &format!("{} not found", path.display()), hint)
        }
        Err(e) => CheckResult::error(
            "FAQ file",
            &format!("{}: {}", path.display(), e),
            hint,
        ),
    }
}

/// Check if the config file in use exists.
fn check_config_file(config_path: &Path) -> CheckResult {
    if config_path.exists() {
        CheckResult::ok("Config file", &format!("{}", config_path.display()))
    } else {
        CheckResult::warning(
            "Config file",
            "using defaults",
            "Create with: hf-support init (or hf-support config edit)",
        )
    }
}
