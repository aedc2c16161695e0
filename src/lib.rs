//! hf-support - FAQ-grounded customer support agent
//!
//! Answers free-text support questions by picking the FAQ entries that share
//! the most vocabulary with the question and handing them, together with the
//! question, to a text-generation model on the Hugging Face Inference API.
//!
//! # Architecture
//!
//! - `config` - Settings and prompt templates
//! - `faq` - FAQ file loading and keyword-overlap ranking
//! - `inference` - Inference gateway abstraction and the Hugging Face client
//! - `rag` - Prompt composition and the question answering engine
//! - `cli` - Command line interface and the HTTP server
//!
//! # Example
//!
//! ```rust,no_run
//! use hf_support::config::Settings;
//! use hf_support::inference::HuggingFaceGateway;
//! use hf_support::rag::SupportEngine;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut settings = Settings::load()?;
//!     settings.apply_env();
//!
//!     let gateway = Arc::new(HuggingFaceGateway::new(&settings.inference)?);
//!     let engine = SupportEngine::from_settings(&settings, gateway)?;
//!
//!     let response = engine.ask("How do I reset my password?").await?;
//!     println!("{}", response.answer);
//!     for faq in &response.relevant_faqs {
//!         println!("  Q: {}", faq.question);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod faq;
pub mod inference;
pub mod rag;

pub use error::{Result, SupportError};
