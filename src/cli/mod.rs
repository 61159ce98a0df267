//! CLI module for the contract simplifier
//!
//! Provides subcommands that read a contract file and print JSON to stdout:
//! - `process`: full pipeline (clauses, types, terms, simplification, metrics)
//! - `terms`: legal term glossary only
//! - `readability`: metrics and reading ease only

pub mod process;
pub mod readability;
pub mod terms;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::warn;

use crate::config::AppConfig;
use crate::infrastructure::ingestion::ExtractorFactory;
use crate::infrastructure::logging;

/// Contract simplifier - clause analysis, legal terms and plain-language rewriting
#[derive(Parser)]
#[command(name = "contract-simplifier")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the full pipeline on a contract
    Process(process::ProcessArgs),

    /// Extract the legal term glossary
    Terms(DocumentArgs),

    /// Compute readability metrics
    Readability(DocumentArgs),
}

/// Arguments shared by every command
#[derive(Args, Clone)]
pub struct DocumentArgs {
    /// Contract file (.pdf, .docx or .txt)
    pub file: PathBuf,

    /// Print single-line JSON
    #[arg(long)]
    pub compact: bool,
}

/// Load `.env`, configuration and logging
fn bootstrap() -> AppConfig {
    dotenvy::dotenv().ok();

    let (config, load_error) = AppConfig::load_or_default();
    logging::init_logging(&config.logging);

    if let Some(e) = load_error {
        warn!(error = %e, "Invalid configuration, falling back to defaults");
    }

    config
}

/// Read a contract file and extract its text with the extractor for its extension
async fn read_document(path: &Path) -> anyhow::Result<(String, String)> {
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .with_context(|| format!("'{}' is not a file path", path.display()))?;

    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("File not found or unreadable: '{}'", path.display()))?;

    let extracted = ExtractorFactory::extract_file(&filename, bytes).await?;

    Ok((filename, extracted.text))
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> anyhow::Result<()> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };

    println!("{}", json);
    Ok(())
}
