//! Process command - runs the full contract pipeline on one file

use clap::Args;
use tracing::info;

use super::{bootstrap, print_json, read_document, DocumentArgs};
use crate::domain::{DocumentInput, SimplificationLevel};
use crate::infrastructure::pipeline::ContractPipeline;

/// Arguments for the process command
#[derive(Args, Clone)]
pub struct ProcessArgs {
    #[command(flatten)]
    pub document: DocumentArgs,

    /// Simplification level (overrides config)
    #[arg(long)]
    pub level: Option<SimplificationLevel>,
}

/// Run the pipeline and print the result
pub async fn run(args: ProcessArgs) -> anyhow::Result<()> {
    let config = bootstrap();

    let level = args.level.unwrap_or(config.pipeline.simplification_level);
    let (filename, text) = read_document(&args.document.file).await?;

    let pipeline = ContractPipeline::from_config(&config.models);
    let status = pipeline.initialize().await;
    info!(
        clause_model = status.clause_model,
        paraphraser = status.paraphraser,
        entity_recognizer = status.entity_recognizer,
        "Capabilities resolved"
    );

    let result = pipeline
        .process(DocumentInput::new(text).with_filename(filename), level)
        .await?;

    print_json(&result, args.document.compact)
}
