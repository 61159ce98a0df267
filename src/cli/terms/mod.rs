//! Terms command - prints the legal term glossary of one file

use super::{bootstrap, print_json, read_document, DocumentArgs};
use crate::infrastructure::capability::CapabilityFactory;
use crate::infrastructure::terms::LegalTermExtractor;
use crate::infrastructure::text::clean_text;

pub async fn run(args: DocumentArgs) -> anyhow::Result<()> {
    let config = bootstrap();

    let (_, text) = read_document(&args.file).await?;

    let capabilities = CapabilityFactory::from_config(&config.models);
    let extractor = LegalTermExtractor::new(capabilities.entities);
    let terms = extractor.extract(&clean_text(&text)).await;

    print_json(&terms, args.compact)
}
