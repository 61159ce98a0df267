//! Readability command - prints metrics and reading ease of one file

use super::{bootstrap, print_json, read_document, DocumentArgs};
use crate::infrastructure::readability::readability_report;

pub async fn run(args: DocumentArgs) -> anyhow::Result<()> {
    bootstrap();

    let (_, text) = read_document(&args.file).await?;

    print_json(&readability_report(&text), args.compact)
}
