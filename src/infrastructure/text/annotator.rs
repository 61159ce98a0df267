//! Per-clause sentence and entity annotation

use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;
use tracing::warn;
use unicode_segmentation::UnicodeSegmentation;

use super::clean_text;
use crate::domain::{ClauseAnnotation, EntityExtraction, EntityRecognizer};
use crate::infrastructure::capability::{LazyCapability, ENTITY_RECOGNIZER};

/// A clause number standing alone: "1.", "2.3.", "(a)", "iv)"
static ENUMERATOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(?(?:\d+(?:\.\d+)*|[a-zA-Z]|[ivxlcIVXLC]+)[.)]$").expect("enumerator pattern")
});

/// Split text into trimmed sentences; never empty for non-blank text.
///
/// A clause number that UAX #29 splits off on its own is joined to the sentence after it.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences: Vec<String> = Vec::new();
    let mut pending: Option<&str> = None;

    for sentence in text.unicode_sentences().map(str::trim).filter(|s| !s.is_empty()) {
        if let Some(number) = pending.take() {
            sentences.push(format!("{} {}", number, sentence));
        } else if ENUMERATOR.is_match(sentence) {
            pending = Some(sentence);
        } else {
            sentences.push(sentence.to_string());
        }
    }

    if let Some(number) = pending {
        sentences.push(number.to_string());
    }

    if sentences.is_empty() && !text.trim().is_empty() {
        return vec![text.trim().to_string()];
    }

    sentences
}

/// Ask the recognizer for entities, distinguishing an empty result from a missing or failing one
pub async fn recognize_entities(
    recognizer: &LazyCapability<dyn EntityRecognizer>,
    text: &str,
) -> EntityExtraction {
    let Some(recognizer) = recognizer.instance().await else {
        return EntityExtraction::Unavailable;
    };

    match recognizer.recognize(text).await {
        Ok(entities) => EntityExtraction::Extracted(entities),
        Err(e) => {
            warn!(
                recognizer = recognizer.recognizer_name(),
                error = %e,
                "Entity recognition failed"
            );
            EntityExtraction::Failed {
                reason: e.to_string(),
            }
        }
    }
}

/// Produces sentences and, when a recognizer is available, named entities for a clause
#[derive(Debug, Clone)]
pub struct ClauseAnnotator {
    recognizer: Arc<LazyCapability<dyn EntityRecognizer>>,
}

impl ClauseAnnotator {
    pub fn new(recognizer: Arc<LazyCapability<dyn EntityRecognizer>>) -> Self {
        Self { recognizer }
    }

    /// Annotator with no entity recognition
    pub fn sentences_only() -> Self {
        Self::new(Arc::new(LazyCapability::unavailable(
            ENTITY_RECOGNIZER,
            "not configured",
        )))
    }

    pub async fn extract_entities(&self, text: &str) -> EntityExtraction {
        recognize_entities(&self.recognizer, text).await
    }

    /// Clean one segmented clause and annotate it
    pub async fn annotate(&self, raw_text: &str) -> ClauseAnnotation {
        let cleaned_text = clean_text(raw_text);
        let sentences = split_sentences(&cleaned_text);
        let entities = self.extract_entities(&cleaned_text).await.into_entities();

        ClauseAnnotation {
            raw_text: raw_text.to_string(),
            cleaned_text,
            sentences,
            entities,
        }
    }
}
