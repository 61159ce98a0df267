//! Readability measurements of a text snapshot

use serde::{Deserialize, Serialize};

/// Sentence and word statistics; all zero for empty text
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub sentence_count: usize,
    /// Alphabetic tokens only
    pub word_count: usize,
    /// Rounded to two decimals, 0 when there are no sentences
    pub avg_words_per_sentence: f64,
    pub complex_word_count: usize,
}

/// Metrics plus the 0..=100 reading-ease score for the same text
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityReport {
    #[serde(flatten)]
    pub metrics: Metrics,
    pub reading_ease: f64,
}

/// Round to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
