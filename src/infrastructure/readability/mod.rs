//! Readability metrics and Flesch reading ease
//!
//! Every function here is total: empty or odd input yields zeros, never an error.

use unicode_segmentation::UnicodeSegmentation;

use crate::domain::readability::{round2, Metrics, ReadabilityReport};
use crate::infrastructure::text::split_sentences;

const VOWELS: [char; 6] = ['a', 'e', 'i', 'o', 'u', 'y'];

/// Words with at least this many syllables are complex
pub const COMPLEX_WORD_SYLLABLES: usize = 3;

/// Estimate syllables by counting vowel groups, ignoring one trailing 'e'; at least 1
pub fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();

    if word.chars().count() <= 1 {
        return 1;
    }

    let stem = word.strip_suffix('e').unwrap_or(&word);

    let mut count = 0;
    let mut previous_was_vowel = false;
    for c in stem.chars() {
        let is_vowel = VOWELS.contains(&c);
        if is_vowel && !previous_was_vowel {
            count += 1;
        }
        previous_was_vowel = is_vowel;
    }

    count.max(1)
}

/// Longer than two characters with three or more syllables
pub fn is_complex_word(word: &str) -> bool {
    word.chars().count() > 2 && count_syllables(word) >= COMPLEX_WORD_SYLLABLES
}

/// Word tokens made only of letters
pub fn alphabetic_words(text: &str) -> Vec<&str> {
    text.unicode_words()
        .filter(|w| w.chars().all(char::is_alphabetic))
        .collect()
}

pub fn count_complex_words(text: &str) -> usize {
    let lowered = text.to_lowercase();
    lowered.unicode_words().filter(|w| is_complex_word(w)).count()
}

pub fn calculate_metrics(text: &str) -> Metrics {
    if text.trim().is_empty() {
        return Metrics::default();
    }

    let sentence_count = split_sentences(text).len();
    let word_count = alphabetic_words(text).len();

    let avg_words_per_sentence = if sentence_count > 0 {
        round2(word_count as f64 / sentence_count as f64)
    } else {
        0.0
    };

    Metrics {
        sentence_count,
        word_count,
        avg_words_per_sentence,
        complex_word_count: count_complex_words(text),
    }
}

/// `206.835 − 1.015 × words/sentences − 84.6 × syllables/words`, clamped to 0..=100
pub fn calculate_reading_ease(text: &str) -> f64 {
    if text.trim().is_empty() {
        return 0.0;
    }

    let sentences = split_sentences(text).len();
    let words = alphabetic_words(text);

    if sentences == 0 || words.is_empty() {
        return 0.0;
    }

    let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();
    let words_per_sentence = words.len() as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words.len() as f64;

    let score = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;
    if !score.is_finite() {
        return 0.0;
    }

    round2(score.clamp(0.0, 100.0))
}

pub fn readability_report(text: &str) -> ReadabilityReport {
    ReadabilityReport {
        metrics: calculate_metrics(text),
        reading_ease: calculate_reading_ease(text),
    }
}
