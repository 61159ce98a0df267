//! Deterministic clean-up of paraphraser output

use crate::domain::SimplificationLevel;

/// Archaic legal connectives and their plain replacements, applied in order
pub const ARCHAIC_REPLACEMENTS: &[(&str, &str)] = &[
    ("aforementioned", "mentioned"),
    ("herein", "here"),
    ("thereof", "of it"),
    ("whereby", "by which"),
    ("hereunder", "under this"),
    ("thereto", "to it"),
    ("pursuant to", "according to"),
    ("notwithstanding", "despite"),
];

/// Subset used at the intermediate level
const MODERATE_REPLACEMENTS: [&str; 3] = ["aforementioned", "herein", "pursuant to"];

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Replace each listed phrase, lower-case and capitalized forms separately
pub fn replace_archaic(text: &str, phrases: &[(&str, &str)]) -> String {
    phrases.iter().fold(text.to_string(), |acc, (old, new)| {
        acc.replace(old, new)
            .replace(&capitalize(old), &capitalize(new))
    })
}

/// Keep the first `max_words` words, closing with a period when cut after a letter or digit
pub fn truncate_words(text: &str, max_words: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= max_words {
        return text.to_string();
    }

    let mut truncated = words[..max_words].join(" ");
    if truncated.chars().last().is_some_and(char::is_alphanumeric) {
        truncated.push('.');
    }
    truncated
}

/// Level-specific post-processing of one paraphrased sentence
pub fn post_process(text: &str, level: SimplificationLevel) -> String {
    match level {
        SimplificationLevel::Basic => text.to_string(),
        SimplificationLevel::Intermediate => {
            let moderate: Vec<(&str, &str)> = ARCHAIC_REPLACEMENTS
                .iter()
                .copied()
                .filter(|(old, _)| MODERATE_REPLACEMENTS.contains(old))
                .collect();
            replace_archaic(text, &moderate)
        }
        SimplificationLevel::Advanced => {
            let truncated = truncate_words(text, level.parameters().max_words);
            replace_archaic(&truncated, ARCHAIC_REPLACEMENTS)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replacement_preserves_capitalization() {
        assert_eq!(
            replace_archaic("Herein the parties agree as set out herein.", ARCHAIC_REPLACEMENTS),
            "Here the parties agree as set out here."
        );
        assert_eq!(
            replace_archaic("Pursuant to clause 4, notwithstanding the above.", ARCHAIC_REPLACEMENTS),
            "According to clause 4, despite the above."
        );
    }

    #[test]
    fn test_truncate_words() {
        assert_eq!(truncate_words("one two three four", 2), "one two.");
        assert_eq!(truncate_words("one two, three four", 2), "one two,");
        assert_eq!(truncate_words("short text", 5), "short text");
    }

    #[test]
    fn test_levels() {
        let text = "The aforementioned payment is due thereof.";

        assert_eq!(post_process(text, SimplificationLevel::Basic), text);
        assert_eq!(
            post_process(text, SimplificationLevel::Intermediate),
            "The mentioned payment is due thereof."
        );
        assert_eq!(
            post_process(text, SimplificationLevel::Advanced),
            "The mentioned payment is due of it."
        );
    }

    #[test]
    fn test_advanced_truncates_before_replacing() {
        let long = (1..=25).map(|i| format!("w{}", i)).collect::<Vec<_>>().join(" ");
        let processed = post_process(&long, SimplificationLevel::Advanced);

        assert_eq!(processed.split_whitespace().count(), 20);
        assert!(processed.ends_with("w20."));
    }
}
