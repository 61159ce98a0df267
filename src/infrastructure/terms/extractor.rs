use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

use crate::domain::terms::{DEFINED_TERM_CATEGORY, LEXICON};
use crate::domain::{EntityExtraction, EntityRecognizer, LegalTerm, TermSource};
use crate::infrastructure::capability::{LazyCapability, ENTITY_RECOGNIZER};
use crate::infrastructure::text::recognize_entities;

/// Entity recognition only looks at this many leading characters
pub const ENTITY_SCAN_CHARS: usize = 5000;

/// Entity labels that become glossary terms
pub const TERM_ENTITY_LABELS: [&str; 3] = ["LAW", "ORG", "EVENT"];

static QUOTED_TERM: Lazy<Regex> = Lazy::new(|| {
    Regex::new("[\"'\u{201C}\u{2018}]([A-Z][A-Za-z\\s]{2,30})[\"'\u{201D}\u{2019}]")
        .expect("quoted term pattern")
});

static DEFINITION_CUE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Z][A-Za-z\s]{2,30})\s*(?:\(hereinafter|shall mean|means|refers to)")
        .expect("definition cue pattern")
});

/// Ordered, case-insensitively unique term list
#[derive(Debug, Default)]
struct TermCollector {
    terms: Vec<LegalTerm>,
    seen: HashSet<String>,
}

impl TermCollector {
    fn contains(&self, key: &str) -> bool {
        self.seen.contains(key)
    }

    /// Keep the term unless an earlier pass already claimed its key
    fn offer(&mut self, term: &str, category: &str, source: TermSource) {
        let key = term.to_lowercase();
        if self.seen.insert(key) {
            self.terms.push(LegalTerm::new(term, category, source));
        }
    }
}

/// Builds the glossary of a document from quoted terms, definition cues, the lexicon and entities.
///
/// Earlier passes win: a term found quoted is not repeated by the lexicon or entity passes.
#[derive(Debug, Clone)]
pub struct LegalTermExtractor {
    recognizer: Arc<LazyCapability<dyn EntityRecognizer>>,
}

impl LegalTermExtractor {
    pub fn new(recognizer: Arc<LazyCapability<dyn EntityRecognizer>>) -> Self {
        Self { recognizer }
    }

    /// Extractor without the entity pass
    pub fn patterns_only() -> Self {
        Self::new(Arc::new(LazyCapability::unavailable(
            ENTITY_RECOGNIZER,
            "not configured",
        )))
    }

    /// Extract unique terms in discovery order
    pub async fn extract(&self, text: &str) -> Vec<LegalTerm> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let mut collector = TermCollector::default();
        collect_pattern_terms(text, &mut collector);

        let prefix: String = text.chars().take(ENTITY_SCAN_CHARS).collect();
        match recognize_entities(&self.recognizer, &prefix).await {
            EntityExtraction::Extracted(entities) => {
                for entity in entities {
                    if !TERM_ENTITY_LABELS.contains(&entity.label.as_str()) {
                        continue;
                    }

                    let surface = entity.text.trim();
                    if surface.contains(['"', '\'']) || has_repeated_words(surface) {
                        continue;
                    }

                    let category = format!("{} Entity", entity.label);
                    collector.offer(surface, &category, TermSource::Entity);
                }
            }
            EntityExtraction::Unavailable => {}
            EntityExtraction::Failed { reason } => {
                debug!(reason = %reason, "Entity pass contributed no terms");
            }
        }

        debug!(terms = collector.terms.len(), "Extracted legal terms");
        collector.terms
    }

    /// Quoted, definition-cue and lexicon passes only
    pub fn extract_patterns(text: &str) -> Vec<LegalTerm> {
        let mut collector = TermCollector::default();
        if !text.trim().is_empty() {
            collect_pattern_terms(text, &mut collector);
        }
        collector.terms
    }
}

fn collect_pattern_terms(text: &str, collector: &mut TermCollector) {
    for captures in QUOTED_TERM.captures_iter(text) {
        collector.offer(captures[1].trim(), DEFINED_TERM_CATEGORY, TermSource::QuotedTerm);
    }

    for captures in DEFINITION_CUE.captures_iter(text) {
        collector.offer(
            captures[1].trim(),
            DEFINED_TERM_CATEGORY,
            TermSource::DefinitionPattern,
        );
    }

    let lowered = text.to_lowercase();
    for (keyword, category) in LEXICON {
        if lowered.contains(keyword) && !collector.contains(keyword) {
            collector.offer(&title_case(keyword), category, TermSource::Lexicon);
        }
    }
}

/// Capitalize the first letter of every alphabetic run ("non-compete" → "Non-Compete")
fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_alphabetic = false;

    for c in text.chars() {
        if previous_alphabetic {
            result.extend(c.to_lowercase());
        } else {
            result.extend(c.to_uppercase());
        }
        previous_alphabetic = c.is_alphabetic();
    }

    result
}

fn has_repeated_words(text: &str) -> bool {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    let unique: HashSet<&str> = words.iter().copied().collect();
    unique.len() != words.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::annotation::MockEntityRecognizer;
    use crate::domain::terms::GENERIC_DEFINITION;

    fn extractor_with(recognizer: MockEntityRecognizer) -> (LegalTermExtractor, Arc<MockEntityRecognizer>) {
        let recognizer = Arc::new(recognizer);
        let capability: Arc<dyn EntityRecognizer> = recognizer.clone();
        let extractor =
            LegalTermExtractor::new(Arc::new(LazyCapability::available("entities", capability)));
        (extractor, recognizer)
    }

    fn term_names(terms: &[LegalTerm]) -> Vec<&str> {
        terms.iter().map(|t| t.term.as_str()).collect()
    }

    #[test]
    fn test_quoted_term() {
        let terms = LegalTermExtractor::extract_patterns(
            "This agreement starts on the \"Effective Date\" stated below.",
        );

        let matches: Vec<&LegalTerm> = terms.iter().filter(|t| t.term == "Effective Date").collect();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].category, "Defined Term");
        assert_eq!(matches[0].source, TermSource::QuotedTerm);
        assert_eq!(
            matches[0].definition,
            "The date when a contract or agreement officially begins"
        );
    }

    #[test]
    fn test_curly_quotes() {
        let terms = LegalTermExtractor::extract_patterns("the \u{201C}Service Provider\u{201D} shall");
        assert_eq!(term_names(&terms), vec!["Service Provider"]);
    }

    #[test]
    fn test_definition_cue() {
        let terms = LegalTermExtractor::extract_patterns("Confidential Information means any data.");

        assert_eq!(terms[0].term, "Confidential Information");
        assert_eq!(terms[0].source, TermSource::DefinitionPattern);
        assert_eq!(terms[0].definition, GENERIC_DEFINITION);
        // "confidential" still comes from the lexicon under its own key
        assert_eq!(terms[1].term, "Confidential");
        assert_eq!(terms[1].category, "Confidentiality");
    }

    #[test]
    fn test_quoted_wins_over_lexicon() {
        let terms = LegalTermExtractor::extract_patterns(
            "The \"Indemnity\" below applies. The indemnity is capped.",
        );

        let indemnity: Vec<&LegalTerm> =
            terms.iter().filter(|t| t.key() == "indemnity").collect();
        assert_eq!(indemnity.len(), 1);
        assert_eq!(indemnity[0].category, "Defined Term");
    }

    #[test]
    fn test_lexicon_order_and_title_case() {
        let terms = LegalTermExtractor::extract_patterns(
            "damages for breach of the non-compete and the security deposit",
        );

        assert_eq!(
            term_names(&terms),
            vec!["Security Deposit", "Non-Compete", "Damages"]
        );
        assert_eq!(terms[1].category, "Non-Compete");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("force majeure"), "Force Majeure");
        assert_eq!(title_case("non-compete"), "Non-Compete");
    }

    #[tokio::test]
    async fn test_empty_text() {
        let (extractor, recognizer) = extractor_with(MockEntityRecognizer::new());
        assert!(extractor.extract("   ").await.is_empty());
        assert!(recognizer.inputs().is_empty());
    }

    #[tokio::test]
    async fn test_entity_terms_filtered() {
        let (extractor, _) = extractor_with(
            MockEntityRecognizer::new()
                .with_entity("Arbitration Act", "LAW")
                .with_entity("Acme Ltd", "ORG")
                .with_entity("John Smith", "PERSON")
                .with_entity("the \"Company\"", "ORG")
                .with_entity("Board Board Meeting", "EVENT")
                .with_entity("acme ltd", "ORG"),
        );

        let terms = extractor.extract("Plain text without any cues.").await;

        assert_eq!(term_names(&terms), vec!["Arbitration Act", "Acme Ltd"]);
        assert_eq!(terms[0].category, "LAW Entity");
        assert_eq!(terms[1].category, "ORG Entity");
        assert_eq!(terms[1].source, TermSource::Entity);
    }

    #[tokio::test]
    async fn test_entity_scan_is_bounded() {
        let (extractor, recognizer) = extractor_with(MockEntityRecognizer::new());
        let text = "a".repeat(ENTITY_SCAN_CHARS + 100);

        extractor.extract(&text).await;

        assert_eq!(recognizer.inputs()[0].chars().count(), ENTITY_SCAN_CHARS);
    }

    #[tokio::test]
    async fn test_entity_failure_contributes_nothing() {
        let (extractor, _) = extractor_with(MockEntityRecognizer::new().with_error("down"));

        let terms = extractor.extract("The indemnity is capped.").await;
        assert_eq!(term_names(&terms), vec!["Indemnity"]);
    }
}
