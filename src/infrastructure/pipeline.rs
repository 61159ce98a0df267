//! Contract pipeline: document → clauses → classification → terms → simplification → metrics

use futures::future::join_all;
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::config::ModelsConfig;
use crate::domain::pipeline::UNTITLED_DOCUMENT;
use crate::domain::{
    CapabilityStatus, Clause, DocumentInput, DomainError, PipelineResult, Segment,
    SimplificationLevel,
};
use crate::infrastructure::capability::{CapabilityFactory, ModelCapabilities};
use crate::infrastructure::classifier::ClassificationService;
use crate::infrastructure::readability::readability_report;
use crate::infrastructure::simplifier::SimplificationService;
use crate::infrastructure::terms::LegalTermExtractor;
use crate::infrastructure::text::{clean_text, ClauseAnnotator, ClauseSegmenter};

/// Runs every stage for one document.
///
/// Capabilities are injected, so the same pipeline runs model-backed or fully deterministic.
/// Clauses are annotated, classified and simplified concurrently; results keep document order.
#[derive(Debug, Clone)]
pub struct ContractPipeline {
    segmenter: Arc<ClauseSegmenter>,
    annotator: ClauseAnnotator,
    classification: ClassificationService,
    simplification: SimplificationService,
    terms: LegalTermExtractor,
    capabilities: ModelCapabilities,
}

impl ContractPipeline {
    pub fn new(capabilities: ModelCapabilities) -> Self {
        Self {
            segmenter: Arc::new(ClauseSegmenter::new()),
            annotator: ClauseAnnotator::new(capabilities.entities.clone()),
            classification: ClassificationService::new(capabilities.classifier.clone()),
            simplification: SimplificationService::new(capabilities.paraphraser.clone()),
            terms: LegalTermExtractor::new(capabilities.entities.clone()),
            capabilities,
        }
    }

    pub fn from_config(config: &ModelsConfig) -> Self {
        Self::new(CapabilityFactory::from_config(config))
    }

    /// Pipeline with every model capability missing
    pub fn deterministic() -> Self {
        Self::new(ModelCapabilities::unavailable())
    }

    /// Resolve all capabilities; safe to call any number of times
    pub async fn initialize(&self) -> CapabilityStatus {
        let (clause_model, paraphraser, entity_recognizer) = tokio::join!(
            self.classification.initialize(),
            self.simplification.initialize(),
            self.capabilities.entities.is_available(),
        );

        CapabilityStatus {
            clause_model,
            paraphraser,
            entity_recognizer,
        }
    }

    #[instrument(skip(self, input), fields(filename = ?input.filename, level = %level))]
    pub async fn process(
        &self,
        input: DocumentInput,
        level: SimplificationLevel,
    ) -> Result<PipelineResult, DomainError> {
        if let Some(message) = input.extraction_error() {
            return Err(DomainError::extraction(message));
        }

        let status = self.initialize().await;

        let segments = self.segmenter.segment(&input.raw_text);
        let clauses: Vec<Clause> = join_all(
            segments
                .into_iter()
                .enumerate()
                .map(|(i, segment)| self.process_clause(i + 1, segment, level)),
        )
        .await;

        let legal_terms = self.terms.extract(&clean_text(&input.raw_text)).await;

        let simplified_text = clauses
            .iter()
            .map(|c| c.simplified.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        let original = readability_report(&input.raw_text);
        let simplified = readability_report(&simplified_text);
        let clause_type_summary = PipelineResult::summarize_types(&clauses);

        let DocumentInput {
            raw_text,
            filename,
            document_id,
        } = input;

        let document_id = document_id
            .or_else(|| filename.clone())
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let document_title = filename.unwrap_or_else(|| UNTITLED_DOCUMENT.to_string());

        info!(
            document_id = %document_id,
            clauses = clauses.len(),
            terms = legal_terms.len(),
            degraded = status.is_degraded(),
            "Document processed"
        );

        Ok(PipelineResult {
            document_id,
            document_title,
            word_count: raw_text.split_whitespace().count(),
            raw_text,
            clause_count: clauses.len(),
            simplification_level: level,
            clauses,
            legal_terms,
            original_readability: original.metrics,
            simplified_readability: simplified.metrics,
            original_reading_ease: original.reading_ease,
            simplified_reading_ease: simplified.reading_ease,
            simplified_text,
            clause_type_summary,
            capabilities: status.into(),
            processed_at: chrono::Utc::now(),
        })
    }

    async fn process_clause(
        &self,
        index: usize,
        segment: Segment,
        level: SimplificationLevel,
    ) -> Clause {
        let annotation = self.annotator.annotate(&segment.text).await;

        let (clause_type, simplified) = tokio::join!(
            self.classification.classify(&annotation.cleaned_text),
            self.simplification.simplify(&annotation.cleaned_text, level),
        );

        Clause::new(index, annotation, segment.marker, clause_type, simplified)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::annotation::MockEntityRecognizer;
    use crate::domain::clause::MockClauseClassifier;
    use crate::domain::simplification::MockParaphraser;
    use crate::domain::{
        ClauseClassifier, ClauseMarker, ClauseType, EntityRecognizer, Paraphraser, TermSource,
    };
    use crate::infrastructure::capability::{
        LazyCapability, CLAUSE_MODEL, ENTITY_RECOGNIZER, PARAPHRASER,
    };

    const SCENARIO: &str = "This Agreement is made between the Parties. \
                            The Contractor shall indemnify the Employer against all claims.";

    const NUMBERED: &str = "SERVICE AGREEMENT\n\
        \n\
        1. The Contractor shall keep all information confidential during the term.\n\
        2. Either party may terminate this agreement with thirty days notice.\n\
        3. The Employer shall make payment within fifteen days of each invoice.";

    fn model_backed(
        classifier: Arc<dyn ClauseClassifier>,
        paraphraser: Arc<dyn Paraphraser>,
        recognizer: Arc<dyn EntityRecognizer>,
    ) -> ContractPipeline {
        ContractPipeline::new(ModelCapabilities {
            classifier: Arc::new(LazyCapability::available(CLAUSE_MODEL, classifier)),
            paraphraser: Arc::new(LazyCapability::available(PARAPHRASER, paraphraser)),
            entities: Arc::new(LazyCapability::available(ENTITY_RECOGNIZER, recognizer)),
        })
    }

    #[tokio::test]
    async fn test_end_to_end_deterministic() {
        let pipeline = ContractPipeline::deterministic();

        let result = pipeline
            .process(DocumentInput::new(SCENARIO), SimplificationLevel::Basic)
            .await
            .unwrap();

        assert_eq!(result.clause_count, 1);
        let clause = &result.clauses[0];
        assert_eq!(clause.index, 1);
        assert_eq!(clause.marker, Some(ClauseMarker::Preamble));
        assert_eq!(clause.sentences.len(), 2);
        assert_eq!(clause.clause_type, ClauseType::Indemnity);
        assert!(clause.entities.is_empty());

        let indemnify = result
            .legal_terms
            .iter()
            .find(|t| t.term == "Indemnify")
            .unwrap();
        assert_eq!(indemnify.category, "Indemnity Clause");
        assert_eq!(indemnify.source, TermSource::Lexicon);

        // 16 alphabetic words; punctuation never counts
        assert_eq!(result.original_readability.word_count, 16);
        assert_eq!(result.original_readability.sentence_count, 2);
        assert_eq!(result.word_count, 16);
    }

    #[tokio::test]
    async fn test_degraded_mode_returns_text_unchanged() {
        let pipeline = ContractPipeline::deterministic();

        let result = pipeline
            .process(DocumentInput::new(SCENARIO), SimplificationLevel::Advanced)
            .await
            .unwrap();

        assert!(result.capabilities.degraded);
        assert!(!result.capabilities.status.paraphraser);
        assert_eq!(result.clauses[0].simplified, result.clauses[0].cleaned_text);
        assert_eq!(result.simplified_text, SCENARIO);
        assert_eq!(result.simplification_level, SimplificationLevel::Advanced);
    }

    #[tokio::test]
    async fn test_numbered_clauses_keep_document_order() {
        let pipeline = ContractPipeline::deterministic();

        let result = pipeline
            .process(
                DocumentInput::new(NUMBERED).with_filename("services.txt"),
                SimplificationLevel::Basic,
            )
            .await
            .unwrap();

        let types: Vec<ClauseType> = result.clauses.iter().map(|c| c.clause_type).collect();
        assert_eq!(
            types,
            vec![
                ClauseType::Other,
                ClauseType::Confidentiality,
                ClauseType::Termination,
                ClauseType::PaymentTerms,
            ]
        );

        let indices: Vec<usize> = result.clauses.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![1, 2, 3, 4]);
        assert!(result.clauses[1].cleaned_text.starts_with("1. The Contractor"));
        assert_eq!(result.clauses[1].marker, Some(ClauseMarker::NumberedClause));

        // clause numbers stay with their sentence
        assert_eq!(result.clauses[1].sentences.len(), 1);
        assert!(result.clauses[1].sentences[0].starts_with("1. The Contractor"));
        assert_eq!(result.original_readability.sentence_count, 4);

        assert_eq!(result.clause_count, result.clauses.len());
        assert_eq!(result.clause_type_summary.values().sum::<usize>(), 4);
        assert_eq!(result.document_title, "services.txt");
        assert_eq!(result.document_id, "services.txt");
    }

    #[tokio::test]
    async fn test_extraction_error_marker_aborts() {
        let pipeline = ContractPipeline::deterministic();

        let err = pipeline
            .process(
                DocumentInput::new("[ERROR] Unable to read scanned PDF"),
                SimplificationLevel::Basic,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Extraction { .. }));
        assert!(err.to_string().contains("Unable to read scanned PDF"));
    }

    #[tokio::test]
    async fn test_blank_document_yields_empty_result() {
        let pipeline = ContractPipeline::deterministic();

        let result = pipeline
            .process(DocumentInput::new("   \n  "), SimplificationLevel::Basic)
            .await
            .unwrap();

        assert_eq!(result.clause_count, 0);
        assert!(result.legal_terms.is_empty());
        assert_eq!(result.original_reading_ease, 0.0);
        assert_eq!(result.document_title, UNTITLED_DOCUMENT);
        assert!(Uuid::parse_str(&result.document_id).is_ok());
    }

    #[tokio::test]
    async fn test_explicit_document_id_wins() {
        let pipeline = ContractPipeline::deterministic();

        let input = DocumentInput::new(SCENARIO)
            .with_filename("lease.txt")
            .with_document_id("doc-42");
        let result = pipeline.process(input, SimplificationLevel::Basic).await.unwrap();

        assert_eq!(result.document_id, "doc-42");
        assert_eq!(result.document_title, "lease.txt");
    }

    #[tokio::test]
    async fn test_model_backed_capabilities() {
        let mut paraphraser = MockParaphraser::new();
        paraphraser
            .expect_paraphrase()
            .returning(|_| Ok("The builder must cover the owner's losses.".to_string()));
        paraphraser.expect_paraphraser_name().return_const("mock");

        let recognizer = MockEntityRecognizer::new().with_entity("Employer", "ORG");
        let pipeline = model_backed(
            Arc::new(MockClauseClassifier::new(ClauseType::Warranties)),
            Arc::new(paraphraser),
            Arc::new(recognizer),
        );

        let status = pipeline.initialize().await;
        assert!(!status.is_degraded());

        let result = pipeline
            .process(DocumentInput::new(SCENARIO), SimplificationLevel::Basic)
            .await
            .unwrap();

        let clause = &result.clauses[0];
        assert_eq!(clause.clause_type, ClauseType::Warranties);
        assert_eq!(clause.entities.len(), 1);
        assert!(clause.simplified.contains("The builder must cover the owner's losses."));
        assert!(!result.capabilities.degraded);
        assert_eq!(result.clause_type_summary.get("Warranties"), Some(&1));
    }

    #[tokio::test]
    async fn test_failing_models_fall_back_per_unit() {
        let mut paraphraser = MockParaphraser::new();
        paraphraser
            .expect_paraphrase()
            .returning(|_| Err(DomainError::provider("mock", "timeout")));
        paraphraser.expect_paraphraser_name().return_const("mock");

        let pipeline = model_backed(
            Arc::new(MockClauseClassifier::failing("inference error")),
            Arc::new(paraphraser),
            Arc::new(MockEntityRecognizer::new().with_error("model crashed")),
        );

        let result = pipeline
            .process(DocumentInput::new(SCENARIO), SimplificationLevel::Intermediate)
            .await
            .unwrap();

        let clause = &result.clauses[0];
        assert_eq!(clause.clause_type, ClauseType::Indemnity);
        assert_eq!(clause.simplified, clause.cleaned_text);
        assert!(clause.entities.is_empty());
        assert!(!result.capabilities.degraded);
    }

    #[tokio::test]
    async fn test_result_serializes_for_storage() {
        let pipeline = ContractPipeline::deterministic();

        let result = pipeline
            .process(DocumentInput::new(SCENARIO), SimplificationLevel::Basic)
            .await
            .unwrap();

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["clause_count"], 1);
        assert_eq!(json["simplification_level"], "basic");
        assert_eq!(json["clauses"][0]["type"], "Indemnity");
        assert_eq!(json["clause_type_summary"]["Indemnity"], 1);
        assert_eq!(json["capabilities"]["degraded"], true);
        assert!(json["original_readability"]["word_count"].is_number());
    }
}
