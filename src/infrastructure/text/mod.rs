//! Text stages: normalization, clause segmentation, annotation and entity recognition

mod annotator;
mod entities;
mod normalizer;
mod segmenter;

pub use annotator::{recognize_entities, split_sentences, ClauseAnnotator};
pub use entities::LlmEntityRecognizer;
pub use normalizer::clean_text;
pub use segmenter::{
    ClauseSegmenter, MarkerSegmenter, ParagraphSegmenter, SegmentationStrategy,
    MIN_MARKER_CLAUSE_CHARS, MIN_PARAGRAPH_CHARS, MIN_RETAINED_CLAUSE_CHARS,
};
