//! Text simplification over an optional paraphrasing capability

mod model;
mod post_process;
mod service;

pub use model::LlmParaphraser;
pub use post_process::{post_process, replace_archaic, truncate_words, ARCHAIC_REPLACEMENTS};
pub use service::{
    SimplificationService, MAX_EXPANSION_RATIO, MIN_ACCEPTED_CHARS, MIN_SENTENCE_CHARS,
    MIN_WORDS_TO_SIMPLIFY,
};
