//! Simplification levels and the paraphrasing capability seam

mod level;
mod paraphraser;

pub use level::{
    LevelParameters, SimplificationLevel, MAX_OUTPUT_TOKENS, MIN_OUTPUT_TOKENS,
    MIN_PARAPHRASE_LENGTH, PARAPHRASE_TOP_P,
};
pub use paraphraser::{ParaphraseRequest, Paraphraser};

#[cfg(test)]
pub use paraphraser::MockParaphraser;
