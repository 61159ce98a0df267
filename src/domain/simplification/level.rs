use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::DomainError;

/// Floor for the paraphraser's output budget, in tokens
pub const MIN_OUTPUT_TOKENS: usize = 15;

/// Ceiling for the paraphraser's output budget, in tokens
pub const MAX_OUTPUT_TOKENS: usize = 50;

/// Shortest output the paraphraser is asked for, in tokens
pub const MIN_PARAPHRASE_LENGTH: usize = 10;

/// Nucleus sampling cutoff shared by all levels
pub const PARAPHRASE_TOP_P: f32 = 0.95;

/// Intensity of simplification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimplificationLevel {
    #[default]
    Basic,
    Intermediate,
    Advanced,
}

/// Level-dependent paraphrasing and post-processing parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelParameters {
    pub temperature: f32,
    /// Target output length relative to the input word count
    pub length_ratio: f64,
    /// Word budget for hard truncation (applied at `Advanced` only)
    pub max_words: usize,
}

impl SimplificationLevel {
    pub const ALL: [SimplificationLevel; 3] = [Self::Basic, Self::Intermediate, Self::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    pub fn parameters(&self) -> LevelParameters {
        match self {
            Self::Basic => LevelParameters {
                temperature: 0.5,
                length_ratio: 0.85,
                max_words: 30,
            },
            Self::Intermediate => LevelParameters {
                temperature: 0.7,
                length_ratio: 0.70,
                max_words: 25,
            },
            Self::Advanced => LevelParameters {
                temperature: 1.0,
                length_ratio: 0.55,
                max_words: 20,
            },
        }
    }
}

impl LevelParameters {
    /// Output token budget for a sentence of `word_count` words, clamped to 15..=50
    pub fn max_length_for(&self, word_count: usize) -> usize {
        let target = (word_count as f64 * self.length_ratio).floor() as usize;
        target.min(MAX_OUTPUT_TOKENS).max(MIN_OUTPUT_TOKENS)
    }
}

impl fmt::Display for SimplificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SimplificationLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(DomainError::validation(format!(
                "Unknown simplification level '{}', expected basic, intermediate or advanced",
                other
            ))),
        }
    }
}
