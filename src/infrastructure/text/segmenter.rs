//! Clause segmentation strategies

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::Debug;
use tracing::debug;

use crate::domain::{ClauseMarker, Segment};

/// Marker-delimited spans must be longer than this many characters
pub const MIN_MARKER_CLAUSE_CHARS: usize = 15;

/// Paragraphs must be longer than this many characters
pub const MIN_PARAGRAPH_CHARS: usize = 20;

/// Every clause that survives segmentation is longer than this many characters
pub const MIN_RETAINED_CLAUSE_CHARS: usize = 10;

/// Boilerplate cues, in scan order
static MARKER_PATTERNS: Lazy<Vec<(ClauseMarker, Regex)>> = Lazy::new(|| {
    [
        (ClauseMarker::Annexure, r"Annexure-?\s*"),
        (ClauseMarker::Heading, r"AGREEMENT FORMAT"),
        (ClauseMarker::Subheading, r"\(ON NON-JUDICIAL"),
        (ClauseMarker::Preamble, r"This\s+agreement\s+is\s+made"),
        (ClauseMarker::AndSeparator, r"\bAND\s*\n"),
        (ClauseMarker::Whereas, r"Whereas\s+the\s+Employer"),
        (ClauseMarker::Witnesseth, r"NOW THIS AGREEMENT WITNESSETH"),
        (ClauseMarker::NumberedClause, r"\n\s*\d+\.\s+[A-Z]"),
        (ClauseMarker::InWitness, r"In witness whereof"),
        (ClauseMarker::Seal, r"The Common Seal"),
        (ClauseMarker::Signed, r"Signed Sealed and Delivered"),
        (ClauseMarker::EmployerSig, r"For & on behalf of Employer"),
        (ClauseMarker::ContractorSig, r"For & on behalf of Contractor"),
        (ClauseMarker::Note, r"\bNote:"),
    ]
    .into_iter()
    .map(|(marker, pattern)| {
        let regex = Regex::new(&format!("(?im){}", pattern)).expect("marker pattern");
        (marker, regex)
    })
    .collect()
});

static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n?").expect("line break pattern"));

static BLANK_LINE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("blank line run pattern"));

static BLANK_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n+").expect("blank line pattern"));

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// One way of cutting text into clause-like units
pub trait SegmentationStrategy: Send + Sync + Debug {
    /// Split text into segments; `None` when the strategy does not apply to this text
    fn segment(&self, text: &str) -> Option<Vec<Segment>>;

    /// Get the strategy name
    fn name(&self) -> &'static str;
}

/// Splits at every boilerplate marker match.
///
/// Matches from all marker kinds are merged and sorted by position. Nested matches are
/// kept, so a marker inside another marker's span still opens a new segment.
#[derive(Debug, Clone, Default)]
pub struct MarkerSegmenter;

impl MarkerSegmenter {
    pub fn new() -> Self {
        Self
    }

    fn find_markers(text: &str) -> Vec<(usize, ClauseMarker)> {
        let mut hits: Vec<(usize, ClauseMarker)> = MARKER_PATTERNS
            .iter()
            .flat_map(|(marker, regex)| regex.find_iter(text).map(move |m| (m.start(), *marker)))
            .collect();

        // stable: equal positions keep scan order
        hits.sort_by_key(|(position, _)| *position);
        hits
    }
}

impl SegmentationStrategy for MarkerSegmenter {
    fn segment(&self, text: &str) -> Option<Vec<Segment>> {
        let hits = Self::find_markers(text);
        let (first, _) = *hits.first()?;

        let mut segments = Vec::with_capacity(hits.len() + 1);

        if first > 0 {
            segments.push(Segment::unmarked(text[..first].trim()));
        }

        for (i, (start, marker)) in hits.iter().enumerate() {
            let end = hits.get(i + 1).map_or(text.len(), |(next, _)| *next);
            let span = text[*start..end].trim();

            if char_len(span) > MIN_MARKER_CLAUSE_CHARS {
                segments.push(Segment::new(span, Some(*marker)));
            }
        }

        debug!(markers = hits.len(), segments = segments.len(), "Marker segmentation");
        Some(segments)
    }

    fn name(&self) -> &'static str {
        "marker"
    }
}

/// Splits on blank lines, keeping only substantial paragraphs
#[derive(Debug, Clone, Default)]
pub struct ParagraphSegmenter;

impl ParagraphSegmenter {
    pub fn new() -> Self {
        Self
    }
}

impl SegmentationStrategy for ParagraphSegmenter {
    fn segment(&self, text: &str) -> Option<Vec<Segment>> {
        let paragraphs: Vec<Segment> = BLANK_LINE
            .split(text)
            .map(str::trim)
            .filter(|p| char_len(p) > MIN_PARAGRAPH_CHARS)
            .map(Segment::unmarked)
            .collect();

        if paragraphs.is_empty() {
            None
        } else {
            Some(paragraphs)
        }
    }

    fn name(&self) -> &'static str {
        "paragraph"
    }
}

/// Runs segmentation strategies in order and falls back to the whole text.
///
/// The first strategy that applies decides the split. Its segments are then filtered by
/// [`MIN_RETAINED_CLAUSE_CHARS`]; if nothing survives, the whole text is one clause.
#[derive(Debug)]
pub struct ClauseSegmenter {
    strategies: Vec<Box<dyn SegmentationStrategy>>,
}

impl Default for ClauseSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl ClauseSegmenter {
    /// Marker strategy first, then paragraphs
    pub fn new() -> Self {
        Self::with_strategies(vec![
            Box::new(MarkerSegmenter::new()),
            Box::new(ParagraphSegmenter::new()),
        ])
    }

    pub fn with_strategies(strategies: Vec<Box<dyn SegmentationStrategy>>) -> Self {
        Self { strategies }
    }

    /// Segment text into clauses in document order; empty only for blank input
    pub fn segment(&self, text: &str) -> Vec<Segment> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let text = normalize_line_breaks(text);

        for strategy in &self.strategies {
            let Some(segments) = strategy.segment(&text) else {
                continue;
            };

            let retained: Vec<Segment> = segments
                .into_iter()
                .filter(|s| char_len(&s.text) > MIN_RETAINED_CLAUSE_CHARS)
                .collect();

            if retained.is_empty() {
                debug!(strategy = strategy.name(), "No clause survived filtering, using whole text");
                break;
            }

            debug!(strategy = strategy.name(), clauses = retained.len(), "Segmented document");
            return retained;
        }

        vec![Segment::unmarked(text.trim())]
    }
}

/// Unify line endings and squeeze runs of blank lines into one
fn normalize_line_breaks(text: &str) -> String {
    let text = LINE_BREAK.replace_all(text, "\n");
    BLANK_LINE_RUN.replace_all(&text, "\n\n").into_owned()
}
