//! The boundary `summarize` operation.
//!
//! Validates input against the engine's length and ratio contract, runs the
//! full pipeline (clean → sentence-tokenize → frequency table → rank →
//! select), and re-emits the selected sentences in original document order
//! together with compression statistics.
//!
//! Summarizing a summary is the identical operation applied to a different
//! input string — there is no special case for it, which is what the chat
//! composer relies on for "make it shorter".

use serde::Serialize;

use crate::error::{EngineError, Result};
use crate::frequency::FrequencyTable;
use crate::rank::{rank_sentences, select};
use crate::text::tokenize_sentences;

/// Minimum accepted input length, in characters.
pub const MIN_TEXT_CHARS: usize = 10;
/// Maximum accepted input length, in characters.
pub const MAX_TEXT_CHARS: usize = 100_000;

/// Size statistics comparing a summary against its source text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    pub original_words: usize,
    pub original_chars: usize,
    pub summary_words: usize,
    pub summary_chars: usize,
    /// `100 × (1 − summary_words/original_words)`, one decimal place;
    /// `0.0` when the source has no words.
    pub compression_ratio: f64,
}

impl SummaryStats {
    /// Compute stats for a (source, summary) pair.
    ///
    /// Words are whitespace-separated runs; characters are Unicode scalar
    /// values.
    pub fn compute(original: &str, summary: &str) -> Self {
        let original_words = original.split_whitespace().count();
        let summary_words = summary.split_whitespace().count();
        let compression_ratio = if original_words == 0 {
            0.0
        } else {
            let ratio = 100.0 * (1.0 - summary_words as f64 / original_words as f64);
            (ratio * 10.0).round() / 10.0
        };
        Self {
            original_words,
            original_chars: original.chars().count(),
            summary_words,
            summary_chars: summary.chars().count(),
            compression_ratio,
        }
    }
}

/// A generated summary with its statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summarized {
    pub summary: String,
    pub stats: SummaryStats,
}

/// Extractively summarize `text` to roughly `ratio` of its sentences.
///
/// The summary contains verbatim sentences from the source, selected by
/// frequency-weighted ranking and re-sorted into original document order.
/// Identical arguments always produce byte-identical output.
///
/// A document with no content words (numeric or stopword-only text) is not
/// an error: all sentences rank equally and selection keeps the first
/// `K` in document order.
///
/// # Errors
///
/// - [`EngineError::EmptyInput`] — empty or whitespace-only text.
/// - [`EngineError::InputTooShort`] / [`EngineError::InputTooLong`] —
///   outside `[MIN_TEXT_CHARS, MAX_TEXT_CHARS]`.
/// - [`EngineError::InvalidRatio`] — ratio outside `(0, 1]`.
pub fn summarize(text: &str, ratio: f64) -> Result<Summarized> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(EngineError::EmptyInput);
    }
    let chars = trimmed.chars().count();
    if chars < MIN_TEXT_CHARS {
        return Err(EngineError::InputTooShort {
            chars,
            min: MIN_TEXT_CHARS,
        });
    }
    if chars > MAX_TEXT_CHARS {
        return Err(EngineError::InputTooLong {
            chars,
            max: MAX_TEXT_CHARS,
        });
    }
    if !(ratio > 0.0 && ratio <= 1.0) {
        return Err(EngineError::InvalidRatio { ratio });
    }

    let sentences = tokenize_sentences(trimmed)?;
    let table = FrequencyTable::build(
        sentences
            .iter()
            .flat_map(|s| s.tokens.iter().map(String::as_str)),
    );
    let ranking = rank_sentences(&sentences, &table);
    let selected = select(&ranking, &sentences, ratio)?;

    let summary = selected
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let stats = SummaryStats::compute(trimmed, &summary);

    Ok(Summarized { summary, stats })
}
