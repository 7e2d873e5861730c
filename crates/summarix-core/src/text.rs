//! Sentence boundary detection and word tokenization.
//!
//! Raw text is first whitespace-normalized, then segmented into sentences
//! and lowercased word tokens. Sentence splitting is heuristic but
//! abbreviation-aware: it will not break after common abbreviations
//! (`Dr.`, `etc.`, `vs.`), after single-letter initials (`U.S.`, `e.g.`),
//! or inside decimal numbers (`3.14`), and it tolerates closing quotes and
//! brackets after terminal punctuation.
//!
//! # Guarantees
//!
//! - Every non-empty input yields at least one sentence.
//! - Sentence positions are contiguous: `0, 1, 2, …, N-1`.
//! - Word tokens are lowercase with surrounding punctuation stripped;
//!   tokens that are empty after stripping are discarded.

use crate::error::{EngineError, Result};
use crate::stopwords::is_stopword;

/// Multi-letter abbreviations that do not end a sentence.
///
/// Dotted abbreviations (`e.g.`, `p.m.`, `U.S.`) are covered separately by
/// the single-letter-segment rule in [`suppress_period_break`].
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "approx",
    "dept", "est", "fig", "gen", "gov", "inc", "ltd", "rev", "vol", "al",
];

/// A sentence with its zero-based position in the document.
///
/// `position` is the sort key for final re-assembly and is never
/// overwritten by ranking order. `tokens` holds all word tokens including
/// stopwords; stopword-filtered access goes through
/// [`content_tokens`](Sentence::content_tokens).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Zero-based position in the source document.
    pub position: usize,
    /// Original surface text (whitespace-normalized).
    pub text: String,
    /// All word tokens, lowercased with surrounding punctuation stripped.
    pub tokens: Vec<String>,
}

impl Sentence {
    /// Tokens remaining after stopword removal.
    pub fn content_tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens
            .iter()
            .map(String::as_str)
            .filter(|t| !is_stopword(t))
    }
}

/// Collapse all whitespace runs to single spaces and trim.
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split text into sentences on `.`, `!`, and `?` boundaries.
///
/// A terminator only ends a sentence when followed (possibly after closing
/// quotes or brackets) by whitespace or end of input, and — for periods —
/// when the preceding word is neither a known abbreviation nor a
/// single-letter segment.
pub fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut start = 0usize;
    let mut i = 0usize;

    while i < chars.len() {
        let c = chars[i];
        if c == '.' || c == '!' || c == '?' {
            // Closing quotes and brackets belong to the current sentence.
            let mut end = i + 1;
            while end < chars.len()
                && matches!(chars[end], '"' | '\'' | ')' | ']' | '\u{201d}' | '\u{2019}')
            {
                end += 1;
            }

            let at_boundary = end >= chars.len() || chars[end].is_whitespace();
            if at_boundary && (c != '.' || !suppress_period_break(&chars, i)) {
                push_trimmed(&mut sentences, &chars[start..end]);
                start = end;
            }
            i = end;
        } else {
            i += 1;
        }
    }

    push_trimmed(&mut sentences, &chars[start..]);

    if sentences.is_empty() {
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            sentences.push(trimmed.to_string());
        }
    }
    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, span: &[char]) {
    let sentence: String = span.iter().collect();
    let trimmed = sentence.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

/// Whether the period at `dot` is part of an abbreviation or initial
/// rather than a sentence boundary.
fn suppress_period_break(chars: &[char], dot: usize) -> bool {
    let mut s = dot;
    while s > 0 && (chars[s - 1].is_alphanumeric() || chars[s - 1] == '.') {
        s -= 1;
    }
    if s == dot {
        return false;
    }
    let word: String = chars[s..dot].iter().collect();
    // Last dot-separated segment: "S" for "U.S", "m" for "p.m", the whole
    // word otherwise.
    let last = word.rsplit('.').next().unwrap_or(word.as_str());
    if last.chars().count() == 1 && last.chars().all(char::is_alphabetic) {
        return true;
    }
    ABBREVIATIONS.contains(&last.to_lowercase().as_str())
}

/// Tokenize text into lowercased word tokens.
///
/// Splits on whitespace, strips surrounding punctuation from each token,
/// and discards tokens that are empty after stripping (pure punctuation).
/// Interior punctuation is preserved, so `don't` and `3.14` survive intact.
pub fn tokenize_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter_map(|raw| {
            let stripped = raw.trim_matches(|c: char| !c.is_alphanumeric());
            if stripped.is_empty() {
                None
            } else {
                Some(stripped.to_lowercase())
            }
        })
        .collect()
}

/// Split text into positioned, tokenized [`Sentence`]s.
///
/// Fails with [`EngineError::EmptyInput`] when the text is empty or
/// whitespace-only; otherwise at least one sentence is returned.
pub fn tokenize_sentences(text: &str) -> Result<Vec<Sentence>> {
    let cleaned = clean_text(text);
    if cleaned.is_empty() {
        return Err(EngineError::EmptyInput);
    }
    Ok(split_sentences(&cleaned)
        .into_iter()
        .enumerate()
        .map(|(position, text)| {
            let tokens = tokenize_words(&text);
            Sentence {
                position,
                text,
                tokens,
            }
        })
        .collect())
}
