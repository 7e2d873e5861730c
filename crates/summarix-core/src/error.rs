//! Engine error taxonomy.
//!
//! All errors are local, synchronous, and non-retryable: a malformed input
//! fails fast and deterministically, and every error propagates to the
//! immediate caller. The engine never logs, retries, or silently recovers
//! from a data-shape error.

use thiserror::Error;

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors produced by the Summarix engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Input text is empty or whitespace-only.
    #[error("input text is empty or whitespace-only")]
    EmptyInput,

    /// Input text is shorter than the configured minimum.
    #[error("input text too short: {chars} characters (minimum {min})")]
    InputTooShort { chars: usize, min: usize },

    /// Input text exceeds the configured maximum.
    #[error("input text too long: {chars} characters (maximum {max})")]
    InputTooLong { chars: usize, max: usize },

    /// Summary ratio outside the valid `(0, 1]` range.
    #[error("ratio must be in (0, 1], got {ratio}")]
    InvalidRatio { ratio: f64 },

    /// Input has no non-stopword tokens.
    ///
    /// Summarization and chat never raise this: ranking degrades to
    /// score-0 stable order and keyword extraction returns an empty list.
    /// It exists for callers that require content words to be present.
    #[error("input has no content words after stopword filtering")]
    NoContentWords,
}
