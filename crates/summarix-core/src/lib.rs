//! # Summarix Core
//!
//! The text-analysis-and-ranking engine behind Summarix: frequency-based
//! extractive summarization plus a lexical intent matcher for answering
//! questions about an already-produced summary.
//!
//! This crate contains no async runtime, no I/O, and no server
//! dependencies. Every operation is a pure function of its inputs; the only
//! process-wide state is the read-only English stopword set and the intent
//! pattern table, both `'static` and safe for unsynchronized concurrent
//! reads.
//!
//! ## Pipeline
//!
//! ```text
//! raw text ──▶ sentences + tokens ──▶ frequency table ──▶ sentence
//!              (text)                 (frequency)          ranking (rank)
//!                                                             │
//!                          summary ◀── ratio-driven selection ◀┘
//!                             │
//!            user query ──▶ intent ──▶ composed answer (chat)
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`text`] | Sentence boundary detection and word tokenization |
//! | [`stopwords`] | Embedded English stopword set |
//! | [`frequency`] | Content-word weights and keyword extraction |
//! | [`rank`] | Sentence scoring and ratio-driven selection |
//! | [`intent`] | Lexical intent classification for chat queries |
//! | [`chat`] | Per-intent answer composition over a summary |
//! | [`summarize`] | The boundary `summarize` operation and its stats |
//! | [`error`] | Engine error taxonomy |
//!
//! ## Quick Start
//!
//! ```rust
//! use summarix_core::{answer, summarize};
//!
//! let text = "Rust is a systems language. Rust compiles to native code. \
//!             Ferris is the mascot. Many tools are written in Rust.";
//! let out = summarize(text, 0.5).unwrap();
//! assert!(!out.summary.is_empty());
//!
//! let reply = answer("give me the key points", &out.summary).unwrap();
//! assert_eq!(reply.intent.as_str(), "key_points");
//! ```

pub mod chat;
pub mod error;
pub mod frequency;
pub mod intent;
pub mod rank;
pub mod stopwords;
pub mod summarize;
pub mod text;

pub use chat::{answer, ChatReply};
pub use error::{EngineError, Result};
pub use frequency::{FrequencyTable, Keyword};
pub use intent::{classify, Intent};
pub use summarize::{summarize, Summarized, SummaryStats, MAX_TEXT_CHARS, MIN_TEXT_CHARS};
