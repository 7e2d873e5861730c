//! # Summarix
//!
//! Extractive text summarization with a summary Q&A chat.
//!
//! Summarix condenses a document by selecting its most representative
//! sentences — frequency-weighted, length-normalized, re-emitted in
//! original order — and answers follow-up questions about the result via
//! intent-matched responses. The engine lives in [`summarix_core`]; this
//! crate adds the `smx` CLI and a JSON HTTP API.
//!
//! ## Quick Start
//!
//! ```bash
//! smx summarize article.txt --ratio 0.3 --stats
//! echo "..." | smx summarize
//! smx chat "give me the key points" --summary-file summary.txt
//! smx serve
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing with built-in defaults |
//! | [`input`] | File-or-stdin text loading for CLI commands |
//! | [`server`] | JSON HTTP API (axum) |

pub mod config;
pub mod input;
pub mod server;
