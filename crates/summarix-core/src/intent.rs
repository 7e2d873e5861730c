//! Lexical intent classification for chat queries.
//!
//! A query is tokenized and tested against a fixed, ordered table of
//! pattern groups. A group matches when every one of its words appears in
//! the query's token set, and the first matching group wins — the table
//! order below *is* the priority order, so a query touching several
//! intents' vocabulary ("explain the key points") resolves
//! deterministically. No match yields [`Intent::Fallback`].
//!
//! Classification is a pure function: no state is consulted or mutated.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::text::tokenize_words;

/// The closed set of chat intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// "What is this about?" — topic keywords plus an example sentence.
    WhatAbout,
    /// "Give me the key points" — the top-ranked summary sentences.
    KeyPoints,
    /// "Make it shorter" — re-summarize the summary at half length.
    MakeShorter,
    /// "Explain this" — prose description of the summary's shape.
    Explain,
    /// "How long is it?" — word/character/sentence/paragraph counts.
    SummaryLength,
    /// No pattern matched; answered by content-token overlap search.
    Fallback,
}

impl Intent {
    /// Wire-format name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::WhatAbout => "what_about",
            Intent::KeyPoints => "key_points",
            Intent::MakeShorter => "make_shorter",
            Intent::Explain => "explain",
            Intent::SummaryLength => "summary_length",
            Intent::Fallback => "fallback",
        }
    }
}

/// Priority-ordered pattern groups, evaluated top to bottom.
///
/// Patterns are matched against *unfiltered* query tokens — several groups
/// deliberately contain stopwords ("what", "about", "how").
const PATTERNS: &[(Intent, &[&[&str]])] = &[
    (
        Intent::WhatAbout,
        &[
            &["what", "about"],
            &["what", "is", "about"],
            &["tell", "me", "about"],
        ],
    ),
    (
        Intent::KeyPoints,
        &[
            &["key", "points"],
            &["key", "point"],
            &["key", "ideas"],
            &["main", "points"],
            &["main", "point"],
            &["main", "ideas"],
            &["important", "points"],
            &["highlights"],
            &["what", "are", "key"],
        ],
    ),
    (
        Intent::MakeShorter,
        &[&["shorter"], &["shorten"], &["condense"], &["brief"]],
    ),
    (
        Intent::Explain,
        &[&["explain"], &["elaborate"], &["describe"], &["clarify"]],
    ),
    (
        Intent::SummaryLength,
        &[
            &["how", "long"],
            &["length"],
            &["word", "count"],
            &["character", "count"],
            &["stats"],
            &["statistics"],
        ],
    ),
];

/// Classify a query into exactly one [`Intent`].
pub fn classify(query: &str) -> Intent {
    let tokens: HashSet<String> = tokenize_words(query).into_iter().collect();
    for (intent, groups) in PATTERNS {
        for group in *groups {
            if group.iter().all(|word| tokens.contains(*word)) {
                return *intent;
            }
        }
    }
    Intent::Fallback
}
