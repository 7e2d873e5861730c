//! Content-word frequency weights and keyword extraction.
//!
//! A [`FrequencyTable`] maps each content token (post-stopword filter) to a
//! raw count and a derived weight, normalized by the maximum count so the
//! most frequent content word has weight `1.0`. Tables are rebuilt per
//! request and never shared across documents.
//!
//! A table with no content tokens is empty, not an error: callers handle
//! zero-keyword documents (e.g. numeric-only text) by degrading — every
//! weight lookup returns `0.0` and [`top_keywords`](FrequencyTable::top_keywords)
//! returns an empty list.

use std::collections::HashMap;

use serde::Serialize;

use crate::stopwords::is_stopword;

/// A keyword with its normalized weight in `(0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Keyword {
    pub token: String,
    pub weight: f64,
}

#[derive(Debug, Clone)]
struct Entry {
    count: usize,
    /// Index of the token's first appearance, used for tie-breaking.
    first_seen: usize,
}

/// Per-document mapping from content token to count and normalized weight.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: HashMap<String, Entry>,
    max_count: usize,
}

impl FrequencyTable {
    /// Build a table from a token stream.
    ///
    /// Stopwords are filtered here; pass all tokens. Identical input always
    /// yields identical weights — ties are resolved downstream by
    /// first-appearance order.
    pub fn build<'a, I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut entries: HashMap<String, Entry> = HashMap::new();
        let mut max_count = 0;
        for (index, token) in tokens.into_iter().enumerate() {
            if is_stopword(token) {
                continue;
            }
            let entry = entries.entry(token.to_string()).or_insert(Entry {
                count: 0,
                first_seen: index,
            });
            entry.count += 1;
            max_count = max_count.max(entry.count);
        }
        Self { entries, max_count }
    }

    /// Normalized weight for a token: `count / max_count`, in `(0, 1]`.
    ///
    /// Returns `0.0` for absent tokens (pure stopwords) and for an empty
    /// table.
    pub fn weight(&self, token: &str) -> f64 {
        if self.max_count == 0 {
            return 0.0;
        }
        self.entries
            .get(token)
            .map_or(0.0, |e| e.count as f64 / self.max_count as f64)
    }

    /// Number of distinct content tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the document had any content words at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The top `n` content words by weight, descending.
    ///
    /// Ties are broken by first-appearance order in the source. Returns
    /// fewer than `n` entries when the table is smaller, and an empty
    /// vector for an empty table.
    pub fn top_keywords(&self, n: usize) -> Vec<Keyword> {
        let mut items: Vec<(&String, &Entry)> = self.entries.iter().collect();
        items.sort_by(|a, b| {
            b.1.count
                .cmp(&a.1.count)
                .then(a.1.first_seen.cmp(&b.1.first_seen))
        });
        items
            .into_iter()
            .take(n)
            .map(|(token, entry)| Keyword {
                token: token.clone(),
                weight: entry.count as f64 / self.max_count as f64,
            })
            .collect()
    }
}
