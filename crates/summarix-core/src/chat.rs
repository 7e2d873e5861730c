//! Per-intent answer composition over an already-produced summary.
//!
//! The composer is a one-shot dispatch: classify the query, then render an
//! answer by re-running the analysis primitives (tokenization, frequency
//! table, ranking, selection) over the *summary* text, never the original
//! document. It is a pure function of its inputs — nothing is logged,
//! persisted, or remembered between turns.

use serde::Serialize;

use crate::error::{EngineError, Result};
use crate::frequency::FrequencyTable;
use crate::intent::{classify, Intent};
use crate::rank::rank_sentences;
use crate::stopwords::is_stopword;
use crate::summarize::summarize;
use crate::text::{tokenize_sentences, tokenize_words, Sentence};

/// Ratio used when the user asks for a shorter summary.
const SHORTER_RATIO: f64 = 0.5;
/// Maximum keywords shown in topic-style answers.
const TOP_KEYWORDS: usize = 5;
/// Maximum sentences in a key-points answer.
const MAX_KEY_POINTS: usize = 5;
/// Maximum sentences returned by the fallback overlap search.
const MAX_FALLBACK_SENTENCES: usize = 3;

/// Fixed suggestion shown when no pattern matches and no sentence overlaps
/// the query.
const SUGGESTION: &str = "I didn't find a direct answer in the summary. Try: \
    'What is this about?', 'Give me the key points', 'Make it shorter', or \
    'How long is this summary?'";

/// A composed chat answer with the intent that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatReply {
    pub answer: String,
    pub intent: Intent,
}

/// Answer a natural-language question about a summary.
///
/// Exactly one intent is assigned per query; [`Intent::Fallback`] absorbs
/// "no clear answer" into a successful response rather than an error.
///
/// Fails with [`EngineError::EmptyInput`] when the query or the summary is
/// empty or whitespace-only.
pub fn answer(query: &str, summary: &str) -> Result<ChatReply> {
    if query.trim().is_empty() || summary.trim().is_empty() {
        return Err(EngineError::EmptyInput);
    }

    let intent = classify(query);
    let answer = match intent {
        Intent::WhatAbout => what_about(summary)?,
        Intent::KeyPoints => key_points(summary)?,
        Intent::MakeShorter => make_shorter(summary),
        Intent::Explain => explain(summary)?,
        Intent::SummaryLength => summary_length(summary)?,
        Intent::Fallback => fallback(query, summary)?,
    };

    Ok(ChatReply { answer, intent })
}

fn summary_table(sentences: &[Sentence]) -> FrequencyTable {
    FrequencyTable::build(
        sentences
            .iter()
            .flat_map(|s| s.tokens.iter().map(String::as_str)),
    )
}

fn what_about(summary: &str) -> Result<String> {
    let sentences = tokenize_sentences(summary)?;
    let keywords = summary_table(&sentences).top_keywords(TOP_KEYWORDS);
    let first = &sentences[0].text;

    if keywords.is_empty() {
        return Ok(format!("This summary starts with: {}", first));
    }
    let topics: Vec<&str> = keywords.iter().map(|k| k.token.as_str()).collect();
    Ok(format!(
        "This summary is about: {}. For example: {}",
        topics.join(", "),
        first
    ))
}

/// Top-ranked sentences rendered as an ordered list.
///
/// The chosen sentences are re-sorted into original document order, the
/// same policy the summarize operation uses for its output.
fn key_points(summary: &str) -> Result<String> {
    let sentences = tokenize_sentences(summary)?;
    let table = summary_table(&sentences);
    let ranking = rank_sentences(&sentences, &table);

    let mut chosen: Vec<usize> = ranking
        .iter()
        .take(MAX_KEY_POINTS)
        .map(|s| s.position)
        .collect();
    chosen.sort_unstable();

    let mut out = String::from("🔑 Key Points:");
    for (i, position) in chosen.iter().enumerate() {
        if let Some(sentence) = sentences.get(*position) {
            out.push_str(&format!("\n{}. {}", i + 1, sentence.text));
        }
    }
    Ok(out)
}

/// Re-run the summarizer on its own output at half length.
///
/// Summarizing a summary is the identical boundary operation, so a summary
/// below the minimum input length cannot shrink further — it is returned
/// unchanged.
fn make_shorter(summary: &str) -> String {
    let shorter = match summarize(summary, SHORTER_RATIO) {
        Ok(out) => out.summary,
        Err(_) => summary.trim().to_string(),
    };
    format!("📝 Shorter version:\n\n{}", shorter)
}

fn explain(summary: &str) -> Result<String> {
    let sentences = tokenize_sentences(summary)?;
    let word_count = summary.split_whitespace().count();
    let char_count = summary.chars().count();
    let keywords = summary_table(&sentences).top_keywords(TOP_KEYWORDS);

    let mut out = format!(
        "💡 Explanation:\n\nThis summary contains {} sentence(s), approximately {} words ({} characters).",
        sentences.len(),
        word_count,
        char_count
    );
    if !keywords.is_empty() {
        let topics: Vec<&str> = keywords.iter().map(|k| k.token.as_str()).collect();
        out.push_str(&format!(" Key topics: {}.", topics.join(", ")));
    }
    Ok(out)
}

fn summary_length(summary: &str) -> Result<String> {
    let sentences = tokenize_sentences(summary)?;
    let word_count = summary.split_whitespace().count();
    let char_count = summary.chars().count();
    let char_count_no_spaces = summary.chars().filter(|c| !c.is_whitespace()).count();

    Ok(format!(
        "📊 Summary Statistics:\n\n\
         • Words: {}\n\
         • Characters: {}\n\
         • Characters (no spaces): {}\n\
         • Sentences: {}\n\
         • Paragraphs: {}",
        group_digits(word_count),
        group_digits(char_count),
        group_digits(char_count_no_spaces),
        sentences.len(),
        paragraph_count(summary)
    ))
}

/// Overlap search: return the summary sentences sharing the most content
/// tokens with the query, or the fixed suggestion when nothing overlaps.
fn fallback(query: &str, summary: &str) -> Result<String> {
    let sentences = tokenize_sentences(summary)?;
    let query_tokens: Vec<String> = tokenize_words(query)
        .into_iter()
        .filter(|t| !is_stopword(t))
        .collect();

    let mut scored: Vec<(usize, usize)> = sentences
        .iter()
        .map(|sentence| {
            let overlap = query_tokens
                .iter()
                .filter(|q| sentence.tokens.iter().any(|t| t == *q))
                .count();
            (sentence.position, overlap)
        })
        .filter(|(_, overlap)| *overlap > 0)
        .collect();

    if scored.is_empty() {
        return Ok(SUGGESTION.to_string());
    }

    // Best overlap first, document order among equals.
    scored.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    scored.truncate(MAX_FALLBACK_SENTENCES);
    scored.sort_by_key(|(position, _)| *position);

    let relevant: Vec<&str> = scored
        .iter()
        .filter_map(|(position, _)| sentences.get(*position).map(|s| s.text.as_str()))
        .collect();
    Ok(format!(
        "Based on your question, here are relevant sentences:\n\n{}",
        relevant.join(" ")
    ))
}

/// Paragraphs are blank-line-separated segments that are non-empty after
/// trimming, so runs of consecutive blank lines count once.
fn paragraph_count(text: &str) -> usize {
    text.split("\n\n")
        .filter(|p| !p.trim().is_empty())
        .count()
}

/// Render a count with thousands separators (`12345` → `"12,345"`).
fn group_digits(n: usize) -> String {
    let digits = n.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
