//! Sentence scoring and ratio-driven extractive selection.
//!
//! Each sentence scores the sum of its content-token weights divided by its
//! total token count — stopwords included in the denominator — so long
//! sentences cannot dominate purely by volume. The ranking is a stable
//! descending sort: equal scores preserve original document order, which
//! makes selection reproducible.

use crate::error::{EngineError, Result};
use crate::frequency::FrequencyTable;
use crate::text::Sentence;

/// A sentence's position paired with its relevance score.
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceScore {
    /// Zero-based position in the source document.
    pub position: usize,
    /// Length-normalized sum of content-token weights.
    pub score: f64,
}

/// Score every sentence against a frequency table, descending by score.
///
/// Tokens absent from the table (pure stopwords) contribute 0; sentences
/// with zero tokens score 0 and sort last. The sort is stable, so equal
/// scores keep document order.
pub fn rank_sentences(sentences: &[Sentence], table: &FrequencyTable) -> Vec<SentenceScore> {
    let mut scores: Vec<SentenceScore> = sentences
        .iter()
        .map(|sentence| {
            let total = sentence.tokens.len();
            let score = if total == 0 {
                0.0
            } else {
                let sum: f64 = sentence.content_tokens().map(|t| table.weight(t)).sum();
                sum / total as f64
            };
            SentenceScore {
                position: sentence.position,
                score,
            }
        })
        .collect();
    scores.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scores
}

/// Select the top sentences for a target ratio, in document order.
///
/// The target count is `K = max(1, round(ratio × sentence_count))`, capped
/// at the sentence count. The K best-ranked sentences are re-sorted by
/// original position before returning, so the output reads in natural
/// document order regardless of ranking order. A single-sentence document
/// returns that sentence for any valid ratio.
///
/// Fails with [`EngineError::InvalidRatio`] when `ratio` is outside `(0, 1]`.
pub fn select<'a>(
    ranking: &[SentenceScore],
    sentences: &'a [Sentence],
    ratio: f64,
) -> Result<Vec<&'a Sentence>> {
    if !(ratio > 0.0 && ratio <= 1.0) {
        return Err(EngineError::InvalidRatio { ratio });
    }
    if sentences.is_empty() {
        return Ok(Vec::new());
    }

    let count = sentences.len();
    let target = ((ratio * count as f64).round() as usize).clamp(1, count);

    let mut chosen: Vec<usize> = ranking.iter().take(target).map(|s| s.position).collect();
    chosen.sort_unstable();

    Ok(chosen
        .into_iter()
        .filter_map(|position| sentences.get(position))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::tokenize_sentences;

    fn fixture(text: &str) -> (Vec<Sentence>, FrequencyTable) {
        let sentences = tokenize_sentences(text).unwrap();
        let table = FrequencyTable::build(
            sentences
                .iter()
                .flat_map(|s| s.tokens.iter().map(String::as_str)),
        );
        (sentences, table)
    }

    #[test]
    fn repeated_terms_rank_their_sentence_first() {
        let (sentences, table) = fixture(
            "Bananas differ greatly. Apples grow on tall green trees. Apples apples apples.",
        );
        let ranking = rank_sentences(&sentences, &table);
        assert_eq!(ranking[0].position, 2);
        assert!(ranking[0].score > ranking[1].score);
    }

    #[test]
    fn equal_scores_preserve_document_order() {
        // All-stopword table: every sentence scores 0.
        let (sentences, _) = fixture("First point here. Second point here. Third point here.");
        let empty = FrequencyTable::build(std::iter::empty::<&str>());
        let ranking = rank_sentences(&sentences, &empty);
        let positions: Vec<usize> = ranking.iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
        assert!(ranking.iter().all(|s| s.score == 0.0));
    }

    #[test]
    fn every_sentence_gets_exactly_one_score() {
        let (sentences, table) = fixture("One here. Two there. Three anywhere.");
        let ranking = rank_sentences(&sentences, &table);
        let mut positions: Vec<usize> = ranking.iter().map(|s| s.position).collect();
        positions.sort_unstable();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn selection_returns_document_order() {
        let (sentences, table) = fixture(
            "Bananas differ greatly. Apples grow on tall green trees. Apples apples apples.",
        );
        let ranking = rank_sentences(&sentences, &table);
        // Top two by rank are positions 2 and 1; output must be 1 then 2.
        let selected = select(&ranking, &sentences, 0.67).unwrap();
        let positions: Vec<usize> = selected.iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![1, 2]);
    }

    #[test]
    fn ratio_rounds_to_target_count() {
        let (sentences, table) = fixture("A one. B two. C three.");
        let ranking = rank_sentences(&sentences, &table);
        // round(0.34 × 3) = round(1.02) = 1
        assert_eq!(select(&ranking, &sentences, 0.34).unwrap().len(), 1);
        // round(0.5 × 3) = 2
        assert_eq!(select(&ranking, &sentences, 0.5).unwrap().len(), 2);
        assert_eq!(select(&ranking, &sentences, 1.0).unwrap().len(), 3);
    }

    #[test]
    fn tiny_ratio_still_selects_one() {
        let (sentences, table) = fixture("A one. B two. C three.");
        let ranking = rank_sentences(&sentences, &table);
        assert_eq!(select(&ranking, &sentences, 0.01).unwrap().len(), 1);
    }

    #[test]
    fn single_sentence_document_is_returned_unchanged() {
        let (sentences, table) = fixture("Only one sentence lives here.");
        let ranking = rank_sentences(&sentences, &table);
        for ratio in [0.1, 0.5, 1.0] {
            let selected = select(&ranking, &sentences, ratio).unwrap();
            assert_eq!(selected.len(), 1);
            assert_eq!(selected[0].text, "Only one sentence lives here.");
        }
    }

    #[test]
    fn invalid_ratios_are_rejected() {
        let (sentences, table) = fixture("A one. B two.");
        let ranking = rank_sentences(&sentences, &table);
        for ratio in [0.0, -0.5, 1.01, f64::NAN] {
            let err = select(&ranking, &sentences, ratio).unwrap_err();
            assert!(matches!(err, EngineError::InvalidRatio { .. }));
        }
    }
}
