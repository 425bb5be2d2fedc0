//! Keyword scoring.
//!
//! Ranks the aggregate counter's noun tokens by an augmented term
//! frequency times a cluster-rarity idf:
//!
//! ```text
//! tf(t)    = 0.5 + 0.5 * f(t) / max_f
//! idf      = 0.01 + log10(corpus_size / cluster_size)
//! score(t) = tf(t) * idf + f(t) * 0.001
//! ```
//!
//! `max_f` normalizes over the full aggregate counter before noun
//! filtering, and `idf` is constant per call, rewarding smaller, more
//! distinctive clusters.

use std::cmp::Ordering;

use cluster_types::{Counter, ScoredWord};

/// Score and rank keyword candidates from an aggregate counter.
///
/// Only tokens passing `is_noun` are scored; everything else is
/// excluded outright. Results are descending by score, at most `top_k`
/// long, with ties resolved by counter iteration order. Degenerate
/// input (empty counter, all-zero counts, or a zero cluster or corpus
/// size) yields an empty list rather than a division error.
pub fn score_keywords<F>(
    counter: &Counter,
    cluster_size: usize,
    corpus_size: usize,
    top_k: usize,
    mut is_noun: F,
) -> Vec<ScoredWord>
where
    F: FnMut(&str) -> bool,
{
    if counter.is_empty() || cluster_size == 0 || corpus_size == 0 {
        return Vec::new();
    }
    let max_f = counter.max_count();
    if max_f == 0 {
        return Vec::new();
    }

    let idf = 0.01 + (corpus_size as f32 / cluster_size as f32).log10();

    let mut scored: Vec<ScoredWord> = counter
        .iter()
        .filter(|(token, _)| is_noun(token.as_str()))
        .map(|(token, &frequency)| {
            let tf = 0.5 + 0.5 * frequency as f32 / max_f as f32;
            let score = tf * idf + frequency as f32 * 0.001;
            ScoredWord::new(token.clone(), score)
        })
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored.truncate(top_k);
    scored
}
