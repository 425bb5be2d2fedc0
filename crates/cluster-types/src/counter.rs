//! Token frequency counting.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Token occurrence counts within one item's tokenized text.
///
/// Counts are non-negative and insertion order is irrelevant. Counters
/// from every item in a cluster sum pointwise into the cluster's
/// aggregate counter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    counts: HashMap<String, usize>,
}

impl Counter {
    /// Create an empty counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the count for a token by one.
    pub fn increment(&mut self, token: &str) {
        *self.counts.entry(token.to_string()).or_insert(0) += 1;
    }

    /// Add `n` occurrences of a token.
    pub fn add(&mut self, token: &str, n: usize) {
        *self.counts.entry(token.to_string()).or_insert(0) += n;
    }

    /// Get the count for a token (0 if absent).
    pub fn get(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check whether the counter has no entries.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Highest count over all tokens (0 for an empty counter).
    pub fn max_count(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// Pointwise sum of another counter into this one.
    pub fn merge(&mut self, other: &Counter) {
        for (token, count) in &other.counts {
            *self.counts.entry(token.clone()).or_insert(0) += count;
        }
    }

    /// Iterate over (token, count) entries.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &usize)> {
        self.counts.iter()
    }

    /// Iterate over distinct tokens.
    pub fn tokens(&self) -> impl Iterator<Item = &String> {
        self.counts.keys()
    }
}

impl FromIterator<(String, usize)> for Counter {
    fn from_iter<T: IntoIterator<Item = (String, usize)>>(iter: T) -> Self {
        let mut counter = Counter::new();
        for (token, count) in iter {
            counter.add(&token, count);
        }
        counter
    }
}

impl<'a> FromIterator<&'a str> for Counter {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        let mut counter = Counter::new();
        for token in iter {
            counter.increment(token);
        }
        counter
    }
}

/// A keyword candidate with its relevance score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredWord {
    /// The token text.
    pub token: String,
    /// Relevance score (non-negative under normal idf context).
    pub score: f32,
}

impl ScoredWord {
    /// Create a new scored word.
    pub fn new(token: String, score: f32) -> Self {
        Self { token, score }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_increment() {
        let mut counter = Counter::new();
        counter.increment("rust");
        counter.increment("rust");
        counter.increment("memory");

        assert_eq!(counter.get("rust"), 2);
        assert_eq!(counter.get("memory"), 1);
        assert_eq!(counter.get("absent"), 0);
        assert_eq!(counter.len(), 2);
    }

    #[test]
    fn test_counter_add() {
        let mut counter = Counter::new();
        counter.add("token", 5);
        counter.add("token", 3);
        assert_eq!(counter.get("token"), 8);
    }

    #[test]
    fn test_counter_empty() {
        let counter = Counter::new();
        assert!(counter.is_empty());
        assert_eq!(counter.max_count(), 0);
    }

    #[test]
    fn test_counter_max_count() {
        let counter: Counter = vec![("a".to_string(), 3), ("b".to_string(), 7), ("c".to_string(), 1)]
            .into_iter()
            .collect();
        assert_eq!(counter.max_count(), 7);
    }

    #[test]
    fn test_counter_merge_pointwise() {
        let mut left: Counter = vec![("shared".to_string(), 2), ("left".to_string(), 1)]
            .into_iter()
            .collect();
        let right: Counter = vec![("shared".to_string(), 3), ("right".to_string(), 4)]
            .into_iter()
            .collect();

        left.merge(&right);

        assert_eq!(left.get("shared"), 5);
        assert_eq!(left.get("left"), 1);
        assert_eq!(left.get("right"), 4);
        assert_eq!(left.len(), 3);
    }

    #[test]
    fn test_counter_from_tokens() {
        let counter: Counter = ["a", "b", "a", "a"].into_iter().collect();
        assert_eq!(counter.get("a"), 3);
        assert_eq!(counter.get("b"), 1);
        assert_eq!(counter.tokens().count(), 2);
    }

    #[test]
    fn test_counter_serde_round_trip() {
        let counter: Counter = ["keyword", "keyword", "other"].into_iter().collect();
        let json = serde_json::to_string(&counter).unwrap();
        let parsed: Counter = serde_json::from_str(&json).unwrap();
        assert_eq!(counter, parsed);
    }

    #[test]
    fn test_scored_word_new() {
        let word = ScoredWord::new("cluster".to_string(), 0.42);
        assert_eq!(word.token, "cluster");
        assert!((word.score - 0.42).abs() < f32::EPSILON);
    }
}
