//! Tag-based text filtering.

use std::collections::HashSet;

use cluster_types::TokenizerConfig;

use crate::tagger::{PosTagger, TagError};

/// Keeps or drops surface forms by their part-of-speech tag.
///
/// When an allow-list is configured it wins: only surface forms whose
/// tag is in the allow-list survive. Otherwise surface forms whose tag
/// is in the deny-list are dropped.
#[derive(Debug, Clone, Default)]
pub struct TagFilter {
    positive: HashSet<String>,
    negative: HashSet<String>,
}

impl TagFilter {
    /// Create a filter from allow- and deny-lists.
    pub fn new(positive: Vec<String>, negative: Vec<String>) -> Self {
        Self {
            positive: positive.into_iter().collect(),
            negative: negative.into_iter().collect(),
        }
    }

    /// Build a filter from tokenizer configuration.
    pub fn from_config(config: &TokenizerConfig) -> Self {
        Self::new(config.positive_tags.clone(), config.negative_tags.clone())
    }

    /// Tag `text` and return the surviving surface forms joined by
    /// single spaces.
    pub fn filter(&self, tagger: &dyn PosTagger, text: &str) -> Result<String, TagError> {
        let tagged = tagger.tag(text)?;
        let kept: Vec<&str> = if !self.positive.is_empty() {
            tagged
                .iter()
                .filter(|word| self.positive.contains(&word.tag))
                .map(|word| word.text.as_str())
                .collect()
        } else {
            tagged
                .iter()
                .filter(|word| !self.negative.contains(&word.tag))
                .map(|word| word.text.as_str())
                .collect()
        };
        Ok(kept.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::{LexiconTagger, TaggedWord};

    fn tagger() -> LexiconTagger {
        let mut tagger = LexiconTagger::default();
        tagger.define(
            "books-on-shelf",
            vec![
                TaggedWord::new("books", "NNG"),
                TaggedWord::new("on", "JKB"),
                TaggedWord::new("shelf", "NNG"),
            ],
        );
        tagger
    }

    #[test]
    fn test_positive_filter_keeps_only_listed_tags() {
        let filter = TagFilter::new(vec!["NNG".to_string()], vec!["JKB".to_string()]);
        let filtered = filter.filter(&tagger(), "books-on-shelf").unwrap();
        assert_eq!(filtered, "books shelf");
    }

    #[test]
    fn test_negative_filter_drops_listed_tags() {
        let filter = TagFilter::new(Vec::new(), vec!["JKB".to_string()]);
        let filtered = filter.filter(&tagger(), "books-on-shelf").unwrap();
        assert_eq!(filtered, "books shelf");
    }

    #[test]
    fn test_no_lists_passes_everything() {
        let filter = TagFilter::default();
        let filtered = filter.filter(&tagger(), "books-on-shelf").unwrap();
        assert_eq!(filtered, "books on shelf");
    }

    #[test]
    fn test_from_config() {
        let config = TokenizerConfig {
            positive_tags: vec!["NNG".to_string()],
            ..Default::default()
        };
        let filter = TagFilter::from_config(&config);
        let filtered = filter.filter(&tagger(), "books-on-shelf").unwrap();
        assert_eq!(filtered, "books shelf");
    }
}
