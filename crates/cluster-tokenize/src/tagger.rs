//! Part-of-speech tagging capability.
//!
//! The pipeline consumes tagging through the [`PosTagger`] trait; the
//! backend itself (morphological analyzer, model, lexicon) lives with
//! the external collaborator. The tag taxonomy is collaborator-defined
//! except for two conventions the pipeline relies on: the leading
//! character of a tag label identifies the noun category, and fusion
//! patterns name tag sets from the same taxonomy.

use std::collections::HashMap;

use thiserror::Error;

/// Leading tag character identifying the noun category.
pub const NOUN_MARKER: char = 'N';

/// Tag assigned to synthetic tokens produced by fusion.
pub const FUSED_TAG: &str = "FUSED";

/// Tagging capability failure.
#[derive(Debug, Error)]
#[error("Tagging failed: {0}")]
pub struct TagError(pub String);

/// One surface form with its part-of-speech tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedWord {
    /// The surface form as it appeared in the text.
    pub text: String,
    /// The tag label assigned by the tagger.
    pub tag: String,
}

impl TaggedWord {
    /// Create a new tagged word.
    pub fn new(text: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tag: tag.into(),
        }
    }
}

/// Part-of-speech tagging capability.
///
/// Implementations should be constructed once and shared by reference;
/// a call may be expensive but must be synchronous and deterministic.
pub trait PosTagger: Send + Sync {
    /// Tag a unit of text, returning the ordered (surface form, tag)
    /// sequence.
    fn tag(&self, text: &str) -> Result<Vec<TaggedWord>, TagError>;
}

/// Check whether a word is a noun.
///
/// Tags the word and inspects only the first returned tag; multi-tag
/// words use the leading tag's classification. Tagging failure or an
/// empty tag sequence classifies as not-a-noun.
pub fn is_noun(tagger: &dyn PosTagger, word: &str) -> bool {
    match tagger.tag(word) {
        Ok(tagged) => tagged
            .first()
            .map(|t| t.tag.starts_with(NOUN_MARKER))
            .unwrap_or(false),
        Err(_) => false,
    }
}

/// Lexicon-backed [`PosTagger`].
///
/// Looks each unit up in a fixed lexicon and falls back to a default
/// tag for unknown units. Suitable for tests and for corpora with a
/// known vocabulary; real deployments inject a morphological analyzer
/// instead.
#[derive(Debug, Clone)]
pub struct LexiconTagger {
    entries: HashMap<String, Vec<TaggedWord>>,
    default_tag: String,
}

impl LexiconTagger {
    /// Create a tagger with the given default tag for unknown units.
    pub fn new(default_tag: impl Into<String>) -> Self {
        Self {
            entries: HashMap::new(),
            default_tag: default_tag.into(),
        }
    }

    /// Register the tag sequence for a unit.
    pub fn define(&mut self, unit: &str, tagged: Vec<TaggedWord>) {
        self.entries.insert(unit.to_string(), tagged);
    }

    /// Register a single-tag unit.
    pub fn define_word(&mut self, unit: &str, tag: &str) {
        self.define(unit, vec![TaggedWord::new(unit, tag)]);
    }
}

impl Default for LexiconTagger {
    fn default() -> Self {
        // Unknown units default to general nouns, the most common open class.
        Self::new("NNG")
    }
}

impl PosTagger for LexiconTagger {
    fn tag(&self, text: &str) -> Result<Vec<TaggedWord>, TagError> {
        match self.entries.get(text) {
            Some(tagged) => Ok(tagged.clone()),
            None => Ok(vec![TaggedWord::new(text, self.default_tag.as_str())]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_noun_uses_first_tag() {
        let mut tagger = LexiconTagger::default();
        tagger.define(
            "walked",
            vec![
                TaggedWord::new("walk", "VV"),
                TaggedWord::new("ed", "NNB"),
            ],
        );
        // First tag is a verb; the trailing noun tag is ignored.
        assert!(!is_noun(&tagger, "walked"));
    }

    #[test]
    fn test_is_noun_marker() {
        let mut tagger = LexiconTagger::default();
        tagger.define_word("seoul", "NNP");
        tagger.define_word("quickly", "MAG");

        assert!(is_noun(&tagger, "seoul"));
        assert!(!is_noun(&tagger, "quickly"));
    }

    #[test]
    fn test_is_noun_failure_is_not_noun() {
        struct FailingTagger;
        impl PosTagger for FailingTagger {
            fn tag(&self, _text: &str) -> Result<Vec<TaggedWord>, TagError> {
                Err(TagError("backend unavailable".to_string()))
            }
        }
        assert!(!is_noun(&FailingTagger, "anything"));
    }

    #[test]
    fn test_is_noun_empty_tags() {
        struct EmptyTagger;
        impl PosTagger for EmptyTagger {
            fn tag(&self, _text: &str) -> Result<Vec<TaggedWord>, TagError> {
                Ok(Vec::new())
            }
        }
        assert!(!is_noun(&EmptyTagger, "anything"));
    }

    #[test]
    fn test_lexicon_tagger_fallback() {
        let tagger = LexiconTagger::default();
        let tagged = tagger.tag("unknown").unwrap();
        assert_eq!(tagged, vec![TaggedWord::new("unknown", "NNG")]);
    }
}
