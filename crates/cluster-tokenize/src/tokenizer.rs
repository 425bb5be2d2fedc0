//! Tokenizers.
//!
//! Two implementations behind one trait: [`FusionTokenizer`] runs the
//! full quotation + tagging + fusion pipeline, [`SimpleTokenizer`] is
//! the tag-independent whitespace fallback. Callers pick one per
//! configuration.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::warn;

use crate::error::TokenizeError;
use crate::quotation::{QuotationMasker, QUOTE_PLACEHOLDER};
use crate::stopwords::Stopwords;
use crate::tagger::{PosTagger, TaggedWord, FUSED_TAG};

/// Turns raw text into a clean sequence of semantic tokens.
///
/// One finite pass per call; duplicates allowed, order preserved.
pub trait Tokenizer: Send + Sync {
    /// Tokenize a piece of text.
    fn tokenize(&self, text: &str) -> Result<Vec<String>, TokenizeError>;
}

/// Whitespace tokenizer with stopword filtering only.
///
/// Lower-cost alternative to [`FusionTokenizer`] for callers that do
/// not need tagging, fusion, or quotation handling.
#[derive(Debug, Clone, Default)]
pub struct SimpleTokenizer {
    stopwords: Stopwords,
}

impl SimpleTokenizer {
    /// Create a simple tokenizer with the given stopword set.
    pub fn new(stopwords: Stopwords) -> Self {
        Self { stopwords }
    }
}

impl Tokenizer for SimpleTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, TokenizeError> {
        Ok(text
            .split_whitespace()
            .filter(|word| !self.stopwords.contains(word))
            .map(str::to_string)
            .collect())
    }
}

/// The full tokenization pipeline: quotation masking, per-unit tagging,
/// token fusion, stopword filtering, quotation restoration.
///
/// Each whitespace-delimited unit is tagged independently, which bounds
/// fusion to within one unit. A unit whose tag sequence starts and ends
/// in the same configured fusion pattern collapses into one synthetic
/// token (the concatenated surface forms). Tagging failures never abort
/// a call: the failing unit passes through unfused, subject only to
/// stopword filtering.
pub struct FusionTokenizer {
    tagger: Arc<dyn PosTagger>,
    masker: QuotationMasker,
    patterns: Vec<HashSet<String>>,
    stopwords: Stopwords,
}

impl FusionTokenizer {
    /// Create a fusion tokenizer.
    ///
    /// `patterns` is the ordered list of fusion tag sets; the first
    /// matching set wins.
    pub fn new(
        tagger: Arc<dyn PosTagger>,
        patterns: Vec<Vec<String>>,
        stopwords: Stopwords,
    ) -> Self {
        Self {
            tagger,
            masker: QuotationMasker::new(),
            patterns: patterns
                .into_iter()
                .map(|tags| tags.into_iter().collect())
                .collect(),
            stopwords,
        }
    }

    /// Collapse a unit's tag sequence if its first and last tag belong
    /// to the same fusion pattern.
    fn fuse(&self, tagged: Vec<TaggedWord>) -> Vec<TaggedWord> {
        let (first, last) = match (tagged.first(), tagged.last()) {
            (Some(first), Some(last)) => (&first.tag, &last.tag),
            _ => return tagged,
        };
        for pattern in &self.patterns {
            if pattern.contains(first) && pattern.contains(last) {
                let joined: String = tagged.iter().map(|t| t.text.as_str()).collect();
                return vec![TaggedWord::new(joined, FUSED_TAG)];
            }
        }
        tagged
    }
}

impl Tokenizer for FusionTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, TokenizeError> {
        let (masked, spans) = self.masker.mask(text);

        let mut tokens = Vec::new();
        for unit in masked.split_whitespace() {
            // Placeholders stand in for quoted content, which is exempt
            // from tagging, fusion, and stopword filtering.
            if unit == QUOTE_PLACEHOLDER {
                tokens.push(unit.to_string());
                continue;
            }
            match self.tagger.tag(unit) {
                Ok(tagged) if !tagged.is_empty() => {
                    for word in self.fuse(tagged) {
                        if !self.stopwords.contains(&word.text) {
                            tokens.push(word.text);
                        }
                    }
                }
                Ok(_) => {
                    if !self.stopwords.contains(unit) {
                        tokens.push(unit.to_string());
                    }
                }
                Err(err) => {
                    warn!(unit, error = %err, "Tagger failed; passing unit through unfused");
                    if !self.stopwords.contains(unit) {
                        tokens.push(unit.to_string());
                    }
                }
            }
        }

        self.masker.unmask(tokens, spans)
    }
}
