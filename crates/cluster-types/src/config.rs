//! Pipeline configuration.

use serde::{Deserialize, Serialize};

/// Master configuration for summary extraction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Tokenization settings
    #[serde(default)]
    pub tokenizer: TokenizerConfig,

    /// Keyword ranking settings
    #[serde(default)]
    pub keywords: KeywordConfig,
}

/// Tokenizer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// Tag sets for token fusion; a whitespace unit whose first and last
    /// tag both belong to one set collapses into a single token
    #[serde(default)]
    pub fusion_patterns: Vec<Vec<String>>,

    /// Allow-list of tags; when non-empty, tag filtering keeps only these
    #[serde(default)]
    pub positive_tags: Vec<String>,

    /// Deny-list of tags applied when no allow-list is configured
    #[serde(default)]
    pub negative_tags: Vec<String>,

    /// Override for the stopword set; `None` uses the built-in list
    #[serde(default)]
    pub stopwords: Option<Vec<String>>,

    /// Regex a token must match somewhere to be counted; rejects
    /// symbol-only tokens
    #[serde(default = "default_word_pattern")]
    pub word_pattern: String,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            fusion_patterns: Vec::new(),
            positive_tags: Vec::new(),
            negative_tags: Vec::new(),
            stopwords: None,
            word_pattern: default_word_pattern(),
        }
    }
}

fn default_word_pattern() -> String {
    r"[\p{L}\p{N}]".to_string()
}

/// Keyword ranking configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordConfig {
    /// Number of top-ranked keywords to keep
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
        }
    }
}

fn default_top_k() -> usize {
    32
}
