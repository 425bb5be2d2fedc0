//! # cluster-tokenize
//!
//! Quotation-aware tokenization for the cluster-summary system.
//!
//! Raw item text goes through a small pipeline before counting:
//! quoted spans are masked so they survive as single tokens, each
//! whitespace unit is tagged through an injected part-of-speech
//! capability, tag runs matching a configured fusion pattern collapse
//! into one synthetic token, stopwords are dropped, and quoted spans
//! are restored in the order they appeared.
//!
//! ## Features
//! - `FusionTokenizer`: the full tagging + fusion + quotation pipeline
//! - `SimpleTokenizer`: whitespace split + stopword filter, no tagging
//! - `TagFilter` / `TextCleaner`: standalone text preparation helpers
//! - `is_noun`: leading-tag noun classification

pub mod clean;
pub mod error;
pub mod filter;
pub mod quotation;
pub mod stopwords;
pub mod tagger;
pub mod tokenizer;

pub use clean::TextCleaner;
pub use error::TokenizeError;
pub use filter::TagFilter;
pub use quotation::{QuotationMasker, QUOTE_PLACEHOLDER};
pub use stopwords::Stopwords;
pub use tagger::{is_noun, LexiconTagger, PosTagger, TagError, TaggedWord, FUSED_TAG, NOUN_MARKER};
pub use tokenizer::{FusionTokenizer, SimpleTokenizer, Tokenizer};
