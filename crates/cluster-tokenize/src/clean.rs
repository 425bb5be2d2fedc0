//! Pattern-based text cleaning.

use std::collections::HashMap;

/// Applies a pattern → replacement map to raw text before tokenization.
///
/// Single-character patterns go through one char-mapping pass over the
/// text; longer patterns are replaced sequentially afterwards.
#[derive(Debug, Clone, Default)]
pub struct TextCleaner {
    chars: HashMap<char, String>,
    strings: Vec<(String, String)>,
}

impl TextCleaner {
    /// Create a cleaner from (pattern, replacement) pairs.
    pub fn new<P, R>(patterns: impl IntoIterator<Item = (P, R)>) -> Self
    where
        P: Into<String>,
        R: Into<String>,
    {
        let mut chars = HashMap::new();
        let mut strings = Vec::new();
        for (pattern, replacement) in patterns {
            let pattern = pattern.into();
            let replacement = replacement.into();
            let mut it = pattern.chars();
            match (it.next(), it.next()) {
                (Some(c), None) => {
                    chars.insert(c, replacement);
                }
                _ => strings.push((pattern, replacement)),
            }
        }
        Self { chars, strings }
    }

    /// Apply every pattern to the text.
    pub fn clean(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match self.chars.get(&c) {
                Some(replacement) => out.push_str(replacement),
                None => out.push(c),
            }
        }
        for (pattern, replacement) in &self.strings {
            out = out.replace(pattern.as_str(), replacement.as_str());
        }
        out
    }
}
