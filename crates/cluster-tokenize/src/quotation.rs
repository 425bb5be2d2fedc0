//! Quotation masking and restoration.
//!
//! Quoted spans carry emphasis the rest of the pipeline must not break
//! apart: `'hello world'` stays one token, exempt from stopword
//! filtering and fusion. Masking swaps each span for a placeholder
//! before splitting; unmasking substitutes the recorded spans back in
//! strict first-in-first-out order.

use std::collections::VecDeque;

use regex::Regex;

use crate::error::TokenizeError;

/// Marker substituted for each quoted span during masking.
pub const QUOTE_PLACEHOLDER: &str = "__quoted_span__";

/// Locates single- and double-quoted spans and swaps them for
/// placeholder tokens.
#[derive(Debug, Clone)]
pub struct QuotationMasker {
    single: Regex,
    double: Regex,
}

impl Default for QuotationMasker {
    fn default() -> Self {
        Self::new()
    }
}

impl QuotationMasker {
    /// Create a masker matching non-greedy, non-nested `'...'` and
    /// `"..."` spans.
    pub fn new() -> Self {
        Self {
            single: Regex::new(r"'(.+?)'").expect("single-quote pattern is valid"),
            double: Regex::new(r#""(.+?)""#).expect("double-quote pattern is valid"),
        }
    }

    /// Replace every quoted span with [`QUOTE_PLACEHOLDER`] and record
    /// the stripped span contents in appearance order.
    ///
    /// Single- and double-quoted spans interleave by position in the
    /// text, not by quote kind. Spans overlapping an earlier match are
    /// skipped. Zero spans makes this a no-op.
    pub fn mask(&self, text: &str) -> (String, Vec<String>) {
        let mut matches: Vec<(usize, usize)> = Vec::new();
        for m in self.single.find_iter(text) {
            matches.push((m.start(), m.end()));
        }
        for m in self.double.find_iter(text) {
            matches.push((m.start(), m.end()));
        }
        matches.sort_by_key(|(start, _)| *start);

        let mut masked = String::with_capacity(text.len());
        let mut spans = Vec::new();
        let mut cursor = 0;
        for (start, end) in matches {
            if start < cursor {
                continue;
            }
            masked.push_str(&text[cursor..start]);
            // Pad so the placeholder is always its own whitespace unit.
            masked.push(' ');
            masked.push_str(QUOTE_PLACEHOLDER);
            masked.push(' ');
            // Quote characters are one byte each; strip them off the span.
            spans.push(text[start + 1..end - 1].to_string());
            cursor = end;
        }
        masked.push_str(&text[cursor..]);
        (masked, spans)
    }

    /// Substitute recorded spans back into a token stream.
    ///
    /// Each placeholder occurrence consumes the next recorded span in
    /// the order spans were found in the text. A count mismatch in
    /// either direction signals a masking or fusion bug and fails the
    /// whole call.
    pub fn unmask(
        &self,
        tokens: Vec<String>,
        spans: Vec<String>,
    ) -> Result<Vec<String>, TokenizeError> {
        let expected = spans.len();
        let mut queue: VecDeque<String> = spans.into();
        let mut restored = Vec::with_capacity(tokens.len());
        let mut found = 0;

        for token in tokens {
            if token == QUOTE_PLACEHOLDER {
                found += 1;
                if let Some(span) = queue.pop_front() {
                    restored.push(span);
                }
            } else {
                restored.push(token);
            }
        }

        if found != expected {
            return Err(TokenizeError::RestorationMismatch { expected, found });
        }
        Ok(restored)
    }
}
