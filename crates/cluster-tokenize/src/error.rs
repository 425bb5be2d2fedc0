//! Tokenization error types.

use thiserror::Error;

/// Errors that can occur during tokenization.
#[derive(Debug, Error)]
pub enum TokenizeError {
    /// Placeholder tokens seen during unmasking did not match the number
    /// of recorded quotation spans. Proceeding would corrupt output, so
    /// this is fatal rather than absorbed.
    #[error("Quotation restoration mismatch: {expected} recorded spans, {found} placeholders")]
    RestorationMismatch {
        /// Number of quotation spans recorded during masking
        expected: usize,
        /// Number of placeholder tokens encountered during unmasking
        found: usize,
    },
}
