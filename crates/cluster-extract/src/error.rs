//! Extraction error types.

use cluster_tokenize::TokenizeError;
use cluster_types::ClusterId;
use thiserror::Error;

/// Errors that can occur during feature extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Dump requested for a cluster with zero members
    #[error("Cluster {0} has no members")]
    EmptyCluster(ClusterId),

    /// Tokenization error
    #[error("Tokenization error: {0}")]
    Tokenize(#[from] TokenizeError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
