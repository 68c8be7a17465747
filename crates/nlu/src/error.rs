//! Error types for the understanding pipeline

use thiserror::Error;

/// Errors raised while building the pipeline
///
/// Per-call analysis never fails: every utterance, however malformed,
/// yields a well-formed result. Errors are confined to construction,
/// where evidence patterns are compiled.
#[derive(Debug, Error)]
pub enum NluError {
    /// An evidence pattern failed to compile
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, NluError>;
