//! Error types shared across the Rafiki crates

use thiserror::Error;

/// Core errors
#[derive(Debug, Error)]
pub enum Error {
    /// A language tag outside the supported set
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
