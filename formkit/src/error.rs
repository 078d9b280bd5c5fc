//! Error types for formkit.

use thiserror::Error;

/// Errors surfaced by formkit widgets and validation.
#[derive(Debug, Error)]
pub enum FormkitError {
    /// A validation pattern failed to compile.
    #[error("invalid validation pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Terminal I/O failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
