//! Error types for huffcode.

use thiserror::Error;

/// Errors reported while building a codebook.
#[derive(Debug, Error)]
pub enum Error {
    /// No symbols were supplied, so there is no tree to build.
    #[error("empty input: at least one symbol is needed to build a tree")]
    EmptyInput,

    /// Reading the word or writing the tables failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for huffcode operations.
pub type Result<T> = std::result::Result<T, Error>;
