//! Error Types
//!
//! All fallible operations in the crate return [`Result`]. Errors are local
//! to the failing call; a store that produced an error remains usable.

use thiserror::Error;

/// Errors produced by the vexa core.
#[derive(Debug, Error)]
pub enum VexaError {
    /// Malformed or dimensionally inconsistent embedding source line.
    /// Fatal to `load`; the store is not constructed.
    #[error("parse error at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// Lookup of a token absent from the store.
    #[error("unknown word: {0:?}")]
    UnknownWord(String),

    /// Analogy search with no eligible candidate words.
    #[error("vocabulary has no eligible candidates")]
    EmptyVocabulary,

    /// Bias axis (or a derived denominator) is numerically zero.
    #[error("degenerate bias axis: {0}")]
    DegenerateAxis(&'static str),

    /// I/O failure while reading the embedding source.
    #[error("embedding source I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl VexaError {
    pub(crate) fn parse(line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            reason: reason.into(),
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, VexaError>;
