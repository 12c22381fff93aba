//! Error types

use thiserror::Error;

/// A line that could not be turned into a record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("missing ';' delimiter")]
    MissingDelimiter,

    #[error("empty key")]
    EmptyKey,

    #[error("invalid value: {0:?}")]
    InvalidValue(String),

    #[error("value is NaN")]
    NotANumber,

    #[error("line is not valid UTF-8")]
    InvalidUtf8,
}

/// Errors surfaced while driving a run
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("malformed line {line}: {source}")]
    Malformed {
        /// 1-based line number
        line: u64,
        source: ParseError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for driver operations
pub type Result<T> = std::result::Result<T, DriverError>;
