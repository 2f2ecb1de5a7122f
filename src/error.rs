//! Error types

use thiserror::Error;

/// Failure to resolve a phrase or amount/unit pair into a duration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty duration phrase")]
    Empty,

    #[error("invalid duration phrase: {0}")]
    InvalidFormat(String),

    #[error("unknown time unit: {0}")]
    UnknownUnit(String),

    #[error("duration out of range: {0}")]
    Overflow(String),
}
