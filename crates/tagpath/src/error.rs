//! Error types for tagpath
//!
//! Only strict-mode tree building can fail. Query misses are an
//! [`Outcome`](crate::query::Outcome), not an error, and the lexer is
//! infallible by contract.

use std::fmt;
use thiserror::Error;

/// Error kind for detailed categorization
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    MismatchedCloseTag { expected: String, found: String },
    UnbalancedDocument,
    MaxDepthExceeded { max: u16 },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MismatchedCloseTag { expected, found } => {
                write!(f, "mismatched close tag: expected '{expected}', found '{found}'")
            }
            Self::UnbalancedDocument => write!(f, "unbalanced document"),
            Self::MaxDepthExceeded { max } => write!(f, "max depth exceeded: {max}"),
        }
    }
}

/// Main error type for tagpath.
///
/// Positions are indices into the token stream; the tokens themselves
/// carry no byte spans.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    token_index: Option<usize>,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            token_index: None,
            message,
        }
    }

    /// Create error at a specific token index
    pub fn at(kind: ErrorKind, token_index: usize) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            token_index: Some(token_index),
            message,
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn token_index(&self) -> Option<usize> {
        self.token_index
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.token_index {
            Some(index) => write!(f, "error at token {index}: {}", self.message),
            None => write!(f, "error: {}", self.message),
        }
    }
}

/// Result type alias for tagpath
pub type Result<T> = std::result::Result<T, Error>;
