//! Errors produced while parsing or evaluating predicate expressions.

use crate::parser::ParseError;

/// Broad classification of an [`Error`].
///
/// Hosts usually only need to know which of these happened; the error message
/// carries the details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Lexical or grammatical failure, bad regex pattern, or wrong call arity
    Syntax,
    /// Operator or function applied to incompatible operand types
    TypeMismatch,
    /// Data outside the supported shape set
    UnsupportedType,
    /// Token maps to no known operator
    UnsupportedOperator,
    /// Object path segment absent from the data
    MissingKey,
    /// Array path segment out of bounds
    IndexOutOfRange,
    /// Unresolved function name, or invalid name at registration
    InvalidFunction,
    /// Function name registered twice
    DuplicateFunction,
    /// Error raised by a host-registered function
    Function,
    /// Condition that a valid tree should never reach
    Unexpected,
}

/// Errors that can occur while parsing, building a context, or evaluating.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("syntax error: {0}")]
    Syntax(#[from] ParseError),

    #[error("syntax error: {0}")]
    Arity(String),

    #[error("invalid regular expression: {0}")]
    InvalidRegex(#[from] regex::Error),

    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    #[error("unsupported operator {0:?}")]
    UnsupportedOperator(String),

    #[error("variable segment {0:?} does not map to context data")]
    MissingKey(String),

    #[error("index {index} out of range in {segment:?} (length {len})")]
    IndexOutOfRange {
        segment: String,
        index: usize,
        len: usize,
    },

    #[error("invalid function: {0}")]
    InvalidFunction(String),

    #[error("function name {0:?} already in use")]
    DuplicateFunction(String),

    #[error("{0}")]
    Function(String),

    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// Builds an error for a host-registered function to return.
    pub fn function(message: impl Into<String>) -> Self {
        Error::Function(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Syntax(_) | Error::Arity(_) | Error::InvalidRegex(_) => ErrorKind::Syntax,
            Error::TypeMismatch(_) => ErrorKind::TypeMismatch,
            Error::UnsupportedType(_) => ErrorKind::UnsupportedType,
            Error::UnsupportedOperator(_) => ErrorKind::UnsupportedOperator,
            Error::MissingKey(_) => ErrorKind::MissingKey,
            Error::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Error::InvalidFunction(_) => ErrorKind::InvalidFunction,
            Error::DuplicateFunction(_) => ErrorKind::DuplicateFunction,
            Error::Function(_) => ErrorKind::Function,
            Error::Unexpected(_) => ErrorKind::Unexpected,
        }
    }

    pub(crate) fn arity(function: &str, expected: usize, got: usize) -> Self {
        Error::Arity(format!(
            "wrong number of arguments for {function}, expected {expected}, got {got}"
        ))
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
