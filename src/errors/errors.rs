use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// Error returned by [`tokenize`](crate::lexer::lexer::tokenize).
pub type LexError = Error;

pub type LexResult<T> = Result<T, LexError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnterminatedLiteral => "UnterminatedLiteral",
            ErrorImpl::DanglingLiteralDelimiter { .. } => "DanglingLiteralDelimiter",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnterminatedLiteral => ErrorTip::Suggestion(String::from(
                "Add a closing `\"` to the quoted string",
            )),
            ErrorImpl::DanglingLiteralDelimiter { found } => ErrorTip::Suggestion(format!(
                "Found `{}` right after a closing quote, separate it with whitespace",
                found
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at position {}", self.internal_error, self.position.0)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("quoted string has no closing quote")]
    UnterminatedLiteral,
    #[error("quoted string ended with no whitespace or delimiter after it: {found:?}")]
    DanglingLiteralDelimiter { found: char },
}
