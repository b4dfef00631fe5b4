use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A lexical error and the position where the offending condition was
/// detected.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{position}: {internal_error}")]
pub struct LexError {
    internal_error: LexErrorKind,
    position: Position,
}

impl LexError {
    pub fn new(error_impl: LexErrorKind, position: Position) -> Self {
        LexError {
            internal_error: error_impl,
            position,
        }
    }

    pub fn kind(&self) -> &LexErrorKind {
        &self.internal_error
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            LexErrorKind::UnterminatedString { .. } => "UnterminatedString",
            LexErrorKind::InvalidEscape { .. } => "InvalidEscape",
            LexErrorKind::InvalidNumber { .. } => "InvalidNumber",
            LexErrorKind::UnexpectedCharacter { .. } => "UnexpectedCharacter",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            LexErrorKind::UnterminatedString { quote } => ErrorTip::Suggestion(format!(
                "String literal is missing its closing `{}` before the end of the line",
                quote
            )),
            LexErrorKind::InvalidEscape { escape } => ErrorTip::Suggestion(format!(
                "Unknown escape `\\{}`, supported escapes are \\\\ \\' \\\" \\n \\t \\0",
                escape
            )),
            LexErrorKind::InvalidNumber { text } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the 64-bit limit?",
                text
            )),
            LexErrorKind::UnexpectedCharacter { .. } => ErrorTip::None,
        }
    }
}

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
pub enum LexErrorKind {
    #[error("unterminated string literal opened with {quote:?}")]
    UnterminatedString { quote: char },
    #[error("invalid escape sequence: \\{escape}")]
    InvalidEscape { escape: char },
    #[error("invalid number literal: {text:?}")]
    InvalidNumber { text: String },
    #[error("unexpected character: {character:?}")]
    UnexpectedCharacter { character: char },
}
