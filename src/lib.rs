#![allow(clippy::module_inception)]

use std::fmt::Display;

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

pub use errors::errors::{ErrorTip, LexError, LexErrorKind};
pub use lexer::config::LexerConfig;
pub use lexer::lexer::{tokenize, Lexer};
pub use lexer::tokens::{Keyword, Punctuation, Quote, Token, TokenKind};

/// A location in the source text. `line` and `column` are 1-based, `column`
/// counts characters rather than bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub offset: usize,
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn start() -> Self {
        Position {
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Moves the position past `text`, which must be the source slice that
    /// starts at this position.
    pub fn advance(&mut self, text: &str) {
        for c in text.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }

        self.offset += text.len();
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::start()
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Half-open range of source positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end.offset - self.start.offset
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The slice of `source` this span covers.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start.offset..self.end.offset]
    }
}

/// Returns the 1-based line number, the full line (including its newline)
/// and the byte offset within that line for `position`.
///
/// The end-of-input offset is accepted so that end-of-file diagnostics can be
/// rendered; anything past it yields `None`.
pub fn get_line_at_position(content: &str, position: usize) -> Option<(usize, &str, usize)> {
    if position > content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;
    let mut last_line = "";

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&position) {
            let line_pos = position - start;
            return Some((line_number, line, line_pos));
        }

        last_line = line;
        start = end;
        line_number += 1;
    }

    if content.is_empty() || content.ends_with('\n') {
        Some((line_number, "", 0))
    } else {
        Some((line_number - 1, last_line, last_line.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::{get_line_at_position, Position};

    const CONTENT: &str = "Hello, world!\nThis is a test file\n\nTesting { }\n";

    #[test]
    fn test_get_line_at_position() {
        let (line_number, line, line_pos) = get_line_at_position(CONTENT, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = get_line_at_position(CONTENT, 43).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let (line_number, line, line_pos) = get_line_at_position(CONTENT, CONTENT.len()).unwrap();
        assert_eq!(line_number, 5);
        assert_eq!(line, "");
        assert_eq!(line_pos, 0);

        let (line_number, line, line_pos) = get_line_at_position("fun main", 8).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "fun main");
        assert_eq!(line_pos, 8);

        assert!(get_line_at_position("abc", 4).is_none());
    }

    #[test]
    fn test_position_advance() {
        let mut pos = Position::start();
        pos.advance("ab\ncé");

        assert_eq!(pos.offset, 6);
        assert_eq!(pos.line, 2);
        assert_eq!(pos.column, 3);
        assert_eq!(pos.to_string(), "2:3");
    }
}
