use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{
    errors::errors::{LexError, LexErrorKind},
    Position, MK_SPAN, MK_TOKEN,
};

use super::{
    config::LexerConfig,
    tokens::{Quote, Token, TokenKind, MAX_PUNCTUATION_LEN, PUNCTUATION_LOOKUP, RESERVED_LOOKUP},
};

// Every pattern is anchored: it is only ever matched against the remainder
// of the source starting at the cursor.
lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"^[ \t\r\n]+").unwrap();
    static ref COMMENT: Regex = Regex::new(r"^//[^\r\n]*").unwrap();
    static ref UNICODE_SYMBOL: Regex = Regex::new(r"^[_\p{L}][_\p{L}0-9]*").unwrap();
    static ref ASCII_SYMBOL: Regex = Regex::new(r"^[_a-zA-Z][_a-zA-Z0-9]*").unwrap();
    static ref NUMBER: Regex = Regex::new(r"^[0-9]+(\.[0-9]+)?").unwrap();
    static ref STRING_START: Regex = Regex::new(r#"^['"]"#).unwrap();
}

pub type RegexHandler = for<'a> fn(&mut Lexer<'a>, &'a str) -> Result<Token, LexError>;

#[derive(Clone)]
pub struct RegexPattern {
    regex: &'static Regex,
    handler: RegexHandler,
}

/// On-demand scanner over a borrowed source buffer.
///
/// Each call to [`Lexer::next_token`] skips whitespace (and comments, unless
/// they are emitted) and produces exactly one token. Once the input is
/// exhausted the lexer keeps returning the same `EOF` token. Errors leave the
/// cursor at the start of the offending token, so retrying reports the same
/// error until [`Lexer::skip_char`] is used to resynchronize.
#[derive(Clone)]
pub struct Lexer<'a> {
    patterns: Vec<RegexPattern>,
    source: &'a str,
    pos: Position,
    config: LexerConfig,
    halted: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, config: LexerConfig) -> Lexer<'a> {
        let symbol: &'static Regex = if config.allow_unicode_identifiers {
            &*UNICODE_SYMBOL
        } else {
            &*ASCII_SYMBOL
        };

        let mut patterns = vec![
            RegexPattern { regex: symbol, handler: symbol_handler },
            RegexPattern { regex: &*NUMBER, handler: number_handler },
            RegexPattern { regex: &*STRING_START, handler: string_handler },
        ];

        if config.emit_comments {
            patterns.push(RegexPattern { regex: &*COMMENT, handler: comment_handler });
        }

        Lexer {
            patterns,
            source,
            pos: Position::start(),
            config,
            halted: false,
        }
    }

    pub fn with_defaults(source: &'a str) -> Lexer<'a> {
        Lexer::new(source, LexerConfig::default())
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Position of the cursor, i.e. where the next token scan starts.
    pub fn position(&self) -> Position {
        self.pos
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos.offset..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos.offset >= self.source.len()
    }

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_trivia();

        if self.at_eof() {
            return Ok(MK_TOKEN!(TokenKind::EOF, MK_SPAN!(self.pos, self.pos)));
        }

        let result = self.scan_token();

        match &result {
            Ok(token) => trace!(target: "hetu::lexer", token = %token, "scanned token"),
            Err(err) => debug!(
                target: "hetu::lexer",
                error = err.get_error_name(),
                position = %err.get_position(),
                "lexical error"
            ),
        }

        result
    }

    /// Moves the cursor past a single character so that scanning can resume
    /// after an error. Does nothing at the end of input.
    pub fn skip_char(&mut self) {
        let remaining = self.remainder();

        if let Some(c) = remaining.chars().next() {
            self.pos.advance(&remaining[..c.len_utf8()]);
            self.halted = false;
        }
    }

    fn skip_trivia(&mut self) {
        loop {
            let remaining = self.remainder();
            let skipped = WHITESPACE.find(remaining).or_else(|| {
                if self.config.emit_comments {
                    None
                } else {
                    COMMENT.find(remaining)
                }
            });

            match skipped {
                Some(matched) => self.pos.advance(matched.as_str()),
                None => break,
            }
        }
    }

    fn scan_token(&mut self) -> Result<Token, LexError> {
        let remaining = self.remainder();
        let matched = self.patterns.iter().find_map(|pattern| {
            pattern
                .regex
                .find(remaining)
                .map(|found| (pattern.handler, found.as_str()))
        });

        match matched {
            Some((handler, text)) => handler(self, text),
            None => self.punctuation(remaining),
        }
    }

    /// Longest match against the punctuation table.
    fn punctuation(&mut self, remaining: &'a str) -> Result<Token, LexError> {
        for len in (1..=MAX_PUNCTUATION_LEN).rev() {
            let Some(candidate) = remaining.get(..len) else {
                continue;
            };

            if let Some(punct) = PUNCTUATION_LOOKUP.get(candidate) {
                return Ok(self.emit(TokenKind::Punctuation(*punct), candidate));
            }
        }

        let character = remaining.chars().next().unwrap_or_default();
        Err(LexError::new(
            LexErrorKind::UnexpectedCharacter { character },
            self.pos,
        ))
    }

    fn emit(&mut self, kind: TokenKind, text: &str) -> Token {
        let start = self.pos;
        self.pos.advance(text);
        MK_TOKEN!(kind, MK_SPAN!(start, self.pos))
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token, LexError>;

    /// Yields tokens up to and including `EOF`, or up to the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }

        let result = self.next_token();

        match &result {
            Ok(token) if !token.is_eof() => {}
            _ => self.halted = true,
        }

        Some(result)
    }
}

fn symbol_handler<'a>(lexer: &mut Lexer<'a>, value: &'a str) -> Result<Token, LexError> {
    let kind = match RESERVED_LOOKUP.get(value) {
        Some(keyword) => TokenKind::Keyword(*keyword),
        None => TokenKind::Identifier(String::from(value)),
    };

    Ok(lexer.emit(kind, value))
}

fn number_handler<'a>(lexer: &mut Lexer<'a>, matched: &'a str) -> Result<Token, LexError> {
    let position = lexer.pos;
    let invalid = || {
        LexError::new(
            LexErrorKind::InvalidNumber {
                text: String::from(matched),
            },
            position,
        )
    };

    let kind = if matched.contains('.') {
        match matched.parse::<f64>() {
            Ok(value) if value.is_finite() => TokenKind::Float {
                value,
                text: String::from(matched),
            },
            _ => return Err(invalid()),
        }
    } else {
        match matched.parse::<i64>() {
            Ok(value) => TokenKind::Integer {
                value,
                text: String::from(matched),
            },
            Err(_) => return Err(invalid()),
        }
    };

    Ok(lexer.emit(kind, matched))
}

fn comment_handler<'a>(lexer: &mut Lexer<'a>, matched: &'a str) -> Result<Token, LexError> {
    let text = String::from(&matched[2..]);
    Ok(lexer.emit(TokenKind::Comment(text), matched))
}

fn string_handler<'a>(lexer: &mut Lexer<'a>, opening: &'a str) -> Result<Token, LexError> {
    let remaining = lexer.remainder();
    let quote_char = opening.chars().next().unwrap_or('"');
    let quote = Quote::from_char(quote_char).unwrap_or(Quote::Double);

    let start = lexer.pos;
    let unterminated = || {
        LexError::new(
            LexErrorKind::UnterminatedString { quote: quote_char },
            start,
        )
    };

    let mut result = String::new();
    let mut chars = remaining.char_indices().skip(1);

    while let Some((index, ch)) = chars.next() {
        if ch == quote_char {
            let literal = &remaining[..index + ch.len_utf8()];
            return Ok(lexer.emit(TokenKind::String { value: result, quote }, literal));
        }

        match ch {
            '\n' => return Err(unterminated()),
            '\\' => match chars.next() {
                Some((_, 'n')) => result.push('\n'),
                Some((_, 't')) => result.push('\t'),
                Some((_, '0')) => result.push('\0'),
                Some((_, '\\')) => result.push('\\'),
                Some((_, '\'')) => result.push('\''),
                Some((_, '"')) => result.push('"'),
                Some((_, '\n')) | None => return Err(unterminated()),
                Some((_, escape)) => {
                    let mut position = start;
                    position.advance(&remaining[..index]);

                    return Err(LexError::new(
                        LexErrorKind::InvalidEscape { escape },
                        position,
                    ));
                }
            },
            _ => result.push(ch),
        }
    }

    Err(unterminated())
}

/// Scans the whole of `source`, stopping at the first error. On success the
/// last token is always the single `EOF` token.
pub fn tokenize(source: &str, config: LexerConfig) -> Result<Vec<Token>, LexError> {
    let mut lex = Lexer::new(source, config);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token()?;
        let done = token.is_eof();

        tokens.push(token);

        if done {
            break;
        }
    }

    debug!(target: "hetu::lexer", tokens = tokens.len(), bytes = source.len(), "tokenized source");
    Ok(tokens)
}
