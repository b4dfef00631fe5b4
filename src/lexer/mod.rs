//! Lexical analysis for Hetu source text.
//!
//! This module contains the lexer that turns source text into a stream of
//! tokens for a parser. It handles:
//!
//! - Tokenization driven by anchored regex patterns and a punctuation table
//! - Keyword classification of identifiers through a reserved-word table
//! - Integer, float and string literal decoding
//! - Whitespace and `//` comment skipping (or emission, when configured)
//! - Line and column tracking for every token span

pub mod config;
pub mod lexer;
pub mod tokens;
