//! Error types for lexical analysis.
//!
//! - `LexError` pairs an error kind with the source position it was detected at
//! - `LexErrorKind` is the closed set of lexical failures
//! - `ErrorTip` carries an optional human-readable suggestion for drivers

pub mod errors;
