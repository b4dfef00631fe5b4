/// Options recognised by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerConfig {
    /// Produce `Comment` tokens instead of skipping `//` comments.
    pub emit_comments: bool,
    /// Accept any Unicode letter in identifiers; ASCII letters only when off.
    pub allow_unicode_identifiers: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            emit_comments: false,
            allow_unicode_identifiers: true,
        }
    }
}

impl LexerConfig {
    pub fn with_emit_comments(mut self, emit_comments: bool) -> Self {
        self.emit_comments = emit_comments;
        self
    }

    pub fn with_unicode_identifiers(mut self, allow: bool) -> Self {
        self.allow_unicode_identifiers = allow;
        self
    }
}
