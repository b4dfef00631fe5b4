use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

/// Longest literal in the punctuation table.
pub const MAX_PUNCTUATION_LEN: usize = 3;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, Keyword> = {
        let mut map = HashMap::new();
        map.insert("null", Keyword::Null);
        map.insert("static", Keyword::Static);
        map.insert("var", Keyword::Var);
        map.insert("let", Keyword::Let);
        map.insert("any", Keyword::Any);
        map.insert("typedef", Keyword::Typedef);
        map.insert("namespace", Keyword::Namespace);
        map.insert("as", Keyword::As);
        map.insert("abstract", Keyword::Abstract);
        map.insert("class", Keyword::Class);
        map.insert("fun", Keyword::Fun);
        map.insert("construct", Keyword::Construct);
        map.insert("get", Keyword::Get);
        map.insert("set", Keyword::Set);
        map.insert("this", Keyword::This);
        map.insert("super", Keyword::Super);
        map.insert("extends", Keyword::Extends);
        map.insert("implements", Keyword::Implements);
        map.insert("mixin", Keyword::Mixin);
        map.insert("external", Keyword::External);
        map.insert("library", Keyword::Library);
        map.insert("import", Keyword::Import);
        map.insert("break", Keyword::Break);
        map.insert("continue", Keyword::Continue);
        map.insert("for", Keyword::For);
        map.insert("in", Keyword::In);
        map.insert("if", Keyword::If);
        map.insert("else", Keyword::Else);
        map.insert("return", Keyword::Return);
        map.insert("throw", Keyword::Throw);
        map.insert("while", Keyword::While);
        map.insert("do", Keyword::Do);
        map.insert("when", Keyword::When);
        map.insert("is", Keyword::Is);
        map
    };

    /// Operators and delimiters, keyed by their literal text. Lookups must try
    /// the longest candidate first.
    pub static ref PUNCTUATION_LOOKUP: HashMap<&'static str, Punctuation> = {
        let mut map = HashMap::new();
        map.insert("...", Punctuation::Ellipsis);

        map.insert("||", Punctuation::Or);
        map.insert("&&", Punctuation::And);
        map.insert("==", Punctuation::Equals);
        map.insert("!=", Punctuation::NotEquals);
        map.insert("<=", Punctuation::LessEquals);
        map.insert(">=", Punctuation::GreaterEquals);

        map.insert(">", Punctuation::Greater);
        map.insert("<", Punctuation::Less);
        map.insert("=", Punctuation::Assignment);
        map.insert("/", Punctuation::Slash);
        map.insert("%", Punctuation::Percent);
        map.insert("+", Punctuation::Plus);
        map.insert("*", Punctuation::Star);
        map.insert("-", Punctuation::Dash);
        map.insert("?", Punctuation::Question);
        map.insert("!", Punctuation::Not);
        map.insert(",", Punctuation::Comma);
        map.insert(":", Punctuation::Colon);
        map.insert(";", Punctuation::Semicolon);
        map.insert("{", Punctuation::OpenCurly);
        map.insert("}", Punctuation::CloseCurly);
        map.insert("[", Punctuation::OpenBracket);
        map.insert("]", Punctuation::CloseBracket);
        map.insert("(", Punctuation::OpenParen);
        map.insert(")", Punctuation::CloseParen);
        map.insert(".", Punctuation::Dot);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Keyword {
    Null,
    Static,
    Var,
    Let,
    Any,
    Typedef,
    Namespace,
    As,
    Abstract,
    Class,
    Fun,
    Construct,
    Get,
    Set,
    This,
    Super,
    Extends,
    Implements,
    Mixin,
    External,
    Library,
    Import,
    Break,
    Continue,
    For,
    In,
    If,
    Else,
    Return,
    Throw,
    While,
    Do,
    When,
    Is,
}

impl Keyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Null => "null",
            Keyword::Static => "static",
            Keyword::Var => "var",
            Keyword::Let => "let",
            Keyword::Any => "any",
            Keyword::Typedef => "typedef",
            Keyword::Namespace => "namespace",
            Keyword::As => "as",
            Keyword::Abstract => "abstract",
            Keyword::Class => "class",
            Keyword::Fun => "fun",
            Keyword::Construct => "construct",
            Keyword::Get => "get",
            Keyword::Set => "set",
            Keyword::This => "this",
            Keyword::Super => "super",
            Keyword::Extends => "extends",
            Keyword::Implements => "implements",
            Keyword::Mixin => "mixin",
            Keyword::External => "external",
            Keyword::Library => "library",
            Keyword::Import => "import",
            Keyword::Break => "break",
            Keyword::Continue => "continue",
            Keyword::For => "for",
            Keyword::In => "in",
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::Return => "return",
            Keyword::Throw => "throw",
            Keyword::While => "while",
            Keyword::Do => "do",
            Keyword::When => "when",
            Keyword::Is => "is",
        }
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Punctuation {
    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Or,
    And,

    Dot,
    Ellipsis,
    Semicolon,
    Colon,
    Question,
    Comma,

    Plus,
    Dash,
    Slash,
    Star,
    Percent,
}

impl Punctuation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Punctuation::OpenBracket => "[",
            Punctuation::CloseBracket => "]",
            Punctuation::OpenCurly => "{",
            Punctuation::CloseCurly => "}",
            Punctuation::OpenParen => "(",
            Punctuation::CloseParen => ")",
            Punctuation::Assignment => "=",
            Punctuation::Equals => "==",
            Punctuation::Not => "!",
            Punctuation::NotEquals => "!=",
            Punctuation::Less => "<",
            Punctuation::LessEquals => "<=",
            Punctuation::Greater => ">",
            Punctuation::GreaterEquals => ">=",
            Punctuation::Or => "||",
            Punctuation::And => "&&",
            Punctuation::Dot => ".",
            Punctuation::Ellipsis => "...",
            Punctuation::Semicolon => ";",
            Punctuation::Colon => ":",
            Punctuation::Question => "?",
            Punctuation::Comma => ",",
            Punctuation::Plus => "+",
            Punctuation::Dash => "-",
            Punctuation::Slash => "/",
            Punctuation::Star => "*",
            Punctuation::Percent => "%",
        }
    }
}

impl Display for Punctuation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The delimiter a string literal was written with.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Quote {
    Single,
    Double,
}

impl Quote {
    pub fn from_char(c: char) -> Option<Quote> {
        match c {
            '\'' => Some(Quote::Single),
            '"' => Some(Quote::Double),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Quote::Single => '\'',
            Quote::Double => '"',
        }
    }
}

/// Token payloads own their text, so tokens outlive the source buffer.
#[derive(Debug, PartialEq, Clone)]
pub enum TokenKind {
    EOF,
    Identifier(String),
    Keyword(Keyword),
    Integer { value: i64, text: String },
    Float { value: f64, text: String },
    String { value: String, quote: Quote },
    Punctuation(Punctuation),
    /// Text after `//`, without the line terminator.
    Comment(String),
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::EOF => "EndOfFile",
            TokenKind::Identifier(_) => "Identifier",
            TokenKind::Keyword(_) => "Keyword",
            TokenKind::Integer { .. } => "IntegerLiteral",
            TokenKind::Float { .. } => "FloatLiteral",
            TokenKind::String { .. } => "StringLiteral",
            TokenKind::Punctuation(_) => "Punctuation",
            TokenKind::Comment(_) => "Comment",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::EOF => write!(f, "{}", self.name()),
            TokenKind::Identifier(name) => write!(f, "{}({})", self.name(), name),
            TokenKind::Keyword(keyword) => write!(f, "{}({})", self.name(), keyword),
            TokenKind::Integer { value, .. } => write!(f, "{}({})", self.name(), value),
            TokenKind::Float { value, .. } => write!(f, "{}({})", self.name(), value),
            TokenKind::String { value, .. } => write!(f, "{}({})", self.name(), value),
            TokenKind::Punctuation(punct) => write!(f, "{}({})", self.name(), punct),
            TokenKind::Comment(text) => write!(f, "{}({:?})", self.name(), text),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ {}", self.kind, self.span.start)
    }
}

impl Token {
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EOF
    }

    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.kind == TokenKind::Keyword(keyword)
    }

    pub fn is_punctuation(&self, punct: Punctuation) -> bool {
        self.kind == TokenKind::Punctuation(punct)
    }
}
