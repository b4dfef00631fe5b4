//! Integration tests for end-to-end tokenization.
//!
//! These tests drive the public API the way a parser would: full programs in,
//! token kind sequences out.

use hetu_lexer::{
    get_line_at_position, tokenize, Keyword, Lexer, LexerConfig, Punctuation, Quote, Token,
    TokenKind,
};

const PROGRAM: &str = "fun main(): void {\n  print('hello world', 6 * 7)\n}";

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|token| token.kind.clone()).collect()
}

fn expected_program() -> Vec<TokenKind> {
    vec![
        TokenKind::Keyword(Keyword::Fun),
        TokenKind::Identifier("main".to_string()),
        TokenKind::Punctuation(Punctuation::OpenParen),
        TokenKind::Punctuation(Punctuation::CloseParen),
        TokenKind::Punctuation(Punctuation::Colon),
        TokenKind::Identifier("void".to_string()),
        TokenKind::Punctuation(Punctuation::OpenCurly),
        TokenKind::Identifier("print".to_string()),
        TokenKind::Punctuation(Punctuation::OpenParen),
        TokenKind::String {
            value: "hello world".to_string(),
            quote: Quote::Single,
        },
        TokenKind::Punctuation(Punctuation::Comma),
        TokenKind::Integer {
            value: 6,
            text: "6".to_string(),
        },
        TokenKind::Punctuation(Punctuation::Star),
        TokenKind::Integer {
            value: 7,
            text: "7".to_string(),
        },
        TokenKind::Punctuation(Punctuation::CloseParen),
        TokenKind::Punctuation(Punctuation::CloseCurly),
        TokenKind::EOF,
    ]
}

#[test]
fn test_tokenize_program() {
    let tokens = tokenize(PROGRAM, LexerConfig::default()).unwrap();

    assert_eq!(kinds(&tokens), expected_program());
}

#[test]
fn test_program_spans_match_source() {
    let tokens = tokenize(PROGRAM, LexerConfig::default()).unwrap();

    assert_eq!(tokens[7].span.text(PROGRAM), "print");
    assert_eq!(tokens[7].span.start.line, 2);
    assert_eq!(tokens[7].span.start.column, 3);

    assert_eq!(tokens[9].span.text(PROGRAM), "'hello world'");

    let close = &tokens[15];
    assert_eq!(close.span.start.line, 3);
    assert_eq!(close.span.start.column, 1);

    let eof = tokens.last().unwrap();
    assert_eq!(eof.span.start.offset, PROGRAM.len());
}

#[test]
fn test_leading_comment_is_skipped() {
    let source = format!("// comment\n{}", PROGRAM);
    let tokens = tokenize(&source, LexerConfig::default()).unwrap();

    assert_eq!(kinds(&tokens), expected_program());
}

#[test]
fn test_leading_comment_is_emitted() {
    let source = format!("// comment\n{}", PROGRAM);
    let config = LexerConfig::default().with_emit_comments(true);
    let tokens = tokenize(&source, config).unwrap();

    let mut expected = vec![TokenKind::Comment(" comment".to_string())];
    expected.extend(expected_program());

    assert_eq!(kinds(&tokens), expected);
}

#[test]
fn test_lexer_as_iterator() {
    let tokens: Result<Vec<Token>, _> = Lexer::with_defaults(PROGRAM).collect();

    assert_eq!(kinds(&tokens.unwrap()), expected_program());
}

#[test]
fn test_error_reports_line_and_column() {
    let source = "fun main() {\n  print('oops)\n}";
    let err = tokenize(source, LexerConfig::default()).unwrap_err();

    assert_eq!(err.get_error_name(), "UnterminatedString");
    assert_eq!(err.get_position().line, 2);
    assert_eq!(err.get_position().column, 9);
    assert!(err.to_string().starts_with("2:9: "));

    let (line, text, column) = get_line_at_position(source, err.get_position().offset).unwrap();
    assert_eq!(line, 2);
    assert_eq!(text, "  print('oops)\n");
    assert_eq!(column, 8);
}

#[test]
fn test_resynchronize_after_error() {
    let mut lexer = Lexer::with_defaults("a $ b");
    let mut recovered = vec![];
    let mut errors = 0;

    loop {
        match lexer.next_token() {
            Ok(token) if token.is_eof() => break,
            Ok(token) => recovered.push(token.kind),
            Err(_) => {
                errors += 1;
                lexer.skip_char();
            }
        }
    }

    assert_eq!(errors, 1);
    assert_eq!(
        recovered,
        vec![
            TokenKind::Identifier("a".to_string()),
            TokenKind::Identifier("b".to_string())
        ]
    );
}
