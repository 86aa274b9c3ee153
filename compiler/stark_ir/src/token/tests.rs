#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;
use stark_lexer_core::{Utf16Source, Utf8Source};

#[test]
fn kinds_fit_in_a_u128_bitset() {
    assert!(TokenKind::COUNT <= 128);
    assert_eq!(TokenKind::Eof.discriminant_index() as usize, TokenKind::COUNT - 1);
}

#[test]
fn keywords_are_sorted_and_spelled() {
    assert_eq!(TokenKind::KEYWORDS.len(), 70);
    let spellings: Vec<&str> = TokenKind::KEYWORDS
        .iter()
        .map(|kind| kind.text().unwrap())
        .collect();
    let mut sorted = spellings.clone();
    sorted.sort_unstable();
    assert_eq!(spellings, sorted);
    assert!(TokenKind::KEYWORDS.iter().all(|kind| kind.is_keyword()));
}

#[test]
fn canonical_text() {
    assert_eq!(TokenKind::LeftBrace.text(), Some("{"));
    assert_eq!(TokenKind::Backslash.text(), Some("\\"));
    assert_eq!(TokenKind::Module.text(), Some("module"));
    assert_eq!(TokenKind::Identifier.text(), None);
    assert_eq!(TokenKind::Eof.text(), None);
}

#[test]
fn non_keywords() {
    for kind in [TokenKind::Identifier, TokenKind::Underscores, TokenKind::Semicolon, TokenKind::Eof] {
        assert!(!kind.is_keyword(), "{kind:?}");
    }
}

#[test]
fn display_uses_spelling_when_present() {
    assert_eq!(TokenKind::Colon.to_string(), ":");
    assert_eq!(TokenKind::Import.to_string(), "import");
    assert_eq!(TokenKind::NewLine.to_string(), "NewLine");
}

#[test]
fn token_text_from_both_views() {
    let token = Token::new(
        TokenKind::Identifier,
        TextPosition::new(0, 0, 0),
        TextPosition::new(4, 0, 4),
    );
    let units: Vec<u16> = "hello world".encode_utf16().collect();
    assert_eq!(token.text(&Utf16Source::new(&units, "")), "hello");
    assert_eq!(token.text(&Utf8Source::new(b"hello world", "")), "hello");
}

#[test]
fn eof_token() {
    assert_eq!(Token::EOF.kind, TokenKind::Eof);
    assert!(Token::EOF.start.is_eof() && Token::EOF.end.is_eof());
    assert_eq!(Token::EOF.text(&Utf8Source::new(b"x", "")), "<eof>");
}

#[test]
fn span_carries_path() {
    let path: std::sync::Arc<str> = "m.sk".into();
    let token = Token::new(TokenKind::Dot, TextPosition::new(3, 1, 0), TextPosition::new(3, 1, 0));
    let span = token.span(&path);
    assert_eq!(span.to_string(), "m.sk(2,0)-(2,0)");
    assert_eq!(span.length(), 1);
}

#[test]
fn trivia_is_whitespace_and_comments() {
    for kind in [
        TokenKind::Whitespace,
        TokenKind::Comment,
        TokenKind::CommentDoc,
        TokenKind::CommentMultiLine,
    ] {
        assert!(kind.is_trivia(), "{kind:?}");
    }
    for kind in [TokenKind::NewLine, TokenKind::Identifier, TokenKind::Semicolon, TokenKind::Eof] {
        assert!(!kind.is_trivia(), "{kind:?}");
    }
}
