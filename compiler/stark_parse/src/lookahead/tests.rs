#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;
use stark_lexer_core::Utf8Source;

fn lookahead(source: &str) -> TokenLookahead<Utf8Source<'_>> {
    TokenLookahead::new(Lexer::new(Utf8Source::new(source.as_bytes(), "")))
}

fn drain<S: SourceView>(tokens: &mut TokenLookahead<S>) -> Vec<TokenKind> {
    let mut kinds = Vec::new();
    loop {
        let token = tokens.advance();
        kinds.push(token.kind);
        if token.kind == TokenKind::Eof {
            return kinds;
        }
    }
}

#[test]
fn test_advance_skips_whitespace_and_comments() {
    let mut tokens = lookahead("a /* b */ c // d\n/// e\n");
    assert_eq!(
        drain(&mut tokens),
        vec![
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::NewLine,
            TokenKind::NewLine,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_newlines_hidden_while_suppressed() {
    let mut tokens = lookahead("a\n\nb\nc");
    tokens.suppress_newlines();
    assert_eq!(tokens.advance().kind, TokenKind::Identifier);
    assert_eq!(tokens.advance().kind, TokenKind::Identifier);
    tokens.restore_newlines();
    assert_eq!(tokens.newline_suppression(), 0);
    assert_eq!(
        drain(&mut tokens),
        vec![TokenKind::NewLine, TokenKind::Identifier, TokenKind::Eof]
    );
}

#[test]
fn test_suppression_nests() {
    let mut tokens = lookahead("a");
    tokens.suppress_newlines();
    tokens.suppress_newlines();
    tokens.restore_newlines();
    assert!(tokens.is_hidden(TokenKind::NewLine));
    tokens.restore_newlines();
    assert!(!tokens.is_hidden(TokenKind::NewLine));
}

#[test]
fn test_peek_does_not_consume() {
    let mut tokens = lookahead("a b c");
    assert_eq!(tokens.peek(1, false).start.offset, 0);
    assert_eq!(tokens.peek(2, false).start.offset, 2);
    assert_eq!(tokens.peek(3, false).start.offset, 4);
    assert_eq!(tokens.advance().start.offset, 0);
    assert_eq!(tokens.advance().start.offset, 2);
    assert_eq!(tokens.advance().start.offset, 4);
    assert_eq!(tokens.advance(), Token::EOF);
}

#[test]
fn test_peek_with_hidden_tokens() {
    let mut tokens = lookahead("a b");
    assert_eq!(tokens.peek(2, true).kind, TokenKind::Whitespace);
    assert_eq!(tokens.peek(2, false).kind, TokenKind::Identifier);
}

#[test]
fn test_peek_past_end_returns_eof() {
    let mut tokens = lookahead("a");
    assert_eq!(tokens.peek(10, false), Token::EOF);
    assert_eq!(tokens.peek(10, true), Token::EOF);
    assert_eq!(drain(&mut tokens), vec![TokenKind::Identifier, TokenKind::Eof]);
    assert_eq!(tokens.peek(1, false), Token::EOF);
    assert_eq!(tokens.advance(), Token::EOF);
}

#[test]
fn test_queued_newline_is_filtered_when_dequeued() {
    // Peeked while suppressed, dequeued after: the newline is visible again.
    let mut tokens = lookahead("a\nb");
    tokens.suppress_newlines();
    assert_eq!(tokens.peek(2, false).kind, TokenKind::Identifier);
    tokens.restore_newlines();
    assert_eq!(
        drain(&mut tokens),
        vec![
            TokenKind::Identifier,
            TokenKind::NewLine,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_lexer_is_returned() {
    let mut tokens = lookahead("0x");
    drain(&mut tokens);
    let mut lexer = tokens.into_lexer();
    assert_eq!(lexer.take_diagnostics().len(), 1);
}

#[test]
fn test_trivia_always_hidden() {
    let mut tokens = lookahead("");
    for kind in [TokenKind::Whitespace, TokenKind::CommentDoc, TokenKind::CommentMultiLine] {
        assert!(tokens.is_hidden(kind));
    }
    assert!(!tokens.is_hidden(TokenKind::NewLine));
    assert!(!tokens.is_hidden(TokenKind::Identifier));
    tokens.suppress_newlines();
    assert!(tokens.is_hidden(TokenKind::NewLine));
    assert!(!tokens.is_hidden(TokenKind::Semicolon));
}
