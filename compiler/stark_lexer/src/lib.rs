//! Lexer for Stark.
//!
//! [`Lexer`] is a lazy, pull-based token iterator over any [`SourceView`].
//! It produces every token of the source, trivia included, and ends with
//! exactly one [`TokenKind::Eof`]. Concatenating the text of all tokens
//! before `Eof` gives back the source.
//!
//! Malformed input never stops the lexer. The offending range becomes an
//! [`TokenKind::Invalid`] token and a diagnostic is recorded; see
//! [`LexErrorKind`] for the error taxonomy.
//!
//! # Example
//!
//! ```text
//! let source = Utf8Source::new(b"module Test", "main.sk");
//! let output = stark_lexer::lex(source);
//! assert!(!output.has_errors());
//! ```

mod comments;
mod keywords;
mod lex_error;
mod literal;
mod number;
mod scanner;

use std::iter::FusedIterator;
use std::sync::Arc;

use stark_diagnostic::{Diagnostics, LogMessage};
use stark_ir::{SourceSpan, TextPosition, Token, TokenKind};
use stark_lexer_core::char_class::{is_digit, is_identifier_continue, is_identifier_start, is_whitespace};
use stark_lexer_core::{SourceView, TextMatcher};

use scanner::Scanner;

pub use keywords::{global_keywords, lookup as lookup_keyword};
pub use lex_error::{LexErrorKind, Radix};

/// Everything produced by lexing one source to the end.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput {
    /// All tokens, the final one being `Eof`.
    pub tokens: Vec<Token>,
    pub diagnostics: Diagnostics,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }
}

/// Lex `source` to the end.
pub fn lex<S: SourceView>(source: S) -> LexOutput {
    let mut lexer = Lexer::new(source);
    let tokens = lexer.by_ref().collect();
    LexOutput {
        tokens,
        diagnostics: lexer.take_diagnostics(),
    }
}

/// Token iterator over a source view.
pub struct Lexer<S: SourceView> {
    source: S,
    file_path: Arc<str>,
    scanner: Scanner<S::Cursor>,
    diagnostics: Diagnostics,
    finished: bool,
}

impl<S: SourceView> Lexer<S> {
    pub fn new(source: S) -> Self {
        let file_path: Arc<str> = source.source_path().into();
        let scanner = Scanner::new(source.cursor());
        Lexer {
            source,
            file_path,
            scanner,
            diagnostics: Diagnostics::new(),
            finished: false,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn file_path(&self) -> &Arc<str> {
        &self.file_path
    }

    /// Diagnostics found so far, in discovery order.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Move the diagnostics out, leaving an empty list.
    pub fn take_diagnostics(&mut self) -> Diagnostics {
        std::mem::take(&mut self.diagnostics)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }

    /// Restart from the beginning of the source, dropping all diagnostics.
    pub fn reset(&mut self) {
        self.scanner.reset();
        self.diagnostics.clear();
        self.finished = false;
    }

    fn next_token(&mut self) -> Token {
        let start = self.scanner.position();
        let Some(c) = self.scanner.current() else {
            return Token::EOF;
        };
        match c {
            '\n' | '\u{0085}' | '\u{2028}' | '\u{2029}' => self.single(TokenKind::NewLine, start),
            '\r' => {
                self.scanner.advance();
                if self.scanner.is('\n') {
                    let end = self.scanner.position();
                    self.scanner.advance();
                    return Token::new(TokenKind::NewLine, start, end);
                }
                Token::new(TokenKind::NewLine, start, start)
            }
            '@' => {
                self.scanner.advance();
                if self.scanner.is('"') {
                    return self.read_string(start, true);
                }
                Token::new(TokenKind::At, start, start)
            }
            '/' => {
                self.scanner.advance();
                if self.scanner.is('/') || self.scanner.is('*') {
                    return self.read_comment(start);
                }
                Token::new(TokenKind::Slash, start, start)
            }
            '"' => self.read_string(start, false),
            '\'' => self.read_char_literal(start),
            _ => {
                if let Some(kind) = punctuation(c) {
                    self.single(kind, start)
                } else if is_whitespace(c) {
                    self.read_whitespace(start)
                } else if is_identifier_start(c) {
                    self.read_identifier(start, c)
                } else if is_digit(c) {
                    self.read_number(start)
                } else {
                    self.single(TokenKind::Invalid, start)
                }
            }
        }
    }

    /// One-code-point token.
    #[inline]
    fn single(&mut self, kind: TokenKind, start: TextPosition) -> Token {
        self.scanner.advance();
        Token::new(kind, start, start)
    }

    fn read_whitespace(&mut self, start: TextPosition) -> Token {
        let mut end = start;
        while self.scanner.current().is_some_and(is_whitespace) {
            end = self.scanner.position();
            self.scanner.advance();
        }
        Token::new(TokenKind::Whitespace, start, end)
    }

    /// Identifier, keyword or `Underscores`.
    ///
    /// Keyword matching runs alongside the scan: each identifier character
    /// steps the keyword trie, and any `_` abandons the match since no
    /// keyword contains one.
    fn read_identifier(&mut self, start: TextPosition, first: char) -> Token {
        let keywords: &TextMatcher<TokenKind> = global_keywords();
        let starts_with_underscore = first == '_';
        let (mut node, mut keyword) = match keywords.try_match_char(TextMatcher::<TokenKind>::ROOT, first) {
            Some((next, result)) => (Some(next), result),
            None => (None, None),
        };
        let mut has_letters = false;

        let end = loop {
            let last = self.scanner.position();
            self.scanner.advance();
            match self.scanner.current() {
                Some('_') => {
                    node = None;
                    keyword = None;
                }
                Some(c) if is_identifier_continue(c) => {
                    match node.and_then(|n| keywords.try_match_char(n, c)) {
                        Some((next, result)) => {
                            node = Some(next);
                            keyword = result;
                        }
                        None => {
                            node = None;
                            keyword = None;
                        }
                    }
                    has_letters = true;
                }
                _ => break last,
            }
        };

        let kind = if starts_with_underscore && !has_letters {
            TokenKind::Underscores
        } else {
            keyword.unwrap_or(TokenKind::Identifier)
        };
        Token::new(kind, start, end)
    }

    /// Record a lexical error at `at`.
    fn error(&mut self, kind: LexErrorKind, at: TextPosition) {
        self.flush_decode_errors();
        let span = SourceSpan::new(self.file_path.clone(), at, at);
        self.diagnostics.push(LogMessage::error(span, kind.to_string()));
    }

    fn flush_decode_errors(&mut self) {
        for (at, error) in self.scanner.take_decode_errors() {
            let span = SourceSpan::new(self.file_path.clone(), at, at);
            let message = LexErrorKind::from(error).to_string();
            self.diagnostics.push(LogMessage::error(span, message));
        }
    }
}

/// Single-character punctuation, except `@` and `/` which may start longer
/// tokens.
fn punctuation(c: char) -> Option<TokenKind> {
    let kind = match c {
        ';' => TokenKind::Semicolon,
        ':' => TokenKind::Colon,
        '$' => TokenKind::Dollar,
        '#' => TokenKind::Hash,
        '~' => TokenKind::Tilde,
        '`' => TokenKind::Backtick,
        '\\' => TokenKind::Backslash,
        '^' => TokenKind::Caret,
        '*' => TokenKind::Star,
        '+' => TokenKind::Plus,
        '-' => TokenKind::Minus,
        '%' => TokenKind::Percent,
        ',' => TokenKind::Comma,
        '&' => TokenKind::Ampersand,
        '?' => TokenKind::Question,
        '|' => TokenKind::Pipe,
        '.' => TokenKind::Dot,
        '!' => TokenKind::Bang,
        '=' => TokenKind::Equal,
        '<' => TokenKind::Less,
        '>' => TokenKind::Greater,
        '(' => TokenKind::LeftParen,
        ')' => TokenKind::RightParen,
        '[' => TokenKind::LeftBracket,
        ']' => TokenKind::RightBracket,
        '{' => TokenKind::LeftBrace,
        '}' => TokenKind::RightBrace,
        _ => return None,
    };
    Some(kind)
}

impl<S: SourceView> Iterator for Lexer<S> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        self.flush_decode_errors();
        tracing::trace!(
            kind = ?token.kind,
            start = token.start.offset,
            end = token.end.offset,
            "token"
        );
        if token.kind == TokenKind::Eof {
            self.finished = true;
            tracing::debug!(
                file = %self.file_path,
                diagnostics = self.diagnostics.len(),
                "reached end of input"
            );
        }
        Some(token)
    }
}

impl<S: SourceView> FusedIterator for Lexer<S> {}
