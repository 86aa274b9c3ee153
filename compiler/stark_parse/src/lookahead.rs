//! Lookahead over the lexer's token stream.
//!
//! Tokens pulled ahead of the parser wait in a ring buffer in their raw
//! form. Whether a token is hidden is decided when it is dequeued or peeked,
//! because newline suppression may change between the two.

use std::collections::VecDeque;

use stark_ir::{Token, TokenKind};
use stark_lexer::Lexer;
use stark_lexer_core::SourceView;

/// Buffered, filtering view of a [`Lexer`].
///
/// Whitespace and comments are always hidden. `NewLine` is hidden while
/// newline suppression is active, see [`TokenLookahead::suppress_newlines`].
pub struct TokenLookahead<S: SourceView> {
    lexer: Lexer<S>,
    queue: VecDeque<Token>,
    newline_suppression: u32,
}

impl<S: SourceView> TokenLookahead<S> {
    pub fn new(lexer: Lexer<S>) -> Self {
        TokenLookahead {
            lexer,
            queue: VecDeque::new(),
            newline_suppression: 0,
        }
    }

    pub fn lexer(&self) -> &Lexer<S> {
        &self.lexer
    }

    pub fn into_lexer(self) -> Lexer<S> {
        self.lexer
    }

    /// Enter a region where line breaks are insignificant. Regions nest.
    pub fn suppress_newlines(&mut self) {
        self.newline_suppression += 1;
    }

    /// Leave the innermost newline-suppression region.
    pub fn restore_newlines(&mut self) {
        debug_assert!(self.newline_suppression > 0, "unbalanced restore_newlines");
        self.newline_suppression = self.newline_suppression.saturating_sub(1);
    }

    #[inline]
    pub fn newline_suppression(&self) -> u32 {
        self.newline_suppression
    }

    #[inline]
    pub fn is_hidden(&self, kind: TokenKind) -> bool {
        kind.is_trivia() || (kind == TokenKind::NewLine && self.newline_suppression > 0)
    }

    /// Consume and return the next visible token.
    ///
    /// Returns [`Token::EOF`] forever once the lexer is exhausted.
    pub fn advance(&mut self) -> Token {
        while let Some(token) = self.queue.pop_front() {
            if !self.is_hidden(token.kind) {
                return token;
            }
        }
        loop {
            match self.lexer.next() {
                Some(token) if self.is_hidden(token.kind) => {}
                Some(token) => return token,
                None => return Token::EOF,
            }
        }
    }

    /// The token `offset` places after the current one, without consuming it.
    ///
    /// `offset` starts at 1. Unless `include_hidden` is set, hidden tokens
    /// are stepped over and do not count. Peeking past the end returns the
    /// last token of the stream.
    pub fn peek(&mut self, offset: usize, include_hidden: bool) -> Token {
        if include_hidden {
            return self.fetch_ahead(offset);
        }
        let mut offset = offset;
        loop {
            let token = self.fetch_ahead(offset);
            if !self.is_hidden(token.kind) {
                return token;
            }
            offset += 1;
        }
    }

    /// Raw token at `offset` (1-based), pulling from the lexer as needed.
    fn fetch_ahead(&mut self, offset: usize) -> Token {
        let offset = offset.max(1);
        while self.queue.len() < offset {
            match self.lexer.next() {
                Some(token) => self.queue.push_back(token),
                None => break,
            }
        }
        match self.queue.get(offset - 1) {
            Some(token) => *token,
            None => self.queue.back().copied().unwrap_or(Token::EOF),
        }
    }
}

#[cfg(test)]
mod tests;
