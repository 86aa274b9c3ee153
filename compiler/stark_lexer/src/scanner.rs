//! Code point scanner: current character, positions and a one-deep peek.
//!
//! `position` is where the current character `c` starts; `next_position` is
//! where the following one starts. Reading an LF moves `next_position` to
//! column 0 of the next line; any other code point moves it one column right.
//!
//! Decode failures never stop the scanner: the bad sequence reads as
//! U+FFFD and the error is queued for the lexer to report.

use stark_ir::TextPosition;
use stark_lexer_core::{CodePointCursor, DecodeError};

#[derive(Copy, Clone, Debug)]
struct Peeked {
    c: Option<char>,
    position: TextPosition,
    next_position: TextPosition,
}

#[derive(Debug)]
pub(crate) struct Scanner<C> {
    cursor: C,
    /// Current code point, `None` at end of input.
    c: Option<char>,
    position: TextPosition,
    next_position: TextPosition,
    peek: Option<Peeked>,
    decode_errors: Vec<(TextPosition, DecodeError)>,
}

impl<C: CodePointCursor> Scanner<C> {
    pub(crate) fn new(cursor: C) -> Self {
        let mut scanner = Scanner {
            cursor,
            c: None,
            position: TextPosition::ZERO,
            next_position: TextPosition::ZERO,
            peek: None,
            decode_errors: Vec::new(),
        };
        scanner.reset();
        scanner
    }

    /// Rewind to the first code point and forget queued decode errors.
    pub(crate) fn reset(&mut self) {
        self.peek = None;
        self.decode_errors.clear();
        self.position = TextPosition::ZERO;
        let (c, next_position) = self.decode_at(TextPosition::ZERO);
        self.c = c;
        self.next_position = next_position;
    }

    #[inline]
    pub(crate) fn current(&self) -> Option<char> {
        self.c
    }

    #[inline]
    pub(crate) fn is(&self, c: char) -> bool {
        self.c == Some(c)
    }

    #[inline]
    pub(crate) fn position(&self) -> TextPosition {
        self.position
    }

    /// Move to the next code point.
    pub(crate) fn advance(&mut self) {
        if let Some(peeked) = self.peek.take() {
            self.c = peeked.c;
            self.position = peeked.position;
            self.next_position = peeked.next_position;
            return;
        }
        self.position = self.next_position;
        let (c, next_position) = self.decode_at(self.position);
        self.c = c;
        self.next_position = next_position;
    }

    /// The code point after the current one, without moving.
    pub(crate) fn peek(&mut self) -> Option<char> {
        if let Some(peeked) = self.peek {
            return peeked.c;
        }
        let position = self.next_position;
        let (c, next_position) = self.decode_at(position);
        self.peek = Some(Peeked {
            c,
            position,
            next_position,
        });
        c
    }

    /// Decode errors found since the last call, in source order.
    pub(crate) fn take_decode_errors(&mut self) -> Vec<(TextPosition, DecodeError)> {
        std::mem::take(&mut self.decode_errors)
    }

    fn decode_at(&mut self, at: TextPosition) -> (Option<char>, TextPosition) {
        let mut offset = at.offset;
        let c = match self.cursor.try_next(&mut offset) {
            Ok(c) => c,
            Err(error) => {
                self.decode_errors.push((at, error));
                Some(char::REPLACEMENT_CHARACTER)
            }
        };
        let next = match c {
            Some('\n') => TextPosition::new(offset, at.line + 1, 0),
            Some(_) => TextPosition::new(offset, at.line, at.column + 1),
            None => at,
        };
        (c, next)
    }
}
