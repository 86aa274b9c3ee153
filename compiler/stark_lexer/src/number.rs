//! Numeric literals.
//!
//! `0x`/`0o`/`0b` select a prefixed integer. Otherwise a decimal run may be
//! followed by a fraction and an exponent. A `.` directly followed by another
//! `.` is left alone so `1..2` lexes as a range.

use stark_ir::{TextPosition, Token, TokenKind};
use stark_lexer_core::char_class::{is_binary, is_digit, is_hex, is_octal};
use stark_lexer_core::SourceView;

use crate::lex_error::{LexErrorKind, Radix};
use crate::Lexer;

fn is_radix_digit(radix: Radix, c: char) -> bool {
    match radix {
        Radix::Hexadecimal => is_hex(c),
        Radix::Octal => is_octal(c),
        Radix::Binary => is_binary(c),
    }
}

fn radix_kind(radix: Radix) -> TokenKind {
    match radix {
        Radix::Hexadecimal => TokenKind::IntegerHexa,
        Radix::Octal => TokenKind::IntegerOctal,
        Radix::Binary => TokenKind::IntegerBinary,
    }
}

#[inline]
fn is_digit_or_underscore(c: char) -> bool {
    is_digit(c) || c == '_'
}

impl<S: SourceView> Lexer<S> {
    pub(crate) fn read_number(&mut self, start: TextPosition) -> Token {
        let starts_with_zero = self.scanner.is('0');
        self.scanner.advance();
        if starts_with_zero {
            if let Some(radix) = self.scanner.current().and_then(Radix::from_prefix) {
                return self.read_prefixed_integer(start, radix);
            }
        }

        let mut end = start;
        self.skip_digits(&mut end);

        let mut is_float = false;
        let mut is_range = false;
        if self.scanner.is('.') {
            if self.scanner.peek() == Some('.') {
                is_range = true;
            } else {
                end = self.scanner.position();
                self.scanner.advance();
                if !self.scanner.current().is_some_and(is_digit) {
                    self.error(LexErrorKind::MissingFractionDigits, self.scanner.position());
                    return Token::new(TokenKind::Invalid, start, end);
                }
                is_float = true;
                self.skip_digits(&mut end);
            }
        }

        if !is_range && matches!(self.scanner.current(), Some('e' | 'E')) {
            is_float = true;
            end = self.scanner.position();
            self.scanner.advance();
            if matches!(self.scanner.current(), Some('+' | '-')) {
                end = self.scanner.position();
                self.scanner.advance();
            }
            if !self.scanner.current().is_some_and(is_digit) {
                self.error(LexErrorKind::MissingExponentDigits, self.scanner.position());
                return Token::new(TokenKind::Invalid, start, end);
            }
            self.skip_digits(&mut end);
        }

        let kind = if is_float {
            TokenKind::Float
        } else {
            TokenKind::Integer
        };
        Token::new(kind, start, end)
    }

    /// Digits and `_` separators, moving `end` to the last one consumed.
    fn skip_digits(&mut self, end: &mut TextPosition) {
        while self.scanner.current().is_some_and(is_digit_or_underscore) {
            *end = self.scanner.position();
            self.scanner.advance();
        }
    }

    /// Current character is the radix letter after `0`.
    fn read_prefixed_integer(&mut self, start: TextPosition, radix: Radix) -> Token {
        let mut end = self.scanner.position();
        self.scanner.advance();
        let mut has_digit = false;
        loop {
            match self.scanner.current() {
                Some('_') => {}
                Some(c) if is_radix_digit(radix, c) => has_digit = true,
                _ => break,
            }
            end = self.scanner.position();
            self.scanner.advance();
        }

        if !has_digit {
            self.error(LexErrorKind::MissingRadixDigits { radix }, start);
            return Token::new(TokenKind::Invalid, start, end);
        }
        Token::new(radix_kind(radix), start, end)
    }
}
