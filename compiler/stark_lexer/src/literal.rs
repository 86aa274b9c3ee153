//! Character and string literals.
//!
//! Escapes (`\0 \\ \' \" \a \b \f \n \r \t \v`, `\uXXXX`, `\UXXXXXXXX`,
//! `\xH` to `\xHHHH`) are validated but not decoded. Raw strings `@"..."`
//! take no escapes, may span lines, and write an embedded quote as `""`.

use stark_ir::{TextPosition, Token, TokenKind};
use stark_lexer_core::char_class::is_hex;
use stark_lexer_core::SourceView;

use crate::lex_error::LexErrorKind;
use crate::Lexer;

impl<S: SourceView> Lexer<S> {
    /// `'c'`. The empty literal `''` is accepted.
    pub(crate) fn read_char_literal(&mut self, start: TextPosition) -> Token {
        const DELIMITER: char = '\'';
        let mut end = start;
        self.scanner.advance();
        if self.read_literal_char(&mut end, DELIMITER, false) {
            if self.scanner.is(DELIMITER) {
                end = self.scanner.position();
                self.scanner.advance();
                return Token::new(TokenKind::Char, start, end);
            }
            self.error(LexErrorKind::UnterminatedChar { delimiter: DELIMITER }, end);
        }
        Token::new(TokenKind::Invalid, start, end)
    }

    /// `"..."`, or `@"..."` when `raw`; the current character is the `"`.
    pub(crate) fn read_string(&mut self, start: TextPosition, raw: bool) -> Token {
        const DELIMITER: char = '"';
        let mut end = self.scanner.position();
        self.scanner.advance();
        loop {
            if !self.read_literal_char(&mut end, DELIMITER, raw) {
                return Token::new(TokenKind::Invalid, start, end);
            }
            if self.scanner.is(DELIMITER) {
                if raw && self.scanner.peek() == Some(DELIMITER) {
                    self.scanner.advance();
                    end = self.scanner.position();
                    self.scanner.advance();
                } else {
                    end = self.scanner.position();
                    self.scanner.advance();
                    break;
                }
            }
        }
        let kind = if raw {
            TokenKind::StringRaw
        } else {
            TokenKind::String
        };
        Token::new(kind, start, end)
    }

    /// Consume one literal character or escape, leaving a closing delimiter
    /// in place.
    ///
    /// Returns `false` after reporting an error; `end` is then the last
    /// position that belongs to the literal.
    fn read_literal_char(&mut self, end: &mut TextPosition, delimiter: char, raw: bool) -> bool {
        match self.scanner.current() {
            Some('\\') if !raw => self.read_escape(end),
            None => {
                self.error(LexErrorKind::UnterminatedAtEof { delimiter }, *end);
                false
            }
            Some(c) if c == delimiter => true,
            Some('\r' | '\n') if !raw => {
                self.error(LexErrorKind::UnterminatedAtEol { delimiter }, self.scanner.position());
                false
            }
            Some(_) => {
                *end = self.scanner.position();
                self.scanner.advance();
                true
            }
        }
    }

    /// Current character is the backslash.
    ///
    /// On error the offending character is left unconsumed.
    fn read_escape(&mut self, end: &mut TextPosition) -> bool {
        *end = self.scanner.position();
        self.scanner.advance();
        match self.scanner.current() {
            Some('0' | '\\' | '\'' | '"' | 'a' | 'b' | 'f' | 'n' | 'r' | 't' | 'v') => {
                *end = self.scanner.position();
                self.scanner.advance();
                return true;
            }
            Some(c @ ('u' | 'U')) => {
                let required = if c == 'u' { 4 } else { 8 };
                *end = self.scanner.position();
                self.scanner.advance();
                if self.read_hex_digits(end, required) == required {
                    return true;
                }
            }
            Some('x') => {
                *end = self.scanner.position();
                self.scanner.advance();
                if self.read_hex_digits(end, 4) > 0 {
                    return true;
                }
            }
            _ => {}
        }
        let found = self.scanner.current();
        self.error(LexErrorKind::InvalidEscape { found }, self.scanner.position());
        false
    }

    /// Up to `max` hex digits; returns how many were read.
    fn read_hex_digits(&mut self, end: &mut TextPosition, max: usize) -> usize {
        let mut count = 0;
        while count < max && self.scanner.current().is_some_and(is_hex) {
            *end = self.scanner.position();
            self.scanner.advance();
            count += 1;
        }
        count
    }
}
