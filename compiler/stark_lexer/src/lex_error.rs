//! Lexical error taxonomy.
//!
//! A lexical error never stops scanning: the offending token becomes
//! `TokenKind::Invalid` and the error is reported as a diagnostic whose
//! message is the `Display` text of the [`LexErrorKind`].

use stark_diagnostic::printable;
use stark_lexer_core::DecodeError;
use thiserror::Error;

/// Base of a prefixed integer literal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Radix {
    Hexadecimal,
    Octal,
    Binary,
}

impl Radix {
    /// Radix selected by the character after a leading `0`.
    pub fn from_prefix(c: char) -> Option<Self> {
        match c {
            'x' | 'X' => Some(Radix::Hexadecimal),
            'o' | 'O' => Some(Radix::Octal),
            'b' | 'B' => Some(Radix::Binary),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Radix::Hexadecimal => "hexadecimal",
            Radix::Octal => "octal",
            Radix::Binary => "binary",
        }
    }

    /// Expected digits, as shown in diagnostics.
    pub fn digits(self) -> &'static str {
        match self {
            Radix::Hexadecimal => "[0-9a-zA-Z]",
            Radix::Octal => "[0-7]",
            Radix::Binary => "0 or 1",
        }
    }

    pub fn prefix(self) -> &'static str {
        match self {
            Radix::Hexadecimal => "0x",
            Radix::Octal => "0o",
            Radix::Binary => "0b",
        }
    }
}

/// What went wrong while lexing.
#[derive(Clone, Debug, Error, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// `0x`, `0o` or `0b` with no digit of that base after it.
    #[error("Invalid {} integer. Expecting at least one {} after {}", .radix.name(), .radix.digits(), .radix.prefix())]
    MissingRadixDigits { radix: Radix },

    /// `1.` not followed by a digit.
    #[error("Expecting at least one digit after the float dot .")]
    MissingFractionDigits,

    /// `1e`, `1e+` not followed by a digit.
    #[error("Expecting at least one digit after the exponent")]
    MissingExponentDigits,

    /// `\` followed by something that is not an escape, or a `\u`/`\U`/`\x`
    /// escape with too few hex digits.
    #[error(
        "Unexpected escape character [{}] in string. Only 0 ' \\ \" a b f n r t v u0000-uFFFF U00000000-UFFFFFFFF x0-xFFFF are allowed",
        found_text(.found)
    )]
    InvalidEscape { found: Option<char> },

    #[error("Unexpected end of file while parsing a string/character not terminated by a {delimiter}")]
    UnterminatedAtEof { delimiter: char },

    #[error("Unexpected end of line while parsing a string not terminated by a {delimiter}")]
    UnterminatedAtEol { delimiter: char },

    /// A character literal with more than one character before the closing
    /// quote.
    #[error("Unexpected end of file while parsing a character not terminated by a {delimiter}")]
    UnterminatedChar { delimiter: char },

    #[error("Invalid multi-line comment. No matching */ for start /*")]
    UnterminatedBlockComment,

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

fn found_text(found: &Option<char>) -> String {
    match *found {
        Some(c) => printable(c.encode_utf8(&mut [0; 4])),
        None => "<eof>".to_owned(),
    }
}

#[cfg(test)]
mod tests;
