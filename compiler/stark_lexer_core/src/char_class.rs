//! Code point classification.
//!
//! All predicates are total over `char`. Identifier predicates take an ASCII
//! fast path and only fall back to a binary search over the generated range
//! tables for non-ASCII input.

use std::cmp::Ordering;

use crate::unicode_tables::{XID_CONTINUE, XID_START};

/// Binary search `c` in a sorted table of disjoint inclusive ranges.
fn in_ranges(table: &[(char, char)], c: char) -> bool {
    table
        .binary_search_by(|&(lo, hi)| {
            if c < lo {
                Ordering::Greater
            } else if c > hi {
                Ordering::Less
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}

/// Can `c` start an identifier? (`XID_Start` or `_`)
#[inline]
pub fn is_identifier_start(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphabetic() || c == '_';
    }
    in_ranges(XID_START, c)
}

/// Can `c` continue an identifier? (`XID_Continue`)
#[inline]
pub fn is_identifier_continue(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphanumeric() || c == '_';
    }
    in_ranges(XID_CONTINUE, c)
}

/// ASCII decimal digit.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Horizontal whitespace.
///
/// Line terminators (CR, LF, NEL, U+2028, U+2029) are not whitespace: the
/// lexer turns them into `NewLine` tokens.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        ' ' | '\t'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{200E}'
            | '\u{200F}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

/// Line terminator that forms a `NewLine` token on its own.
#[inline]
pub fn is_newline(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{0085}' | '\u{2028}' | '\u{2029}')
}

#[inline]
pub fn is_hex(c: char) -> bool {
    c.is_ascii_hexdigit()
}

#[inline]
pub fn is_octal(c: char) -> bool {
    matches!(c, '0'..='7')
}

#[inline]
pub fn is_binary(c: char) -> bool {
    matches!(c, '0' | '1')
}
