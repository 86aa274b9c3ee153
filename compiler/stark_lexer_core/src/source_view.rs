//! Source views: one decoding contract over two storage encodings.
//!
//! A [`SourceView`] hands out a [`CodePointCursor`] that turns the stored code
//! units into `char`s one at a time. [`Utf16Source`] joins surrogate pairs,
//! [`Utf8Source`] decodes multi-byte sequences; both produce the same scalar
//! stream for the same logical text.
//!
//! Decoding is the only fallible operation in the front end. On error the
//! offset has always advanced by at least one unit, so a caller that keeps
//! pulling after an error still reaches the end of input.

use thiserror::Error;

/// A malformed code unit sequence.
///
/// `offset` is the position of the unit that started the failed sequence,
/// except for [`DecodeError::InvalidUtf8Continuation`] which points at the
/// offending continuation byte.
#[derive(Copy, Clone, Debug, Error, PartialEq, Eq, Hash)]
pub enum DecodeError {
    #[error("invalid UTF-16: high surrogate at offset {offset} is not followed by a low surrogate")]
    UnpairedHighSurrogate { offset: u32 },
    #[error("invalid UTF-16: unexpected low surrogate at offset {offset}")]
    UnexpectedLowSurrogate { offset: u32 },
    #[error("invalid UTF-16: high surrogate at offset {offset} is the last code unit")]
    TruncatedSurrogate { offset: u32 },
    #[error("invalid UTF-8: byte 0x{byte:02X} at offset {offset} cannot start a sequence")]
    InvalidUtf8Lead { offset: u32, byte: u8 },
    #[error("invalid UTF-8: sequence at offset {offset} is truncated by the end of input")]
    TruncatedUtf8 { offset: u32 },
    #[error("invalid UTF-8: expecting a continuation byte at offset {offset}")]
    InvalidUtf8Continuation { offset: u32 },
    #[error("invalid code point U+{value:X} decoded at offset {offset}")]
    InvalidScalar { offset: u32, value: u32 },
}

/// Pull-based code point decoding.
pub trait CodePointCursor {
    /// Decode the code point starting at `*offset` and move `*offset` past it.
    ///
    /// Returns `Ok(None)` at end of input.
    fn try_next(&self, offset: &mut u32) -> Result<Option<char>, DecodeError>;
}

/// Read access to a source text for the lexer and for diagnostics.
pub trait SourceView {
    type Cursor: CodePointCursor;

    /// Path carried into diagnostics.
    fn source_path(&self) -> &str;

    /// Decode `length` code units starting at `offset` into a `String`.
    ///
    /// Returns `None` when the range is outside the source. Malformed units
    /// inside the range are replaced with U+FFFD.
    fn get_string(&self, offset: u32, length: u32) -> Option<String>;

    fn cursor(&self) -> Self::Cursor;

    /// Text between two code point offsets, both inclusive.
    ///
    /// `end` is the offset of the *first unit* of the last code point, which
    /// may span several units; the whole code point is included.
    fn text(&self, start: u32, end: u32) -> Option<String> {
        if end < start {
            return None;
        }
        let mut past_end = end;
        // Either way the offset moved past the last code point.
        let _ = self.cursor().try_next(&mut past_end);
        self.get_string(start, past_end.saturating_sub(start))
    }
}

/// Range `offset..offset + length` as `usize` indices, if it fits in `len`.
fn checked_range(offset: u32, length: u32, len: usize) -> Option<std::ops::Range<usize>> {
    let start = usize::try_from(offset).ok()?;
    let end = start.checked_add(usize::try_from(length).ok()?)?;
    (end <= len).then_some(start..end)
}

/// A source held as UTF-16 code units.
#[derive(Copy, Clone, Debug)]
pub struct Utf16Source<'a> {
    units: &'a [u16],
    path: &'a str,
}

impl<'a> Utf16Source<'a> {
    pub fn new(units: &'a [u16], path: &'a str) -> Self {
        Utf16Source { units, path }
    }
}

impl SourceView for Utf16Source<'_> {
    type Cursor = Self;

    fn source_path(&self) -> &str {
        self.path
    }

    fn get_string(&self, offset: u32, length: u32) -> Option<String> {
        let range = checked_range(offset, length, self.units.len())?;
        Some(String::from_utf16_lossy(&self.units[range]))
    }

    fn cursor(&self) -> Self {
        *self
    }
}

impl CodePointCursor for Utf16Source<'_> {
    fn try_next(&self, offset: &mut u32) -> Result<Option<char>, DecodeError> {
        let at = *offset;
        let Some(&unit) = self.units.get(at as usize) else {
            return Ok(None);
        };
        *offset += 1;
        match unit {
            0xD800..=0xDBFF => {
                let Some(&low) = self.units.get(*offset as usize) else {
                    return Err(DecodeError::TruncatedSurrogate { offset: at });
                };
                if !(0xDC00..=0xDFFF).contains(&low) {
                    return Err(DecodeError::UnpairedHighSurrogate { offset: at });
                }
                *offset += 1;
                let value = 0x1_0000 + ((u32::from(unit) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
                char::from_u32(value)
                    .map(Some)
                    .ok_or(DecodeError::InvalidScalar { offset: at, value })
            }
            0xDC00..=0xDFFF => Err(DecodeError::UnexpectedLowSurrogate { offset: at }),
            _ => {
                let value = u32::from(unit);
                char::from_u32(value)
                    .map(Some)
                    .ok_or(DecodeError::InvalidScalar { offset: at, value })
            }
        }
    }
}

/// A source held as raw UTF-8 bytes.
///
/// The bytes are not validated up front; malformed sequences surface as
/// [`DecodeError`]s while scanning.
#[derive(Copy, Clone, Debug)]
pub struct Utf8Source<'a> {
    bytes: &'a [u8],
    path: &'a str,
}

impl<'a> Utf8Source<'a> {
    pub fn new(bytes: &'a [u8], path: &'a str) -> Self {
        Utf8Source { bytes, path }
    }
}

impl SourceView for Utf8Source<'_> {
    type Cursor = Self;

    fn source_path(&self) -> &str {
        self.path
    }

    fn get_string(&self, offset: u32, length: u32) -> Option<String> {
        let range = checked_range(offset, length, self.bytes.len())?;
        Some(String::from_utf8_lossy(&self.bytes[range]).into_owned())
    }

    fn cursor(&self) -> Self {
        *self
    }
}

impl CodePointCursor for Utf8Source<'_> {
    fn try_next(&self, offset: &mut u32) -> Result<Option<char>, DecodeError> {
        let at = *offset;
        let Some(&lead) = self.bytes.get(at as usize) else {
            return Ok(None);
        };
        *offset += 1;
        if lead < 0x80 {
            return Ok(Some(char::from(lead)));
        }

        let width = lead.leading_ones();
        if !(2..=4).contains(&width) {
            return Err(DecodeError::InvalidUtf8Lead { offset: at, byte: lead });
        }

        let mut value = u32::from(lead & (0x7F >> width));
        for _ in 1..width {
            let Some(&byte) = self.bytes.get(*offset as usize) else {
                return Err(DecodeError::TruncatedUtf8 { offset: at });
            };
            if byte & 0xC0 != 0x80 {
                return Err(DecodeError::InvalidUtf8Continuation { offset: *offset });
            }
            *offset += 1;
            value = (value << 6) | u32::from(byte & 0x3F);
        }
        char::from_u32(value)
            .map(Some)
            .ok_or(DecodeError::InvalidScalar { offset: at, value })
    }
}
