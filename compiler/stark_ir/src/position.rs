//! Source positions and spans.
//!
//! Positions are 0-based internally. They are rendered 1-based for lines and
//! 0-based for columns, e.g. `main.sk(3,4)-(3,9)`.

use std::fmt;
use std::sync::Arc;

/// A point in a source text.
///
/// `offset` counts code units of the source view (16-bit units or bytes),
/// `line` counts LF characters seen so far and `column` counts code points
/// since the last LF.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct TextPosition {
    pub offset: u32,
    pub line: u32,
    pub column: u32,
}

impl TextPosition {
    /// Start of a source text.
    pub const ZERO: TextPosition = TextPosition::new(0, 0, 0);

    /// Sentinel used by the synthetic end-of-file token.
    pub const EOF: TextPosition = TextPosition::new(u32::MAX, u32::MAX, u32::MAX);

    #[inline]
    pub const fn new(offset: u32, line: u32, column: u32) -> Self {
        TextPosition {
            offset,
            line,
            column,
        }
    }

    #[inline]
    pub const fn is_eof(self) -> bool {
        self.offset == u32::MAX && self.line == u32::MAX && self.column == u32::MAX
    }
}

impl fmt::Display for TextPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_eof() {
            return f.write_str("eof");
        }
        write!(f, "{},{}", u64::from(self.line) + 1, self.column)
    }
}

/// An inclusive range of source text in one file.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SourceSpan {
    pub file_path: Arc<str>,
    pub start: TextPosition,
    /// Position of the last code point covered (inclusive).
    pub end: TextPosition,
}

impl SourceSpan {
    pub fn new(file_path: Arc<str>, start: TextPosition, end: TextPosition) -> Self {
        SourceSpan {
            file_path,
            start,
            end,
        }
    }

    /// Offset of the first code unit.
    #[inline]
    pub fn offset(&self) -> u32 {
        self.start.offset
    }

    /// Number of code units from `start` to `end`, counting `end`'s first unit.
    #[inline]
    pub fn length(&self) -> u32 {
        self.end
            .offset
            .saturating_sub(self.start.offset)
            .saturating_add(1)
    }
}

impl fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})-({})", self.file_path, self.start, self.end)
    }
}

// Size assertions to prevent accidental regressions
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::TextPosition;
    crate::static_assert_size!(TextPosition, 12);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn position_display_is_one_based_line() {
        assert_eq!(TextPosition::new(17, 2, 4).to_string(), "3,4");
        assert_eq!(TextPosition::ZERO.to_string(), "1,0");
    }

    #[test]
    fn eof_sentinel() {
        assert!(TextPosition::EOF.is_eof());
        assert!(!TextPosition::ZERO.is_eof());
        assert_eq!(TextPosition::EOF.to_string(), "eof");
    }

    #[test]
    fn line_at_u32_max_minus_one_does_not_overflow() {
        let pos = TextPosition::new(0, u32::MAX, 0);
        assert_eq!(pos.to_string(), "4294967296,0");
    }

    #[test]
    fn span_length_is_inclusive() {
        let span = SourceSpan::new(
            "a.sk".into(),
            TextPosition::new(4, 0, 4),
            TextPosition::new(9, 0, 9),
        );
        assert_eq!(span.offset(), 4);
        assert_eq!(span.length(), 6);
    }

    #[test]
    fn span_display() {
        let span = SourceSpan::new(
            "dir/main.sk".into(),
            TextPosition::new(0, 0, 0),
            TextPosition::new(12, 1, 3),
        );
        assert_eq!(span.to_string(), "dir/main.sk(1,0)-(2,3)");
    }
}
