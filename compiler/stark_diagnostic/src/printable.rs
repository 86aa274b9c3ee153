//! Escaping of source text quoted inside diagnostic messages.

use std::fmt::Write;

/// `text` with control characters escaped so a message stays on one line.
pub fn printable(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c if c.is_control() || matches!(c, '\u{2028}' | '\u{2029}') => {
                // Writing to a String cannot fail.
                let _ = write!(out, "\\u{{{:x}}}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_text_unchanged() {
        assert_eq!(printable("module Test"), "module Test");
        assert_eq!(printable("héllo 中"), "héllo 中");
    }

    #[test]
    fn escapes_line_breaks_and_controls() {
        assert_eq!(printable("a\nb"), "a\\nb");
        assert_eq!(printable("\r\n"), "\\r\\n");
        assert_eq!(printable("\t\0"), "\\t\\0");
        assert_eq!(printable("\u{1b}"), "\\u{1b}");
        assert_eq!(printable("\u{85}"), "\\u{85}");
        assert_eq!(printable("\u{2028}"), "\\u{2028}");
    }
}
