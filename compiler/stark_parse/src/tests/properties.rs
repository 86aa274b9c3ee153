//! Property tests: the parser terminates and is deterministic on any input.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use proptest::prelude::*;
use stark_lexer_core::{Utf16Source, Utf8Source};

use crate::parse;

/// Fragments that exercise the directive grammar and its error paths.
fn fragment() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "module", "import", "extern", "package", "public", "internal", "static", "unsafe",
        "this", "base", "as", "let", "func", "struct", "a", "b", "_", "::", ":", "*", "{", "}",
        ",", ";", ".", "1", "0x", "\"s\"", "\"", "'", "/*", "*/", "//", "\n", "\r\n", " ", "\t",
        "é", "€",
    ])
}

proptest! {
    #[test]
    fn parser_terminates_on_fragment_soup(parts in prop::collection::vec(fragment(), 0..40)) {
        let source: String = parts.concat();
        let output = parse(Utf8Source::new(source.as_bytes(), "soup.sk"));
        prop_assert!(output.parser_diagnostic_count <= output.diagnostics.len());
        prop_assert_eq!(output.has_errors(), output.diagnostics.error_count() > 0);
    }

    #[test]
    fn parser_terminates_on_arbitrary_text(source in "\\PC{0,64}") {
        let output = parse(Utf8Source::new(source.as_bytes(), ""));
        prop_assert!(output.directives.len() <= source.len());
    }

    #[test]
    fn parsing_is_deterministic(parts in prop::collection::vec(fragment(), 0..24)) {
        let source: String = parts.concat();
        let first = parse(Utf8Source::new(source.as_bytes(), ""));
        let second = parse(Utf8Source::new(source.as_bytes(), ""));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn encodings_give_the_same_directives(parts in prop::collection::vec(fragment(), 0..24)) {
        let source: String = parts.concat();
        let units: Vec<u16> = source.encode_utf16().collect();
        let from_utf8 = parse(Utf8Source::new(source.as_bytes(), ""));
        let from_utf16 = parse(Utf16Source::new(&units, ""));
        let names = |output: &crate::ParseOutput| -> Vec<&'static str> {
            output.directives.iter().map(stark_ir::Directive::syntax_name).collect()
        };
        prop_assert_eq!(names(&from_utf8), names(&from_utf16));
        let messages = |output: &crate::ParseOutput| -> Vec<String> {
            output.diagnostics.iter().map(|m| m.message.clone()).collect()
        };
        prop_assert_eq!(messages(&from_utf8), messages(&from_utf16));
    }
}
