//! Parser tests.
//!
//! - `parser`: directive grammar and tree shape
//! - `recovery`: diagnostics and resynchronisation on malformed input
//! - `visitor`: traversal of parsed trees
//! - `properties`: termination and determinism on arbitrary input
//! - `tracing_events`: events emitted while parsing

mod properties;
mod recovery;
mod tracing_events;

use stark_ir::TextPosition;
use stark_lexer_core::Utf8Source;

use crate::{init_tracing, parse, ParseOutput};

/// Helper: parse a UTF-8 source named `test.sk`.
///
/// Run with `RUST_LOG=stark_parse=trace` to see the parser's events.
pub(crate) fn parse_source(source: &str) -> ParseOutput {
    init_tracing();
    parse(Utf8Source::new(source.as_bytes(), "test.sk"))
}

/// Helper: diagnostic messages, parser ones first.
pub(crate) fn messages(output: &ParseOutput) -> Vec<String> {
    output.diagnostics.iter().map(|m| m.message.clone()).collect()
}

/// Helper: position on the first line.
pub(crate) fn col(offset: u32) -> TextPosition {
    TextPosition::new(offset, 0, offset)
}
