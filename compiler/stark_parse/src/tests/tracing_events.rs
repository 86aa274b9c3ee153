//! Events emitted while parsing, captured with a recording layer.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fmt;
use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use stark_lexer_core::Utf8Source;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use crate::{init_tracing, parse, ParseOutput};

#[derive(Clone, Debug, PartialEq, Eq)]
struct Recorded {
    level: Level,
    target: String,
    message: String,
    kind: Option<String>,
}

#[derive(Default)]
struct FieldVisitor {
    message: String,
    kind: Option<String>,
}

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "kind" {
            self.kind = Some(value.to_owned());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "message" => self.message = format!("{value:?}"),
            "kind" => self.kind = Some(format!("{value:?}")),
            _ => {}
        }
    }
}

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<Recorded>>>);

impl<S: Subscriber> Layer<S> for Recorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        let metadata = event.metadata();
        self.0.lock().unwrap().push(Recorded {
            level: *metadata.level(),
            target: metadata.target().to_owned(),
            message: visitor.message,
            kind: visitor.kind,
        });
    }
}

fn parse_recorded(source: &str) -> (ParseOutput, Vec<Recorded>) {
    let recorder = Recorder::default();
    let subscriber = tracing_subscriber::registry().with(recorder.clone());
    let output = tracing::subscriber::with_default(subscriber, || {
        parse(Utf8Source::new(source.as_bytes(), "test.sk"))
    });
    let events = recorder.0.lock().unwrap().clone();
    (output, events)
}

fn parser_debug_messages(events: &[Recorded]) -> Vec<&str> {
    events
        .iter()
        .filter(|e| e.level == Level::DEBUG && e.target.starts_with("stark_parse"))
        .map(|e| e.message.as_str())
        .collect()
}

#[test]
fn test_directives_and_summary_logged() {
    let (output, events) = parse_recorded("module A\nimport b");
    assert_eq!(output.directives.len(), 2);
    assert_eq!(
        parser_debug_messages(&events),
        vec!["parsed directive", "parsed directive", "parse finished"]
    );
    let kinds: Vec<_> = events
        .iter()
        .filter(|e| e.message == "parsed directive")
        .map(|e| e.kind.as_deref())
        .collect();
    assert_eq!(kinds, vec![Some("module"), Some("import")]);
}

#[test]
fn test_recovery_logged() {
    let (_, events) = parse_recorded("module A B");
    assert_eq!(
        parser_debug_messages(&events),
        vec!["skipped to end of declaration", "parsed directive", "parse finished"]
    );
}

#[test]
fn test_tokens_traced_by_lexer_and_parser() {
    let (_, events) = parse_recorded("module A");
    let lexer_tokens = events
        .iter()
        .filter(|e| e.level == Level::TRACE && e.target.starts_with("stark_lexer"))
        .count();
    let parser_tokens = events
        .iter()
        .filter(|e| e.level == Level::TRACE && e.message == "consume")
        .count();
    // module, whitespace, A, eof
    assert_eq!(lexer_tokens, 4);
    // module, A, eof, then eof again when the end of declaration is consumed;
    // hidden whitespace never reaches the parser.
    assert_eq!(parser_tokens, 4);
    assert!(events
        .iter()
        .any(|e| e.target.starts_with("stark_lexer") && e.message == "reached end of input"));
}

#[test]
fn test_init_tracing_is_repeatable() {
    init_tracing();
    init_tracing();
    let output = parse(Utf8Source::new(b"module A", "test.sk"));
    assert_eq!(output.directives.len(), 1);
    assert!(!output.has_errors());
}
