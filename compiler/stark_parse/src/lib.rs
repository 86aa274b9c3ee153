//! Directive parser for Stark.
//!
//! Parses the top of a source file: `module`, `import` and `extern package`
//! directives, with the modifiers that may precede them. The parser never
//! fails: every problem becomes a diagnostic and parsing resumes at the next
//! end of declaration (a line break, `;` or end of file).
//!
//! ```text
//! public module Shell
//! import core::io::{File, Path as P}
//! extern package std::collections
//! ```

mod grammar;
mod lookahead;
mod outcome;
mod recovery;

use std::sync::{Arc, Once};

use stark_diagnostic::{printable, Diagnostics, LogMessage};
use stark_ir::{
    Directive, Directives, ModifierFlags, SourceSpan, SyntaxValue, TextPosition, Token, TokenKind,
};
use stark_lexer::Lexer;
use stark_lexer_core::SourceView;

pub use lookahead::TokenLookahead;
pub use recovery::TokenSet;

use recovery::{EOD, MODIFIERS, UNSUPPORTED_DECLARATIONS};

static TRACING_INIT: Once = Once::new();

/// Send lexer and parser events to stderr, filtered by `RUST_LOG`.
///
/// `RUST_LOG=stark_parse=debug` shows one event per directive and the run
/// summary; `RUST_LOG=stark_lexer=trace,stark_parse=trace` adds every token.
/// Does nothing when `RUST_LOG` is unset or unparsable, or when another
/// global subscriber is already installed. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Ok(filter) = EnvFilter::try_from_default_env() else {
            return;
        };
        let layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .compact();
        // A subscriber set by the embedding program wins.
        let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
    });
}

/// Result of a parser run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOutput {
    pub directives: Directives,
    /// Parser diagnostics followed by lexer diagnostics.
    pub diagnostics: Diagnostics,
    parser_diagnostic_count: usize,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }

    /// Number of leading entries of `diagnostics` reported by the parser.
    ///
    /// Clamped to the current length, since `diagnostics` may have been
    /// edited after the run.
    #[inline]
    pub fn parser_diagnostic_count(&self) -> usize {
        self.parser_diagnostic_count.min(self.diagnostics.len())
    }

    /// Diagnostics reported by the parser itself.
    pub fn parser_diagnostics(&self) -> &[LogMessage] {
        let (parser, _) = self.diagnostics.as_slice().split_at(self.parser_diagnostic_count());
        parser
    }

    /// Diagnostics reported by the lexer.
    pub fn lexer_diagnostics(&self) -> &[LogMessage] {
        let (_, lexer) = self.diagnostics.as_slice().split_at(self.parser_diagnostic_count());
        lexer
    }
}

/// Lex and parse `source` in one call.
pub fn parse<S: SourceView>(source: S) -> ParseOutput {
    Parser::new(source).run()
}

/// Directive parser state.
pub struct Parser<S: SourceView> {
    tokens: TokenLookahead<S>,
    file_path: Arc<str>,
    token: Token,
    /// Last consumed token; closing a node ends its span here.
    previous_token: Token,
    pending_modifiers: Vec<SyntaxValue<ModifierFlags>>,
    diagnostics: Diagnostics,
}

impl<S: SourceView> Parser<S> {
    pub fn new(source: S) -> Self {
        Self::with_lexer(Lexer::new(source))
    }

    pub fn with_lexer(lexer: Lexer<S>) -> Self {
        let file_path = lexer.file_path().clone();
        let mut parser = Parser {
            tokens: TokenLookahead::new(lexer),
            file_path,
            token: Token::EOF,
            previous_token: Token::EOF,
            pending_modifiers: Vec::new(),
            diagnostics: Diagnostics::new(),
        };
        parser.next_token();
        parser
    }

    /// Parse every directive up to end of file.
    #[tracing::instrument(level = "debug", skip_all, fields(file = %self.file_path))]
    pub fn run(mut self) -> ParseOutput {
        let mut directives = Directives::default();
        while self.token.kind != TokenKind::Eof {
            if let Some(directive) = self.parse_directive() {
                tracing::debug!(
                    kind = directive.syntax_name(),
                    span = %directive.span(),
                    "parsed directive"
                );
                directives.nodes.push(directive);
            }
        }
        self.check_no_modifiers("end of file");

        let parser_diagnostic_count = self.diagnostics.len();
        let mut diagnostics = self.diagnostics;
        diagnostics.extend(self.tokens.into_lexer().take_diagnostics());
        tracing::debug!(
            directives = directives.len(),
            diagnostics = diagnostics.len(),
            "parse finished"
        );
        ParseOutput {
            directives,
            diagnostics,
            parser_diagnostic_count,
        }
    }

    /// One step of the driver loop; always consumes at least one token.
    fn parse_directive(&mut self) -> Option<Directive> {
        let kind = self.token.kind;
        match kind {
            TokenKind::Module => self.parse_module().map(Directive::Module),
            TokenKind::Import => self.parse_import().map(Directive::Import),
            TokenKind::Extern => self.parse_extern().map(Directive::ExternPackage),
            TokenKind::NewLine => {
                self.next_token();
                None
            }
            _ if MODIFIERS.contains(&kind) => {
                self.add_pending_modifier();
                None
            }
            _ if UNSUPPORTED_DECLARATIONS.contains(&kind) => {
                self.unsupported_declaration();
                None
            }
            _ => {
                let text = self.printable_token(self.token);
                self.error(format!("Unexpected token [{text}] found"));
                self.next_token();
                None
            }
        }
    }

    fn unsupported_declaration(&mut self) {
        let text = self.printable_token(self.token);
        self.error(format!(
            "Unsupported construct [{text}]: only module, import and extern package directives are implemented"
        ));
        self.pending_modifiers.clear();
        self.skip_after_eod();
    }

    // === Token movement ===

    fn next_token(&mut self) {
        self.previous_token = self.token;
        self.token = self.tokens.advance();
        tracing::trace!(
            kind = ?self.token.kind,
            start = self.token.start.offset,
            end = self.token.end.offset,
            "consume"
        );
    }

    #[inline]
    fn peek(&mut self, offset: usize) -> Token {
        self.tokens.peek(offset, false)
    }

    /// Make line breaks insignificant, skipping any the current token is on.
    fn begin_skip_newlines(&mut self) {
        self.tokens.suppress_newlines();
        while self.token.kind == TokenKind::NewLine {
            self.next_token();
        }
    }

    fn end_skip_newlines(&mut self) {
        self.tokens.restore_newlines();
    }

    /// Consume a keyword together with any line breaks after it.
    fn skip_keyword(&mut self) {
        self.begin_skip_newlines();
        self.next_token();
        self.end_skip_newlines();
    }

    #[inline]
    fn has_eod(&self) -> bool {
        EOD.contains(&self.token.kind)
    }

    /// Panic-mode recovery: skip to the next end of declaration and past it,
    /// unless it is end of file.
    fn skip_after_eod(&mut self) {
        let start = self.token.start;
        while !self.has_eod() {
            self.next_token();
        }
        if self.token.kind != TokenKind::Eof {
            self.next_token();
        }
        tracing::debug!(from = %start, to = %self.previous_token.end, "skipped to end of declaration");
    }

    /// Consume the end of declaration after `syntax_name`, reporting and
    /// skipping any tokens in front of it. Returns whether it was there.
    fn expect_eod(&mut self, syntax_name: &str) -> bool {
        if self.has_eod() {
            self.next_token();
            return true;
        }

        let start = self.token.start;
        while !self.has_eod() {
            self.next_token();
        }
        let span = self.span_from(start);
        let text = printable(&self.span_text(&span));
        self.error_span(
            span,
            format!(
                "Error while parsing {syntax_name}: Unexpected tokens [{text}]. Expecting EOF or EOL or ; after declaration"
            ),
        );
        tracing::debug!(syntax_name, "skipped to end of declaration");
        if self.token.kind != TokenKind::Eof {
            self.next_token();
        }
        false
    }

    /// `::` as two adjacent `:` tokens.
    fn expect_double_colon(&mut self, context: &str) -> bool {
        if self.token.kind == TokenKind::Colon {
            let second = self.tokens.peek(1, true);
            if second.kind == TokenKind::Colon {
                self.next_token();
                self.next_token();
                return true;
            }
            self.report_missing_double_colon(second, context);
        } else {
            self.report_missing_double_colon(self.token, context);
        }
        false
    }

    fn report_missing_double_colon(&mut self, found: Token, context: &str) {
        let text = self.printable_token(found);
        self.error_at(
            found,
            format!("Expecting token [::] but found [{text}] while parsing {context}"),
        );
    }

    // === Nodes ===

    /// Span from `start` to the end of the last consumed token.
    fn span_from(&self, start: TextPosition) -> SourceSpan {
        SourceSpan::new(self.file_path.clone(), start, self.previous_token.end)
    }

    fn syntax_value(&self, token: Token) -> SyntaxValue<String> {
        SyntaxValue::new(token, self.token_text(token))
    }

    // === Text ===

    fn source(&self) -> &S {
        self.tokens.lexer().source()
    }

    fn token_text(&self, token: Token) -> String {
        token.text(self.source())
    }

    fn printable_token(&self, token: Token) -> String {
        printable(&self.token_text(token))
    }

    fn span_text(&self, span: &SourceSpan) -> String {
        self.source()
            .text(span.start.offset, span.end.offset)
            .unwrap_or_default()
    }

    // === Diagnostics ===

    /// Report an error on the current token.
    fn error(&mut self, message: String) {
        self.error_at(self.token, message);
    }

    fn error_at(&mut self, token: Token, message: String) {
        let span = token.span(&self.file_path);
        self.error_span(span, message);
    }

    fn error_span(&mut self, span: SourceSpan, message: String) {
        self.diagnostics.push(LogMessage::error(span, message));
    }
}

#[cfg(test)]
mod tests;
