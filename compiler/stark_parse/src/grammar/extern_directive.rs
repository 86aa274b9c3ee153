//! `extern package a::b::c`
//!
//! The package name is a full module name: no `this::` or `base::` prefix.

use stark_ir::{ExternPackageDirective, TokenKind};
use stark_lexer_core::SourceView;

use crate::Parser;

impl<S: SourceView> Parser<S> {
    /// Current token is `extern`.
    pub(crate) fn parse_extern(&mut self) -> Option<ExternPackageDirective> {
        self.check_no_modifiers("extern");
        let start = self.token.start;
        self.skip_keyword();

        if self.token.kind == TokenKind::Package {
            self.skip_keyword();
            if let Some(package_name) = self.parse_module_full_name() {
                let directive = ExternPackageDirective {
                    span: self.span_from(start),
                    package_name,
                };
                self.expect_eod(ExternPackageDirective::SYNTAX_NAME);
                return Some(directive);
            }
        } else if self.has_eod() {
            self.error("Unexpected EOF, or EOL or ; after extern".to_owned());
        } else {
            let text = self.printable_token(self.token);
            self.error(format!("Unexpected extern [{text}]"));
        }

        self.skip_after_eod();
        None
    }
}
