//! `public? module Name`

use stark_ir::{ModuleDirective, TokenKind};
use stark_lexer_core::SourceView;

use crate::Parser;

impl<S: SourceView> Parser<S> {
    /// Current token is `module`.
    pub(crate) fn parse_module(&mut self) -> Option<ModuleDirective> {
        let mut start = self.token.start;
        self.skip_keyword();

        let public = self.expect_public_modifier_only("module");
        if let Some(modifier) = &public {
            start = modifier.token.start;
        }

        if self.token.kind != TokenKind::Identifier {
            self.error("Expecting a module identifier".to_owned());
            self.skip_after_eod();
            return None;
        }
        let name = self.syntax_value(self.token);
        self.next_token();

        let directive = ModuleDirective {
            span: self.span_from(start),
            modifiers: public.into_iter().collect(),
            name,
        };
        self.expect_eod(ModuleDirective::SYNTAX_NAME);
        Some(directive)
    }
}
