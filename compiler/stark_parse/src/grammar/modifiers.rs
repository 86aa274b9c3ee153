//! Pending modifiers.
//!
//! Modifier keywords are collected ahead of the directive they qualify. The
//! directive then takes what it accepts, and every leftover is reported and
//! dropped so nothing leaks into the next directive.

use stark_ir::{ModifierFlags, SyntaxValue};
use stark_lexer_core::SourceView;

use crate::Parser;

impl<S: SourceView> Parser<S> {
    /// Current token is a modifier keyword.
    pub(crate) fn add_pending_modifier(&mut self) {
        let token = self.token;
        let Some(flag) = ModifierFlags::from_keyword(token.kind) else {
            self.next_token();
            return;
        };

        if self.pending_modifiers.iter().any(|pending| pending.value.intersects(flag)) {
            let text = self.printable_token(token);
            self.error(format!("Unexpected duplicated modifier [{text}]"));
        } else {
            self.pending_modifiers.push(SyntaxValue::new(token, flag));
        }
        self.next_token();
    }

    /// Take the pending `public` modifier, reporting any other one.
    pub(crate) fn expect_public_modifier_only(
        &mut self,
        context: &str,
    ) -> Option<SyntaxValue<ModifierFlags>> {
        let mut public = None;
        for modifier in std::mem::take(&mut self.pending_modifiers) {
            if modifier.value.contains(ModifierFlags::PUBLIC) {
                public.get_or_insert(modifier);
            } else {
                let text = self.printable_token(modifier.token);
                self.error_at(
                    modifier.token,
                    format!(
                        "Unexpected modifier [{text}] for {context}. Only the [public] modifier is supported."
                    ),
                );
            }
        }
        public
    }

    /// Report every pending modifier as misplaced before `context`.
    pub(crate) fn check_no_modifiers(&mut self, context: &str) {
        for modifier in std::mem::take(&mut self.pending_modifiers) {
            self.error_at(
                modifier.token,
                format!("Unexpected modifier before [{context}]"),
            );
        }
    }
}
