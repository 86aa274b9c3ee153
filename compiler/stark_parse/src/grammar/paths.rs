//! Module paths and full module names.
//!
//! ```text
//! ModulePath     := ('this' '::' | ('base' '::')*)? (IDENT '::')*
//! ModuleFullName := (IDENT '::')* IDENT
//! ```
//!
//! Line breaks are insignificant inside a path. The `::` separator must be
//! two adjacent `:` tokens.

use stark_ir::{ModuleFullName, ModulePath, SourceSpan, SyntaxValue, TokenKind};
use stark_lexer_core::SourceView;

use crate::Parser;

impl<S: SourceView> Parser<S> {
    /// Leading `segment::` items; an empty path is valid.
    pub(crate) fn parse_module_path(&mut self, allow_this_and_base: bool) -> Option<ModulePath> {
        let start = self.token.start;
        let mut items = Vec::new();

        self.begin_skip_newlines();
        let is_valid = self.parse_module_path_items(allow_this_and_base, &mut items);
        self.end_skip_newlines();
        if !is_valid {
            return None;
        }

        let span = if items.is_empty() {
            SourceSpan::new(self.file_path.clone(), start, start)
        } else {
            self.span_from(start)
        };
        Some(ModulePath { span, items })
    }

    fn parse_module_path_items(
        &mut self,
        allow_this_and_base: bool,
        items: &mut Vec<SyntaxValue<String>>,
    ) -> bool {
        if allow_this_and_base {
            if self.token.kind == TokenKind::This {
                items.push(SyntaxValue::new(self.token, "this".to_owned()));
                self.next_token();
                if !self.expect_double_colon("module path after 'this'") {
                    return false;
                }
            } else {
                while self.token.kind == TokenKind::Base {
                    items.push(SyntaxValue::new(self.token, "base".to_owned()));
                    self.next_token();
                    if !self.expect_double_colon("module path after 'base'") {
                        return false;
                    }
                }
            }
        }

        while self.token.kind == TokenKind::Identifier
            && self.peek(1).kind == TokenKind::Colon
            && self.peek(2).kind == TokenKind::Colon
        {
            let item = self.syntax_value(self.token);
            let context = format!("module path after identifier [{}]", item.value);
            items.push(item);
            self.next_token();
            // The peek skipped hidden tokens; the colons must still be adjacent.
            if !self.expect_double_colon(&context) {
                return false;
            }
        }
        true
    }

    /// `a::b::c`, where `c` is the name.
    pub(crate) fn parse_module_full_name(&mut self) -> Option<ModuleFullName> {
        let start = self.token.start;
        let path = self.parse_module_path(false)?;

        if self.token.kind != TokenKind::Identifier {
            let text = self.printable_token(self.token);
            self.error(format!(
                "Unexpected token [{text}]. Expecting an identifier while parsing a full module name"
            ));
            return None;
        }
        let name = self.syntax_value(self.token);
        self.next_token();

        Some(ModuleFullName {
            span: self.span_from(start),
            path,
            name,
        })
    }
}
