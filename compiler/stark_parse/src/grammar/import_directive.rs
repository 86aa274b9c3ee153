//! `public? import ImportPath`
//!
//! ```text
//! ImportPath := ModulePath ( NameOrAlias | '*' | '{' NameOrAlias (',' NameOrAlias)* ','? '}' )
//! NameOrAlias := IDENT ('as' IDENT)?
//! ```

use stark_ir::{ImportDirective, ImportNameOrAlias, ImportPath, ImportTarget, TokenKind};
use stark_lexer_core::SourceView;

use crate::outcome::ParseOutcome;
use crate::Parser;

impl<S: SourceView> Parser<S> {
    /// Current token is `import`.
    pub(crate) fn parse_import(&mut self) -> Option<ImportDirective> {
        let mut start = self.token.start;
        self.skip_keyword();

        let public = self.expect_public_modifier_only("import");
        if let Some(modifier) = &public {
            start = modifier.token.start;
        }

        let Some(import_path) = self.parse_import_path() else {
            self.skip_after_eod();
            return None;
        };

        let directive = ImportDirective {
            span: self.span_from(start),
            public,
            import_path,
        };
        self.expect_eod(ImportDirective::SYNTAX_NAME);
        Some(directive)
    }

    fn parse_import_path(&mut self) -> Option<ImportPath> {
        let start = self.token.start;
        let path = self.parse_module_path(true)?;

        let target = match self.parse_import_name_or_alias() {
            ParseOutcome::ConsumedOk { value } => ImportTarget::Single(value),
            ParseOutcome::ConsumedErr => return None,
            ParseOutcome::EmptyErr => match self.token.kind {
                TokenKind::Star => {
                    let star = self.token;
                    self.next_token();
                    ImportTarget::All(star)
                }
                TokenKind::LeftBrace => ImportTarget::List(self.parse_import_list()?),
                _ => {
                    self.error("Expecting identifier, * or {...} for import name".to_owned());
                    return None;
                }
            },
        };

        Some(ImportPath {
            span: self.span_from(start),
            path,
            target,
        })
    }

    /// `{a, b as c}`; line breaks are insignificant inside the braces.
    fn parse_import_list(&mut self) -> Option<Vec<ImportNameOrAlias>> {
        self.begin_skip_newlines();
        self.next_token();
        let items = self.parse_import_list_items();
        self.end_skip_newlines();
        let items = items?;

        if self.token.kind != TokenKind::RightBrace {
            let text = self.printable_token(self.token);
            self.error(format!(
                "Unexpected token [{text}]. Expecting a closing }} for an import path list {{...}}"
            ));
            return None;
        }
        self.next_token();
        Some(items)
    }

    fn parse_import_list_items(&mut self) -> Option<Vec<ImportNameOrAlias>> {
        let mut items = Vec::new();
        match self.parse_import_name_or_alias() {
            ParseOutcome::ConsumedOk { value } => items.push(value),
            ParseOutcome::ConsumedErr => return None,
            ParseOutcome::EmptyErr => {
                self.report_missing_list_item();
                return None;
            }
        }

        while self.token.kind == TokenKind::Comma {
            self.next_token();
            match self.parse_import_name_or_alias() {
                ParseOutcome::ConsumedOk { value } => items.push(value),
                ParseOutcome::ConsumedErr => return None,
                // Trailing comma.
                ParseOutcome::EmptyErr if self.token.kind == TokenKind::RightBrace => break,
                ParseOutcome::EmptyErr => {
                    self.report_missing_list_item();
                    return None;
                }
            }
        }
        Some(items)
    }

    fn report_missing_list_item(&mut self) {
        let text = self.printable_token(self.token);
        self.error(format!(
            "Unexpected token [{text}]. Expecting at least an identifier inside an import path list {{...}}"
        ));
    }

    /// `name` or `name as alias`; a line break may separate `name` and `as`.
    fn parse_import_name_or_alias(&mut self) -> ParseOutcome<ImportNameOrAlias> {
        if self.token.kind != TokenKind::Identifier {
            return ParseOutcome::EmptyErr;
        }
        let name = self.syntax_value(self.token);

        self.begin_skip_newlines();
        if self.peek(1).kind != TokenKind::As {
            self.end_skip_newlines();
            self.next_token();
            return ParseOutcome::consumed_ok(ImportNameOrAlias { name, alias: None });
        }

        self.next_token();
        self.next_token();
        self.end_skip_newlines();

        if self.token.kind != TokenKind::Identifier {
            let text = self.printable_token(self.token);
            self.error(format!(
                "Unexpected token [{text}]. Expecting an identifier after an alias name"
            ));
            return ParseOutcome::ConsumedErr;
        }
        let alias = self.syntax_value(self.token);
        self.next_token();
        ParseOutcome::consumed_ok(ImportNameOrAlias {
            name,
            alias: Some(alias),
        })
    }
}
