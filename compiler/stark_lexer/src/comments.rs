//! Line and block comments.

use stark_ir::{TextPosition, Token, TokenKind};
use stark_lexer_core::SourceView;

use crate::lex_error::LexErrorKind;
use crate::Lexer;

impl<S: SourceView> Lexer<S> {
    /// The current character is the `/` or `*` following the opening `/`.
    pub(crate) fn read_comment(&mut self, start: TextPosition) -> Token {
        if self.scanner.is('/') {
            self.read_line_comment(start)
        } else {
            self.read_block_comment(start)
        }
    }

    /// `// ...` up to, not including, the line break. A third `/` makes it a
    /// doc comment.
    fn read_line_comment(&mut self, start: TextPosition) -> Token {
        let mut end = self.scanner.position();
        self.scanner.advance();
        let is_doc = self.scanner.is('/');
        while let Some(c) = self.scanner.current() {
            if c == '\r' || c == '\n' {
                break;
            }
            end = self.scanner.position();
            self.scanner.advance();
        }
        let kind = if is_doc {
            TokenKind::CommentDoc
        } else {
            TokenKind::Comment
        };
        Token::new(kind, start, end)
    }

    /// `/* ... */`; nested pairs must balance.
    fn read_block_comment(&mut self, start: TextPosition) -> Token {
        let mut end = self.scanner.position();
        self.scanner.advance();
        let mut depth = 1u32;
        while let Some(c) = self.scanner.current() {
            end = self.scanner.position();
            self.scanner.advance();
            if c == '/' && self.scanner.is('*') {
                end = self.scanner.position();
                self.scanner.advance();
                depth += 1;
            } else if c == '*' && self.scanner.is('/') {
                end = self.scanner.position();
                self.scanner.advance();
                depth -= 1;
                if depth == 0 {
                    return Token::new(TokenKind::CommentMultiLine, start, end);
                }
            }
        }
        self.error(LexErrorKind::UnterminatedBlockComment, start);
        Token::new(TokenKind::Invalid, start, end)
    }
}
