//! Token kinds and tokens.
//!
//! `TokenKind` is a fieldless `#[repr(u8)]` enum so a kind doubles as a
//! bitset index (see `discriminant_index`). Keyword and punctuation kinds
//! carry their canonical spelling through [`TokenKind::text`], which the
//! lexer uses to build its keyword matcher and the parser uses in messages.

use std::fmt;

use stark_lexer_core::SourceView;

use crate::{SourceSpan, TextPosition};

/// A lexed token: a kind and an inclusive range of source positions.
///
/// The text is not stored; use [`Token::text`] with the source the token was
/// lexed from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub start: TextPosition,
    /// Position of the last code point (inclusive).
    pub end: TextPosition,
}

impl Token {
    /// The canonical end-of-file token.
    pub const EOF: Token = Token {
        kind: TokenKind::Eof,
        start: TextPosition::EOF,
        end: TextPosition::EOF,
    };

    #[inline]
    pub const fn new(kind: TokenKind, start: TextPosition, end: TextPosition) -> Self {
        Token { kind, start, end }
    }

    /// Source text of this token; `<eof>` for the end-of-file token.
    pub fn text<S: SourceView>(&self, source: &S) -> String {
        if self.kind == TokenKind::Eof {
            return "<eof>".to_owned();
        }
        source
            .text(self.start.offset, self.end.offset)
            .unwrap_or_default()
    }

    /// Span of this token in `file_path`.
    pub fn span(&self, file_path: &std::sync::Arc<str>) -> SourceSpan {
        SourceSpan::new(file_path.clone(), self.start, self.end)
    }
}

/// Token kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TokenKind {
    // Punctuation
    Semicolon,
    Colon,
    Dollar,
    Hash,
    Tilde,
    Backtick,
    Backslash,
    At,
    Caret,
    Star,
    Slash,
    Plus,
    Minus,
    Percent,
    Comma,
    Ampersand,
    Question,
    Pipe,
    Dot,
    Bang,
    Equal,
    Less,
    Greater,
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,

    // Trivia
    NewLine,
    Whitespace,
    Comment,
    /// `///` comment.
    CommentDoc,
    CommentMultiLine,

    // Names and literals
    Identifier,
    /// One or more `_` and nothing else.
    Underscores,
    Integer,
    IntegerHexa,
    IntegerOctal,
    IntegerBinary,
    Float,
    Char,
    String,
    /// `@"..."`
    StringRaw,

    // Keywords
    Abstract,
    Alias,
    As,
    Async,
    Await,
    Base,
    Break,
    Class,
    Const,
    Constructor,
    Default,
    Else,
    Enum,
    Extends,
    Extern,
    False,
    Fatal,
    Fixed,
    For,
    From,
    Func,
    Get,
    If,
    Immutable,
    Implements,
    Import,
    In,
    Internal,
    Is,
    Isolated,
    Let,
    Match,
    Meta,
    Module,
    Mutable,
    New,
    Operator,
    Out,
    Override,
    Package,
    Params,
    Partial,
    Permanent,
    Private,
    Protected,
    Public,
    Readonly,
    Ref,
    Requires,
    Return,
    Scoped,
    Sealed,
    Set,
    Sizeof,
    Static,
    Struct,
    This,
    Throw,
    Trait,
    Transient,
    True,
    Typeof,
    Unsafe,
    Value,
    Var,
    Virtual,
    Volatile,
    Where,
    While,
    With,

    Invalid,
    Eof,
}

impl TokenKind {
    /// Number of kinds; every `discriminant_index` is below this.
    pub const COUNT: usize = TokenKind::Eof as usize + 1;

    /// Every keyword kind, in ordinal order of its spelling.
    pub const KEYWORDS: &'static [TokenKind] = &[
        TokenKind::Abstract,
        TokenKind::Alias,
        TokenKind::As,
        TokenKind::Async,
        TokenKind::Await,
        TokenKind::Base,
        TokenKind::Break,
        TokenKind::Class,
        TokenKind::Const,
        TokenKind::Constructor,
        TokenKind::Default,
        TokenKind::Else,
        TokenKind::Enum,
        TokenKind::Extends,
        TokenKind::Extern,
        TokenKind::False,
        TokenKind::Fatal,
        TokenKind::Fixed,
        TokenKind::For,
        TokenKind::From,
        TokenKind::Func,
        TokenKind::Get,
        TokenKind::If,
        TokenKind::Immutable,
        TokenKind::Implements,
        TokenKind::Import,
        TokenKind::In,
        TokenKind::Internal,
        TokenKind::Is,
        TokenKind::Isolated,
        TokenKind::Let,
        TokenKind::Match,
        TokenKind::Meta,
        TokenKind::Module,
        TokenKind::Mutable,
        TokenKind::New,
        TokenKind::Operator,
        TokenKind::Out,
        TokenKind::Override,
        TokenKind::Package,
        TokenKind::Params,
        TokenKind::Partial,
        TokenKind::Permanent,
        TokenKind::Private,
        TokenKind::Protected,
        TokenKind::Public,
        TokenKind::Readonly,
        TokenKind::Ref,
        TokenKind::Requires,
        TokenKind::Return,
        TokenKind::Scoped,
        TokenKind::Sealed,
        TokenKind::Set,
        TokenKind::Sizeof,
        TokenKind::Static,
        TokenKind::Struct,
        TokenKind::This,
        TokenKind::Throw,
        TokenKind::Trait,
        TokenKind::Transient,
        TokenKind::True,
        TokenKind::Typeof,
        TokenKind::Unsafe,
        TokenKind::Value,
        TokenKind::Var,
        TokenKind::Virtual,
        TokenKind::Volatile,
        TokenKind::Where,
        TokenKind::While,
        TokenKind::With,
    ];

    /// Canonical spelling of keyword and punctuation kinds.
    pub const fn text(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Dollar => "$",
            TokenKind::Hash => "#",
            TokenKind::Tilde => "~",
            TokenKind::Backtick => "`",
            TokenKind::Backslash => "\\",
            TokenKind::At => "@",
            TokenKind::Caret => "^",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Percent => "%",
            TokenKind::Comma => ",",
            TokenKind::Ampersand => "&",
            TokenKind::Question => "?",
            TokenKind::Pipe => "|",
            TokenKind::Dot => ".",
            TokenKind::Bang => "!",
            TokenKind::Equal => "=",
            TokenKind::Less => "<",
            TokenKind::Greater => ">",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBracket => "[",
            TokenKind::RightBracket => "]",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::Abstract => "abstract",
            TokenKind::Alias => "alias",
            TokenKind::As => "as",
            TokenKind::Async => "async",
            TokenKind::Await => "await",
            TokenKind::Base => "base",
            TokenKind::Break => "break",
            TokenKind::Class => "class",
            TokenKind::Const => "const",
            TokenKind::Constructor => "constructor",
            TokenKind::Default => "default",
            TokenKind::Else => "else",
            TokenKind::Enum => "enum",
            TokenKind::Extends => "extends",
            TokenKind::Extern => "extern",
            TokenKind::False => "false",
            TokenKind::Fatal => "fatal",
            TokenKind::Fixed => "fixed",
            TokenKind::For => "for",
            TokenKind::From => "from",
            TokenKind::Func => "func",
            TokenKind::Get => "get",
            TokenKind::If => "if",
            TokenKind::Immutable => "immutable",
            TokenKind::Implements => "implements",
            TokenKind::Import => "import",
            TokenKind::In => "in",
            TokenKind::Internal => "internal",
            TokenKind::Is => "is",
            TokenKind::Isolated => "isolated",
            TokenKind::Let => "let",
            TokenKind::Match => "match",
            TokenKind::Meta => "meta",
            TokenKind::Module => "module",
            TokenKind::Mutable => "mutable",
            TokenKind::New => "new",
            TokenKind::Operator => "operator",
            TokenKind::Out => "out",
            TokenKind::Override => "override",
            TokenKind::Package => "package",
            TokenKind::Params => "params",
            TokenKind::Partial => "partial",
            TokenKind::Permanent => "permanent",
            TokenKind::Private => "private",
            TokenKind::Protected => "protected",
            TokenKind::Public => "public",
            TokenKind::Readonly => "readonly",
            TokenKind::Ref => "ref",
            TokenKind::Requires => "requires",
            TokenKind::Return => "return",
            TokenKind::Scoped => "scoped",
            TokenKind::Sealed => "sealed",
            TokenKind::Set => "set",
            TokenKind::Sizeof => "sizeof",
            TokenKind::Static => "static",
            TokenKind::Struct => "struct",
            TokenKind::This => "this",
            TokenKind::Throw => "throw",
            TokenKind::Trait => "trait",
            TokenKind::Transient => "transient",
            TokenKind::True => "true",
            TokenKind::Typeof => "typeof",
            TokenKind::Unsafe => "unsafe",
            TokenKind::Value => "value",
            TokenKind::Var => "var",
            TokenKind::Virtual => "virtual",
            TokenKind::Volatile => "volatile",
            TokenKind::Where => "where",
            TokenKind::While => "while",
            TokenKind::With => "with",
            _ => return None,
        };
        Some(text)
    }

    /// Index for `TokenSet` membership (`0..COUNT`).
    #[inline]
    pub const fn discriminant_index(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        (TokenKind::Abstract as u8..=TokenKind::With as u8).contains(&(self as u8))
    }

    /// Whitespace and comments: tokens with no syntactic meaning.
    ///
    /// `NewLine` is not trivia; whether the parser sees it depends on context.
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::Comment | TokenKind::CommentDoc | TokenKind::CommentMultiLine
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.text() {
            Some(text) => f.write_str(text),
            None => fmt::Debug::fmt(self, f),
        }
    }
}

// Size assertions to prevent accidental regressions
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Token, TokenKind};
    crate::static_assert_size!(TokenKind, 1);
    crate::static_assert_size!(Token, 28);
}

#[cfg(test)]
mod tests;
