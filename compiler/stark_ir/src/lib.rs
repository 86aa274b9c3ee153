//! Stark IR - shared front-end types
//!
//! This crate contains the data structures passed between the Stark lexer,
//! parser and diagnostics:
//! - `TextPosition` / `SourceSpan` for source locations
//! - `Token` / `TokenKind` for lexer output
//! - The directive syntax tree (`Directives`, `Directive`, ...) and
//!   `ModifierFlags`
//! - `SyntaxVisitor` for read-only tree traversal
//!
//! Tokens are small `Copy` values. Their text is never stored; it is
//! recovered from the source view on demand with [`Token::text`].

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod position;
mod token;
pub mod visitor;

pub use ast::{
    Directive, Directives, ExternPackageDirective, ImportDirective, ImportNameOrAlias,
    ImportPath, ImportTarget, ModifierFlags, ModuleDirective, ModuleFullName, ModulePath,
    SyntaxValue,
};
pub use position::{SourceSpan, TextPosition};
pub use token::{Token, TokenKind};
pub use visitor::SyntaxVisitor;
