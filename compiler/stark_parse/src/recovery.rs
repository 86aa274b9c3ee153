//! Token sets for directive dispatch and error recovery.
//!
//! Bitset-based O(1) membership testing: each bit of the `u128` is a
//! `TokenKind` discriminant index.

use stark_ir::TokenKind;

/// A set of token kinds.
///
/// # Example
/// ```ignore
/// const SEPARATORS: TokenSet = TokenSet::new()
///     .with(TokenKind::Comma)
///     .with(TokenKind::Semicolon);
///
/// assert!(SEPARATORS.contains(&TokenKind::Comma));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenSet(u128);

// All kinds must fit in the bitset.
const _: () = assert!(TokenKind::COUNT <= 128);

impl TokenSet {
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add a token kind to this set (builder pattern for const contexts).
    #[inline]
    #[must_use]
    #[allow(clippy::needless_pass_by_value)] // const fn builder for static initialization
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u128 << kind.discriminant_index()))
    }

    #[inline]
    pub const fn contains(&self, kind: &TokenKind) -> bool {
        (self.0 & (1u128 << kind.discriminant_index())) != 0
    }
}

impl Default for TokenSet {
    fn default() -> Self {
        Self::new()
    }
}

/// End of declaration: a line break, `;` or end of file.
pub const EOD: TokenSet = TokenSet::new()
    .with(TokenKind::NewLine)
    .with(TokenKind::Semicolon)
    .with(TokenKind::Eof);

/// Keywords collected as pending modifiers ahead of a directive.
pub const MODIFIERS: TokenSet = TokenSet::new()
    .with(TokenKind::Public)
    .with(TokenKind::Internal)
    .with(TokenKind::Protected)
    .with(TokenKind::Override)
    .with(TokenKind::Virtual)
    .with(TokenKind::Abstract)
    .with(TokenKind::Immutable)
    .with(TokenKind::Readonly)
    .with(TokenKind::Unsafe)
    .with(TokenKind::Partial)
    .with(TokenKind::Static);

/// Declaration keywords the directive parser recognises but cannot parse.
pub const UNSUPPORTED_DECLARATIONS: TokenSet = TokenSet::new()
    .with(TokenKind::Let)
    .with(TokenKind::Func)
    .with(TokenKind::Operator)
    .with(TokenKind::Struct)
    .with(TokenKind::Class)
    .with(TokenKind::Trait)
    .with(TokenKind::Enum)
    .with(TokenKind::Extends);

#[cfg(test)]
mod tests;
