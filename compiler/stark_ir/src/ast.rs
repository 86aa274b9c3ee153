//! Directive-level syntax tree.
//!
//! A parsed file is a [`Directives`] list. Each node owns a [`SourceSpan`]
//! whose start is set when the parser opens the node and whose end is the
//! end of the last token consumed for it.

use bitflags::bitflags;

use crate::{SourceSpan, Token, TokenKind};

bitflags! {
    /// Declaration modifiers.
    ///
    /// Grouped into visibility, inheritance and permission categories; a
    /// declaration normally carries at most one flag per category.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ModifierFlags: u32 {
        const PUBLIC = 1 << 1;
        const PROTECTED = 1 << 2;
        const INTERNAL = 1 << 3;
        const VIRTUAL = 1 << 4;
        const ABSTRACT = 1 << 5;
        const OVERRIDE = 1 << 6;
        const STATIC = 1 << 7;
        const IMMUTABLE = 1 << 8;
        const READONLY = 1 << 9;
        const UNSAFE = 1 << 10;
        const PARTIAL = 1 << 11;

        const VISIBILITY = Self::PUBLIC.bits() | Self::PROTECTED.bits() | Self::INTERNAL.bits();
        const INHERITANCE = Self::VIRTUAL.bits()
            | Self::ABSTRACT.bits()
            | Self::OVERRIDE.bits()
            | Self::STATIC.bits();
        const PERMISSION = Self::IMMUTABLE.bits() | Self::READONLY.bits();
    }
}

impl ModifierFlags {
    /// Flag for a modifier keyword, if `kind` is one.
    pub fn from_keyword(kind: TokenKind) -> Option<Self> {
        let flag = match kind {
            TokenKind::Public => Self::PUBLIC,
            TokenKind::Protected => Self::PROTECTED,
            TokenKind::Internal => Self::INTERNAL,
            TokenKind::Virtual => Self::VIRTUAL,
            TokenKind::Abstract => Self::ABSTRACT,
            TokenKind::Override => Self::OVERRIDE,
            TokenKind::Static => Self::STATIC,
            TokenKind::Immutable => Self::IMMUTABLE,
            TokenKind::Readonly => Self::READONLY,
            TokenKind::Unsafe => Self::UNSAFE,
            TokenKind::Partial => Self::PARTIAL,
            _ => return None,
        };
        Some(flag)
    }

    #[inline]
    pub fn has_visibility(self) -> bool {
        self.intersects(Self::VISIBILITY)
    }

    /// Some visibility flag is set and nothing else is.
    #[inline]
    pub fn has_visibility_only(self) -> bool {
        self.has_visibility() && Self::VISIBILITY.contains(self)
    }

    #[inline]
    pub fn has_inheritance(self) -> bool {
        self.intersects(Self::INHERITANCE)
    }

    #[inline]
    pub fn has_permission(self) -> bool {
        self.intersects(Self::PERMISSION)
    }

    #[inline]
    pub fn has_unsafe(self) -> bool {
        self.contains(Self::UNSAFE)
    }

    #[inline]
    pub fn has_partial(self) -> bool {
        self.contains(Self::PARTIAL)
    }
}

/// A value extracted from a single token, keeping the token for its span.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SyntaxValue<T> {
    pub token: Token,
    pub value: T,
}

impl<T> SyntaxValue<T> {
    pub fn new(token: Token, value: T) -> Self {
        SyntaxValue { token, value }
    }
}

/// Root of a parsed file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Directives {
    pub nodes: Vec<Directive>,
}

impl Directives {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Directive> {
        self.nodes.iter()
    }
}

impl<'a> IntoIterator for &'a Directives {
    type Item = &'a Directive;
    type IntoIter = std::slice::Iter<'a, Directive>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// A top-level directive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Directive {
    Module(ModuleDirective),
    Import(ImportDirective),
    ExternPackage(ExternPackageDirective),
}

impl Directive {
    pub fn span(&self) -> &SourceSpan {
        match self {
            Directive::Module(node) => &node.span,
            Directive::Import(node) => &node.span,
            Directive::ExternPackage(node) => &node.span,
        }
    }

    /// Name used in diagnostics: `module`, `import` or `extern package`.
    pub fn syntax_name(&self) -> &'static str {
        match self {
            Directive::Module(_) => ModuleDirective::SYNTAX_NAME,
            Directive::Import(_) => ImportDirective::SYNTAX_NAME,
            Directive::ExternPackage(_) => ExternPackageDirective::SYNTAX_NAME,
        }
    }
}

/// `public? module Name`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleDirective {
    pub span: SourceSpan,
    /// At most the one accepted `public` modifier.
    pub modifiers: Vec<SyntaxValue<ModifierFlags>>,
    pub name: SyntaxValue<String>,
}

impl ModuleDirective {
    pub const SYNTAX_NAME: &'static str = "module";
}

/// `public? import ImportPath`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportDirective {
    pub span: SourceSpan,
    pub public: Option<SyntaxValue<ModifierFlags>>,
    pub import_path: ImportPath,
}

impl ImportDirective {
    pub const SYNTAX_NAME: &'static str = "import";
}

/// `extern package ModuleFullName`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExternPackageDirective {
    pub span: SourceSpan,
    pub package_name: ModuleFullName,
}

impl ExternPackageDirective {
    pub const SYNTAX_NAME: &'static str = "extern package";
}

/// Leading `this::`, `base::` or `ident::` segments of a path.
///
/// `items` holds the segment texts in order, `this` and `base` included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModulePath {
    pub span: SourceSpan,
    pub items: Vec<SyntaxValue<String>>,
}

impl ModulePath {
    /// Segment texts joined with `::`.
    pub fn to_path_string(&self) -> String {
        self.items
            .iter()
            .map(|item| item.value.as_str())
            .collect::<Vec<_>>()
            .join("::")
    }
}

/// A module path without `this`/`base`, followed by a final name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleFullName {
    pub span: SourceSpan,
    pub path: ModulePath,
    pub name: SyntaxValue<String>,
}

impl ModuleFullName {
    /// `a::b::c` form of the full name.
    pub fn to_path_string(&self) -> String {
        if self.path.items.is_empty() {
            return self.name.value.clone();
        }
        format!("{}::{}", self.path.to_path_string(), self.name.value)
    }
}

/// What an import path brings into scope.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImportTarget {
    /// `path::name` or `path::name as alias`
    Single(ImportNameOrAlias),
    /// `path::*`
    All(Token),
    /// `path::{a, b as c}`
    List(Vec<ImportNameOrAlias>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportPath {
    pub span: SourceSpan,
    pub path: ModulePath,
    pub target: ImportTarget,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportNameOrAlias {
    pub name: SyntaxValue<String>,
    pub alias: Option<SyntaxValue<String>>,
}

impl ImportNameOrAlias {
    /// Name bound in the importing module.
    pub fn local_name(&self) -> &str {
        self.alias.as_ref().unwrap_or(&self.name).value.as_str()
    }
}

#[cfg(test)]
mod tests;
