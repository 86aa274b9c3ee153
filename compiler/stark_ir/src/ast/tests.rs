use super::*;
use crate::TextPosition;
use pretty_assertions::assert_eq;

fn ident(text: &str, offset: u32) -> SyntaxValue<String> {
    let start = TextPosition::new(offset, 0, offset);
    #[allow(clippy::cast_possible_truncation)]
    let end = TextPosition::new(offset + text.len() as u32 - 1, 0, offset + text.len() as u32 - 1);
    SyntaxValue::new(Token::new(TokenKind::Identifier, start, end), text.to_owned())
}

fn span(start: u32, end: u32) -> SourceSpan {
    SourceSpan::new(
        "t.sk".into(),
        TextPosition::new(start, 0, start),
        TextPosition::new(end, 0, end),
    )
}

#[test]
fn modifier_keywords() {
    assert_eq!(ModifierFlags::from_keyword(TokenKind::Public), Some(ModifierFlags::PUBLIC));
    assert_eq!(ModifierFlags::from_keyword(TokenKind::Unsafe), Some(ModifierFlags::UNSAFE));
    assert_eq!(ModifierFlags::from_keyword(TokenKind::Readonly), Some(ModifierFlags::READONLY));
    assert_eq!(ModifierFlags::from_keyword(TokenKind::Module), None);
    assert_eq!(ModifierFlags::from_keyword(TokenKind::Private), None);
}

#[test]
fn modifier_categories() {
    let public = ModifierFlags::PUBLIC;
    assert!(public.has_visibility());
    assert!(public.has_visibility_only());
    assert!(!public.has_inheritance());

    let mixed = ModifierFlags::INTERNAL | ModifierFlags::STATIC;
    assert!(mixed.has_visibility());
    assert!(!mixed.has_visibility_only());
    assert!(mixed.has_inheritance());

    assert!(ModifierFlags::IMMUTABLE.has_permission());
    assert!(!ModifierFlags::UNSAFE.has_permission());
    assert!(ModifierFlags::UNSAFE.has_unsafe());
    assert!(ModifierFlags::PARTIAL.has_partial());
    assert!(!ModifierFlags::empty().has_visibility_only());
}

#[test]
fn full_name_rendering() {
    let bare = ModuleFullName {
        span: span(0, 2),
        path: ModulePath {
            span: span(0, 0),
            items: Vec::new(),
        },
        name: ident("std", 0),
    };
    assert_eq!(bare.to_path_string(), "std");

    let nested = ModuleFullName {
        span: span(0, 9),
        path: ModulePath {
            span: span(0, 5),
            items: vec![ident("a", 0), ident("b", 3)],
        },
        name: ident("c", 6),
    };
    assert_eq!(nested.to_path_string(), "a::b::c");
}

#[test]
fn local_name_prefers_alias() {
    let plain = ImportNameOrAlias {
        name: ident("Vec", 0),
        alias: None,
    };
    assert_eq!(plain.local_name(), "Vec");
    let aliased = ImportNameOrAlias {
        name: ident("Vec", 0),
        alias: Some(ident("V", 7)),
    };
    assert_eq!(aliased.local_name(), "V");
}

#[test]
fn directive_names_and_spans() {
    let module = Directive::Module(ModuleDirective {
        span: span(0, 10),
        modifiers: Vec::new(),
        name: ident("Test", 7),
    });
    assert_eq!(module.syntax_name(), "module");
    assert_eq!(module.span().length(), 11);
    assert_eq!(ExternPackageDirective::SYNTAX_NAME, "extern package");
    assert_eq!(ImportDirective::SYNTAX_NAME, "import");
}
