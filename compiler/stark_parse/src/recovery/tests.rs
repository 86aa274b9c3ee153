use super::*;

fn keywords_in(set: TokenSet) -> Vec<TokenKind> {
    TokenKind::KEYWORDS
        .iter()
        .copied()
        .filter(|kind| set.contains(kind))
        .collect()
}

#[test]
fn test_token_set_empty() {
    let set = TokenSet::new();
    assert!(!set.contains(&TokenKind::Module));
    assert!(!set.contains(&TokenKind::Eof));
    assert!(keywords_in(set).is_empty());
    assert_eq!(set, TokenSet::default());
}

#[test]
fn test_token_set_first_and_last_kinds() {
    let set = TokenSet::new()
        .with(TokenKind::Semicolon)
        .with(TokenKind::Eof);
    assert!(set.contains(&TokenKind::Semicolon));
    assert!(set.contains(&TokenKind::Eof));
    assert!(!set.contains(&TokenKind::Colon));
}

#[test]
fn test_token_set_with_is_idempotent() {
    let once = TokenSet::new().with(TokenKind::Module);
    assert_eq!(once.with(TokenKind::Module), once);
}

#[test]
fn test_end_of_declaration() {
    for kind in [TokenKind::NewLine, TokenKind::Semicolon, TokenKind::Eof] {
        assert!(EOD.contains(&kind));
    }
    for kind in [TokenKind::Comma, TokenKind::Whitespace, TokenKind::Comment] {
        assert!(!EOD.contains(&kind));
    }
    assert!(keywords_in(EOD).is_empty());
}

#[test]
fn test_modifiers_match_modifier_flags() {
    assert_eq!(keywords_in(MODIFIERS).len(), 11);
    for &kind in TokenKind::KEYWORDS {
        assert_eq!(
            MODIFIERS.contains(&kind),
            stark_ir::ModifierFlags::from_keyword(kind).is_some(),
            "{kind}"
        );
    }
}

#[test]
fn test_unsupported_declarations() {
    assert_eq!(
        keywords_in(UNSUPPORTED_DECLARATIONS),
        vec![
            TokenKind::Class,
            TokenKind::Enum,
            TokenKind::Extends,
            TokenKind::Func,
            TokenKind::Let,
            TokenKind::Operator,
            TokenKind::Struct,
            TokenKind::Trait,
        ]
    );
    assert!(!UNSUPPORTED_DECLARATIONS.contains(&TokenKind::Module));
    assert!(keywords_in(MODIFIERS)
        .iter()
        .all(|kind| !UNSUPPORTED_DECLARATIONS.contains(kind)));
}
