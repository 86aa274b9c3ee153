use super::*;
use pretty_assertions::assert_eq;

#[test]
fn every_keyword_round_trips() {
    for &kind in TokenKind::KEYWORDS {
        let text = kind.text().unwrap_or_default();
        assert_eq!(lookup(text), Some(kind), "{text}");
    }
}

#[test]
fn non_keywords() {
    for text in ["", "foo", "modules", "a", "á", "_", "for_", "fora", "Module", "IMPORT", "f"] {
        assert_eq!(lookup(text), None, "{text:?}");
    }
}

#[test]
fn prefixes_of_keywords_are_not_keywords() {
    assert_eq!(lookup("mod"), None);
    assert_eq!(lookup("imp"), None);
    assert_eq!(lookup("constructo"), None);
    assert_eq!(lookup("constructor"), Some(TokenKind::Constructor));
    assert_eq!(lookup("const"), Some(TokenKind::Const));
}

#[test]
fn matcher_is_shared() {
    assert!(std::ptr::eq(global_keywords(), global_keywords()));
    // root + one node per distinct keyword prefix
    assert!(global_keywords().nodes().len() > TokenKind::KEYWORDS.len());
}
