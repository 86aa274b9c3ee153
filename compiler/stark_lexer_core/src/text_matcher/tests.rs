#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const WORDS: &[(&str, u8)] = &[
    ("for", 1),
    ("from", 2),
    ("func", 3),
    ("module", 4),
    ("mod", 5),
    ("f", 6),
    ("as", 7),
    ("async", 8),
];

fn matcher() -> TextMatcher<u8> {
    TextMatcher::new(WORDS.iter().copied())
}

#[test]
fn matches_every_entry() {
    let m = matcher();
    for &(word, value) in WORDS {
        assert_eq!(m.try_match(word), Some(value), "{word}");
    }
}

#[test]
fn rejects_prefixes_and_extensions() {
    let m = matcher();
    for text in ["", "fo", "fro", "modu", "modules", "foo", "for_", "a", "asyn", "á", "_", "x"] {
        assert_eq!(m.try_match(text), None, "{text:?}");
    }
}

#[test]
fn incremental_protocol() {
    let m = matcher();
    let (f, result) = m.try_match_char(TextMatcher::<u8>::ROOT, 'f').unwrap();
    assert_eq!(result, Some(6));
    let (fo, result) = m.try_match_char(f, 'o').unwrap();
    assert_eq!(result, None);
    let (_, result) = m.try_match_char(fo, 'r').unwrap();
    assert_eq!(result, Some(1));
    assert!(m.try_match_char(fo, 'x').is_none());
}

#[test]
fn children_are_contiguous_and_sorted() {
    let m = matcher();
    let nodes = m.nodes();
    let root = &nodes[0];
    let first: Vec<char> = nodes[root.offset..root.offset + root.count]
        .iter()
        .map(|n| n.c)
        .collect();
    assert_eq!(first, vec!['a', 'f', 'm']);
    for node in nodes {
        let children = &nodes[node.offset..node.offset + node.count];
        assert!(children.windows(2).all(|w| w[0].c < w[1].c));
    }
}

#[test]
fn one_node_per_distinct_prefix() {
    let m = matcher();
    let mut prefixes = std::collections::BTreeSet::new();
    for &(word, _) in WORDS {
        for end in 1..=word.len() {
            prefixes.insert(&word[..end]);
        }
    }
    assert_eq!(m.nodes().len(), prefixes.len() + 1);
}

#[test]
fn first_duplicate_wins() {
    let m = TextMatcher::new([("if", 1), ("if", 2)]);
    assert_eq!(m.try_match("if"), Some(1));
}

#[test]
fn empty_matcher() {
    let m: TextMatcher<u8> = TextMatcher::new(Vec::<(String, u8)>::new());
    assert_eq!(m.nodes().len(), 1);
    assert_eq!(m.try_match("a"), None);
}

#[test]
fn non_ascii_entries() {
    let m = TextMatcher::new([("héllo", 1), ("hé", 2)]);
    assert_eq!(m.try_match("héllo"), Some(1));
    assert_eq!(m.try_match("hé"), Some(2));
    assert_eq!(m.try_match("h"), None);
}

proptest! {
    #[test]
    fn agrees_with_hash_map(
        words in prop::collection::hash_set("[a-e]{1,5}", 0..24),
        candidate in "[a-e]{0,6}",
    ) {
        let entries: Vec<(String, usize)> = words.iter().cloned().zip(0..).collect();
        let m = TextMatcher::new(entries.iter().map(|(w, v)| (w.as_str(), *v)));
        let map: std::collections::HashMap<_, _> = entries.iter().cloned().collect();
        for (word, value) in &entries {
            prop_assert_eq!(m.try_match(word), Some(*value));
        }
        prop_assert_eq!(m.try_match(&candidate), map.get(&candidate).copied());
    }
}
