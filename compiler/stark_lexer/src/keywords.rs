//! Keyword recognition.
//!
//! Keywords are matched incrementally while an identifier is scanned (see
//! `Lexer::read_identifier`), using a [`TextMatcher`] built once from the
//! canonical spellings in [`TokenKind::KEYWORDS`].

use std::sync::OnceLock;

use stark_ir::TokenKind;
use stark_lexer_core::TextMatcher;

static GLOBAL_KEYWORDS: OnceLock<TextMatcher<TokenKind>> = OnceLock::new();

fn build() -> TextMatcher<TokenKind> {
    TextMatcher::new(
        TokenKind::KEYWORDS
            .iter()
            .filter_map(|&kind| kind.text().map(|text| (text, kind))),
    )
}

/// The keyword matcher (lazily initialized).
pub fn global_keywords() -> &'static TextMatcher<TokenKind> {
    GLOBAL_KEYWORDS.get_or_init(build)
}

/// Look up a complete identifier.
#[inline]
pub fn lookup(text: &str) -> Option<TokenKind> {
    global_keywords().try_match(text)
}

#[cfg(test)]
mod tests;
