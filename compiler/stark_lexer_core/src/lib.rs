//! Low-level building blocks for the Stark lexer.
//!
//! This crate has no dependency on the rest of the compiler. It provides:
//!
//! - [`char_class`]: Unicode-aware code point predicates used by the scanner
//! - [`SourceView`] / [`CodePointCursor`]: one decoding contract over UTF-16
//!   code units ([`Utf16Source`]) and raw UTF-8 bytes ([`Utf8Source`])
//! - [`TextMatcher`]: a flat, binary-searched trie fed one character at a time
//!
//! # Offsets
//!
//! Every offset handed out by this crate is a `u32` index in the *code units*
//! of the underlying view: 16-bit units for [`Utf16Source`], bytes for
//! [`Utf8Source`]. Callers never mix offsets from different views.

pub mod char_class;
mod source_view;
mod text_matcher;
mod unicode_tables;

pub use source_view::{CodePointCursor, DecodeError, SourceView, Utf16Source, Utf8Source};
pub use text_matcher::{CharNode, TextMatcher};
