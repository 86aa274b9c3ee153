//! Result of an optional grammar production.

/// Outcome of a production that may legitimately be absent.
///
/// | Variant | Meaning |
/// |---------|---------|
/// | `ConsumedOk` | Matched and parsed |
/// | `EmptyErr` | Did not start here; nothing consumed, nothing reported |
/// | `ConsumedErr` | Started, then failed; the error is already reported |
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ParseOutcome<T> {
    ConsumedOk { value: T },
    EmptyErr,
    ConsumedErr,
}

impl<T> ParseOutcome<T> {
    #[inline]
    pub(crate) fn consumed_ok(value: T) -> Self {
        ParseOutcome::ConsumedOk { value }
    }
}
