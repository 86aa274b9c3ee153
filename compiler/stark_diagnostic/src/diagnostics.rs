//! Ordered diagnostic accumulator.

use std::fmt;

use crate::{LogMessage, Severity};

/// Diagnostics in discovery order, with a running error flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Diagnostics {
    messages: Vec<LogMessage>,
    has_errors: bool,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: LogMessage) {
        self.has_errors |= message.severity == Severity::Error;
        self.messages.push(message);
    }

    /// Append every message of `other`, keeping its order.
    pub fn extend(&mut self, other: impl IntoIterator<Item = LogMessage>) {
        for message in other {
            self.push(message);
        }
    }

    #[inline]
    pub fn has_errors(&self) -> bool {
        self.has_errors
    }

    pub fn error_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_error()).count()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LogMessage> {
        self.messages.iter()
    }

    pub fn as_slice(&self) -> &[LogMessage] {
        &self.messages
    }

    pub fn clear(&mut self) {
        self.messages.clear();
        self.has_errors = false;
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a LogMessage;
    type IntoIter = std::slice::Iter<'a, LogMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

impl IntoIterator for Diagnostics {
    type Item = LogMessage;
    type IntoIter = std::vec::IntoIter<LogMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}

/// One rendered message per line.
impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for message in &self.messages {
            writeln!(f, "{message}")?;
        }
        Ok(())
    }
}
