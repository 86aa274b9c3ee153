use std::fmt;

use stark_ir::SourceSpan;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A single diagnostic message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct LogMessage {
    pub severity: Severity,
    pub span: SourceSpan,
    pub message: String,
}

impl LogMessage {
    pub fn error(span: SourceSpan, message: impl Into<String>) -> Self {
        LogMessage {
            severity: Severity::Error,
            span,
            message: message.into(),
        }
    }

    pub fn warning(span: SourceSpan, message: impl Into<String>) -> Self {
        LogMessage {
            severity: Severity::Warning,
            span,
            message: message.into(),
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for LogMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {} : {}", self.span, self.severity, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use stark_ir::TextPosition;

    fn span() -> SourceSpan {
        SourceSpan::new(
            "src/main.sk".into(),
            TextPosition::new(10, 1, 2),
            TextPosition::new(12, 1, 4),
        )
    }

    #[test]
    fn render_error() {
        let msg = LogMessage::error(span(), "Expecting a module identifier");
        assert_eq!(
            msg.to_string(),
            "src/main.sk(2,2)-(2,4) : error : Expecting a module identifier"
        );
        assert!(msg.is_error());
    }

    #[test]
    fn render_warning() {
        let msg = LogMessage::warning(span(), "unused import");
        assert_eq!(msg.to_string(), "src/main.sk(2,2)-(2,4) : warning : unused import");
        assert!(!msg.is_error());
    }

    #[test]
    fn render_at_end_of_file() {
        let eof = SourceSpan::new("a.sk".into(), TextPosition::EOF, TextPosition::EOF);
        let msg = LogMessage::error(eof, "Unexpected modifier before [end of file]");
        assert_eq!(
            msg.to_string(),
            "a.sk(eof)-(eof) : error : Unexpected modifier before [end of file]"
        );
    }
}
