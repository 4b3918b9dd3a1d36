//! Warning model produced by the scanner.
//!
//! Parsing never fails outright, so every problem it notices is recorded as a
//! `Diagnostic` next to the parse output and left to the caller to report.

use crate::{DiagnosticKind, DiagnosticsFormatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub code: Option<&'static str>,
    pub suggestion: Option<String>,
    /// Position of the offending token in the raw argument vector.
    pub arg_index: Option<usize>,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn new(severity: Severity, kind: DiagnosticKind, arg_index: Option<usize>) -> Self {
        Self {
            severity,
            message: DiagnosticsFormatter::format(&kind),
            code: kind.code(),
            suggestion: None,
            arg_index,
            help: None,
        }
    }

    pub fn error(message: impl Into<String>, arg_index: Option<usize>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            code: None,
            suggestion: None,
            arg_index,
            help: None,
        }
    }

    pub fn warning_kind(kind: DiagnosticKind, arg_index: Option<usize>) -> Self {
        Self::new(Severity::Warning, kind, arg_index)
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn is_warning(&self) -> bool {
        matches!(self.severity, Severity::Warning)
    }
}

pub mod codes {
    pub const UNKNOWN_OPTION: &str = "W0001";
    pub const UNEXPECTED_FLAG_VALUE: &str = "W0002";
    pub const MISSING_VALUE: &str = "W0003";
    pub const INVALID_SEQUENCE_COUNT: &str = "W0004";
    pub const MALFORMED_RANGE: &str = "W0005";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_constructor_fills_message_and_code() {
        let d = Diagnostic::warning_kind(DiagnosticKind::UnknownShortOption('x'), Some(2));
        assert!(d.is_warning());
        assert_eq!(d.code, Some(codes::UNKNOWN_OPTION));
        assert_eq!(d.message, "invalid option: -x");
        assert_eq!(d.arg_index, Some(2));
    }

    #[test]
    fn usage_errors_carry_help_but_no_code() {
        let d = Diagnostic::error("bad declaration", None).with_help("use long:kind");
        assert!(!d.is_warning());
        assert_eq!(d.code, None);
        assert_eq!(d.help.as_deref(), Some("use long:kind"));
    }
}
