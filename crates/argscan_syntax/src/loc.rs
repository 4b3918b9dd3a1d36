use crate::codes;

pub enum DiagnosticKind {
    // Lookup
    UnknownLongOption(String),
    UnknownShortOption(char),
    DidYouMean(String),

    // Value reads
    UnexpectedFlagValue { name: String, value: String },
    MissingValue(String),
    InvalidSequenceCount { name: String, count: String },
    MalformedRange { name: String, text: String },
}

impl DiagnosticKind {
    pub fn code(&self) -> Option<&'static str> {
        match self {
            DiagnosticKind::UnknownLongOption(_) | DiagnosticKind::UnknownShortOption(_) => {
                Some(codes::UNKNOWN_OPTION)
            }
            DiagnosticKind::UnexpectedFlagValue { .. } => Some(codes::UNEXPECTED_FLAG_VALUE),
            DiagnosticKind::MissingValue(_) => Some(codes::MISSING_VALUE),
            DiagnosticKind::InvalidSequenceCount { .. } => Some(codes::INVALID_SEQUENCE_COUNT),
            DiagnosticKind::MalformedRange { .. } => Some(codes::MALFORMED_RANGE),
            DiagnosticKind::DidYouMean(_) => None,
        }
    }
}

pub struct DiagnosticsFormatter;

impl DiagnosticsFormatter {
    fn format_en(kind: &DiagnosticKind) -> String {
        match kind {
            DiagnosticKind::UnknownLongOption(token) => format!("invalid option: {}", token),
            DiagnosticKind::UnknownShortOption(c) => format!("invalid option: -{}", c),
            DiagnosticKind::DidYouMean(s) => format!("did you mean '{}'?", s),

            DiagnosticKind::UnexpectedFlagValue { name, value } => {
                format!("unexpected argument '{}' for option --{}", value, name)
            }
            DiagnosticKind::MissingValue(name) => format!("missing value for option --{}", name),
            DiagnosticKind::InvalidSequenceCount { name, count } => format!(
                "invalid element count '{}' for option --{}; option left unset",
                count, name
            ),
            DiagnosticKind::MalformedRange { name, text } => format!(
                "malformed range '{}' for option --{}; expected start:step:end, start:end or an integer",
                text, name
            ),
        }
    }

    pub fn format(kind: &DiagnosticKind) -> String {
        Self::format_en(kind)
    }
}
