//! argscan_syntax: diagnostics shared by the option parser and the CLI.
//!
//! Holds the warning model, its English message catalogue, text rendering,
//! and the edit-distance helpers behind "did you mean" suggestions.
mod diagnostic;
mod loc;
mod render;
mod util;

pub use diagnostic::{Diagnostic, Severity, codes};
pub use loc::{DiagnosticKind, DiagnosticsFormatter};
pub use render::{render_diagnostic, render_diagnostics};
pub use util::{find_best_match, levenshtein_distance};
