use crate::Diagnostic;

pub fn render_diagnostic(diag: &Diagnostic) -> String {
    let code_str = diag.code.map(|c| format!(" [{c}]")).unwrap_or_default();
    let mut out = match diag.arg_index {
        Some(idx) => format!("{:?}{}: argument {}: {}", diag.severity, code_str, idx, diag.message),
        None => format!("{:?}{}: {}", diag.severity, code_str, diag.message),
    };
    if let Some(s) = &diag.suggestion {
        out.push('\n');
        out.push_str("  = suggestion: ");
        out.push_str(s);
    }
    if let Some(h) = &diag.help {
        out.push('\n');
        out.push_str("  = help: ");
        out.push_str(h);
    }
    out
}

pub fn render_diagnostics(diagnostics: &[Diagnostic]) -> String {
    let mut out = String::new();
    for (idx, d) in diagnostics.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        out.push_str(&render_diagnostic(d));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DiagnosticKind;

    #[test]
    fn renders_index_code_and_suggestion() {
        let d = Diagnostic::warning_kind(
            DiagnosticKind::UnknownLongOption("--colour".into()),
            Some(3),
        )
        .with_suggestion("did you mean '--color'?");
        assert_eq!(
            render_diagnostic(&d),
            "Warning [W0001]: argument 3: invalid option: --colour\n  = suggestion: did you mean '--color'?"
        );
    }

    #[test]
    fn renders_without_index() {
        let d = Diagnostic::error("no declarations", None);
        assert_eq!(render_diagnostic(&d), "Error: no declarations");
    }

    #[test]
    fn joins_multiple_with_newlines() {
        let a = Diagnostic::warning_kind(DiagnosticKind::MissingValue("out".into()), Some(2));
        let b = Diagnostic::error("no target", None).with_help("pass one after --");
        assert_eq!(
            render_diagnostics(&[a, b]),
            "Warning [W0003]: argument 2: missing value for option --out\nError: no target\n  = help: pass one after --"
        );
    }
}
