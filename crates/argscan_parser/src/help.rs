//! Help text built from descriptor templates.

use crate::{Descriptor, OptionValue, Registry};

/// Every descriptor's rendered description, one per line, in declaration
/// order.
pub fn render_help(registry: &Registry) -> String {
    registry
        .iter()
        .map(Descriptor::render_description)
        .collect::<Vec<_>>()
        .join("\n")
}

/// One-line synopsis such as `Usage: prog [-v|--verbose] [--ids <n> <int>...]`.
pub fn usage_line(program: &str, registry: &Registry) -> String {
    let mut out = format!("Usage: {program}");
    for d in registry {
        out.push_str(" [");
        if let Some(c) = d.short() {
            out.push('-');
            out.push(c);
            out.push('|');
        }
        out.push_str("--");
        out.push_str(d.name());
        match d.value() {
            OptionValue::Flag => {}
            OptionValue::Ints(_) => out.push_str(" <n> <int>..."),
            OptionValue::Strs(_) => out.push_str(" <n> <string>..."),
            OptionValue::Range(_) => out.push_str(" <start:step:end>"),
            other => {
                out.push_str(" <");
                out.push_str(other.kind_name());
                out.push('>');
            }
        }
        out.push(']');
    }
    out
}
