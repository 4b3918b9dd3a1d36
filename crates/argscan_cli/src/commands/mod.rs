use argscan_parser::{Descriptor, Severity};
use argscan_syntax::Diagnostic;
use serde_json::{Value, json};

pub(crate) mod inspect;

pub(crate) fn diagnostic_json(d: &Diagnostic) -> Value {
    json!({
        "severity": match d.severity { Severity::Error => "error", Severity::Warning => "warning" },
        "code": d.code,
        "message": d.message,
        "arg_index": d.arg_index,
        "suggestion": d.suggestion,
    })
}

pub(crate) fn descriptor_json(d: &Descriptor) -> Value {
    json!({
        "name": d.name(),
        "short": d.short().map(String::from),
        "kind": d.value().kind_name(),
        "set": d.is_set(),
        "value": d.current_value_text(),
    })
}
