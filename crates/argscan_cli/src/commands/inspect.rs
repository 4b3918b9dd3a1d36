use argscan_parser::{Leftover, ParseMode, parse};
use log::{debug, info};
use serde_json::json;

use super::{descriptor_json, diagnostic_json};
use crate::args::CliArgs;

/// Parses the target arguments against the declared options and reports the
/// result. Returns the process exit code.
pub(crate) fn run(args: &CliArgs) -> i32 {
    let mode = if args.strip {
        ParseMode::Strip
    } else {
        ParseMode::Collect
    };
    let mut registry = args.target_registry.clone();
    debug!(
        "parsing {} target argument(s) against {} option(s) in {:?} mode",
        args.target.len(),
        registry.len(),
        mode
    );
    let result = parse(&args.target, &mut registry, mode);
    info!("{} diagnostic(s)", result.diagnostics.len());

    if args.json_out {
        let options: Vec<_> = registry.iter().map(descriptor_json).collect();
        let diagnostics: Vec<_> = result.diagnostics.iter().map(diagnostic_json).collect();
        let (key, leftover) = match &result.leftover {
            Leftover::Plain(v) => ("plain", v),
            Leftover::Stripped(v) => ("stripped", v),
        };
        let mut report = json!({
            "options": options,
            "diagnostics": diagnostics,
        });
        report[key] = json!(leftover);
        println!("{report}");
    } else {
        result.emit_warnings();
        for d in &registry {
            println!(
                "{} set={} value={}",
                d.name(),
                d.is_set(),
                d.current_value_text()
            );
        }
        match &result.leftover {
            Leftover::Plain(v) => println!("plain: {}", v.join(" ")),
            Leftover::Stripped(v) => println!("stripped: {}", v.join(" ")),
        }
    }

    if args.strict && result.has_warnings() {
        1
    } else {
        0
    }
}
