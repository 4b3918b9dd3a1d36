use argscan_parser::{
    Descriptor, Diagnostic, ParseConfig, ParseMode, Parser, Registry, Severity, read_words,
    render_help, usage_line,
};

use crate::decl::parse_declaration;

pub(crate) struct CliArgs {
    pub json_out: bool,
    pub strip: bool,
    pub strict: bool,
    pub verbose: bool,
    pub help: bool,
    /// Registry the target arguments are matched against.
    pub target_registry: Registry,
    /// Target argument vector; its first element is the target program name.
    pub target: Vec<String>,
}

fn cli_registry() -> Registry {
    Registry::from_descriptors([
        Descriptor::flag("json")
            .with_short('j')
            .with_description("  {short}, --{name}                print the report as JSON"),
        Descriptor::flag("strip")
            .with_short('s')
            .with_description("  {short}, --{name}               strip matched options instead of collecting"),
        Descriptor::flag("strict")
            .with_description("      --{name}              exit with status 1 if the target parse warned"),
        Descriptor::flag("verbose")
            .with_short('v')
            .with_description("  {short}, --{name}             debug logging"),
        Descriptor::string("args-file")
            .with_short('f')
            .with_description("  {short}, --{name} PATH      append the words of PATH to the target"),
        Descriptor::strings("declare")
            .with_short('d')
            .with_description("  {short}, --{name} N DECL...   declare N target options (long[,c]:kind[=default])"),
        Descriptor::flag("help")
            .with_short('h')
            .with_description("  {short}, --{name}                show this help"),
    ])
    .expect("built-in options are valid")
}

pub(crate) fn usage() -> String {
    format!("{} [--] TARGET-ARGS...", usage_line("argscan", &cli_registry()))
}

pub(crate) fn options_help() -> String {
    format!(
        "Options:\n{}\n\nKinds: flag, int, float, string, ints, strings, range",
        render_help(&cli_registry())
    )
}

const DECLARATION_HELP: &str = "declarations look like long[,c]:kind[=default]";

/// Parses the tool's own arguments. Everything after `--` belongs to the
/// target. Problems come back as error diagnostics.
pub(crate) fn parse_args(argv: &[String]) -> Result<CliArgs, Vec<Diagnostic>> {
    let mut registry = cli_registry();
    let parser = Parser::new(ParseConfig {
        mode: ParseMode::Collect,
        stop_at_double_dash: true,
    });
    let parsed = parser.parse(argv, &mut registry);
    if parsed.has_warnings() {
        return Err(parsed
            .diagnostics
            .into_iter()
            .map(|mut d| {
                d.severity = Severity::Error;
                d
            })
            .collect());
    }

    let flag = |name: &str| registry.is_set(name);
    let help = flag("help");
    let json_out = flag("json");
    let strip = flag("strip");
    let strict = flag("strict");
    let verbose = flag("verbose");

    let mut target_registry = Registry::new();
    if let Some(decls) = registry.get("declare").and_then(|d| d.as_strs()) {
        for decl in decls {
            let descriptor = parse_declaration(decl)
                .map_err(|e| vec![Diagnostic::error(e, None).with_help(DECLARATION_HELP)])?;
            target_registry.add(descriptor).map_err(|e| {
                vec![Diagnostic::error(format!("Invalid declaration '{decl}': {e}"), None)]
            })?;
        }
    }

    let mut target = parsed.into_args();
    if let Some(path) = registry.get("args-file").and_then(|d| d.as_str()) {
        let words = read_words(path)
            .map_err(|e| vec![Diagnostic::error(format!("Read failed: {path}: {e}"), None)])?;
        target.extend(words);
    }

    if target.is_empty() && !help {
        return Err(vec![
            Diagnostic::error("Missing target arguments", None)
                .with_help("pass the target's argument vector after --, program name first"),
        ]);
    }

    Ok(CliArgs {
        json_out,
        strip,
        strict,
        verbose,
        help,
        target_registry,
        target,
    })
}
