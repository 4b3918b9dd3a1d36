//! Token scanner.
//!
//! Walks the raw argument vector once, left to right, with an explicit cursor.
//! Option tokens are resolved against the registry and the matched descriptor
//! decides how many value tokens it takes. Everything else is routed to the
//! leftover output: plain arguments in collect mode, a re-parseable argument
//! vector in strip mode.
//!
//! Related: `Descriptor::read`, `Registry`, `argscan_syntax` (diagnostics).
use argscan_syntax::{
    Diagnostic, DiagnosticKind, DiagnosticsFormatter, find_best_match, render_diagnostic,
};
use log::{debug, trace};

use crate::{ReadOutcome, ReadStatus, Registry, ValueSource};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Gather plain arguments and warn about unknown options.
    #[default]
    Collect,
    /// Remove matched options and rebuild the rest for a later pass.
    Strip,
}

/// Parser configuration.
#[derive(Clone, Copy, Debug)]
pub struct ParseConfig {
    pub mode: ParseMode,
    /// Treat a lone `--` as the end of options. Off by default: `--` is then
    /// an unknown long option with an empty name.
    pub stop_at_double_dash: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            mode: ParseMode::Collect,
            stop_at_double_dash: false,
        }
    }
}

impl ParseConfig {
    pub fn with_mode(mode: ParseMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }
}

/// Tokens a parse did not consume.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Leftover {
    /// Non-option arguments in original order (collect mode).
    Plain(Vec<String>),
    /// Program name, unmatched options and plain arguments (strip mode).
    Stripped(Vec<String>),
}

/// Parse output: leftover tokens plus the warnings raised on the way.
#[derive(Clone, Debug)]
pub struct ParseResult {
    pub leftover: Leftover,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseResult {
    /// Plain arguments; empty after a strip pass.
    pub fn plain(&self) -> &[String] {
        match &self.leftover {
            Leftover::Plain(args) => args,
            Leftover::Stripped(_) => &[],
        }
    }

    pub fn stripped(&self) -> Option<&[String]> {
        match &self.leftover {
            Leftover::Stripped(args) => Some(args),
            Leftover::Plain(_) => None,
        }
    }

    pub fn into_args(self) -> Vec<String> {
        match self.leftover {
            Leftover::Plain(args) | Leftover::Stripped(args) => args,
        }
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_warning)
    }

    /// Writes every diagnostic to stderr.
    pub fn emit_warnings(&self) {
        for d in &self.diagnostics {
            eprintln!("{}", render_diagnostic(d));
        }
    }
}

/// Configured entry point.
#[derive(Clone, Copy, Debug, Default)]
pub struct Parser {
    config: ParseConfig,
}

impl Parser {
    pub fn new(config: ParseConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> ParseConfig {
        self.config
    }

    /// Matches `args` against `registry`. `args[0]` is the program name and is
    /// never matched.
    pub fn parse<S: AsRef<str>>(&self, args: &[S], registry: &mut Registry) -> ParseResult {
        Scan::new(self.config, args, registry).run()
    }
}

pub fn parse<S: AsRef<str>>(args: &[S], registry: &mut Registry, mode: ParseMode) -> ParseResult {
    Parser::new(ParseConfig::with_mode(mode)).parse(args, registry)
}

pub fn collect<S: AsRef<str>>(args: &[S], registry: &mut Registry) -> ParseResult {
    parse(args, registry, ParseMode::Collect)
}

pub fn strip<S: AsRef<str>>(args: &[S], registry: &mut Registry) -> ParseResult {
    parse(args, registry, ParseMode::Strip)
}

struct Scan<'a, 'r, S> {
    config: ParseConfig,
    args: &'a [S],
    registry: &'r mut Registry,
    i: usize,
    out: Vec<String>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a, 'r, S: AsRef<str>> Scan<'a, 'r, S> {
    fn new(config: ParseConfig, args: &'a [S], registry: &'r mut Registry) -> Self {
        Self {
            config,
            args,
            registry,
            i: 0,
            out: Vec::with_capacity(args.len()),
            diagnostics: Vec::new(),
        }
    }

    fn stripping(&self) -> bool {
        self.config.mode == ParseMode::Strip
    }

    fn run(mut self) -> ParseResult {
        let args = self.args;
        if let Some(program) = args.first() {
            if self.stripping() {
                self.out.push(program.as_ref().to_string());
            }
            self.i = 1;
        }

        while self.i < args.len() {
            let token = args[self.i].as_ref();
            if token == "--" && self.config.stop_at_double_dash {
                self.pass_rest();
                break;
            }
            if let Some(body) = token.strip_prefix("--") {
                trace!("argument {}: long option {:?}", self.i, token);
                self.scan_long(token, body);
            } else if token.len() > 1 && token.starts_with('-') {
                trace!("argument {}: short cluster {:?}", self.i, token);
                self.scan_short_cluster(&token[1..]);
            } else {
                trace!("argument {}: plain {:?}", self.i, token);
                self.out.push(token.to_string());
                self.i += 1;
            }
        }

        let leftover = if self.stripping() {
            Leftover::Stripped(self.out)
        } else {
            Leftover::Plain(self.out)
        };
        ParseResult {
            leftover,
            diagnostics: self.diagnostics,
        }
    }

    /// Everything after an end-of-options marker is left as is. A strip pass
    /// keeps the marker so the next pass stops at the same place.
    fn pass_rest(&mut self) {
        let args = self.args;
        if self.stripping() {
            self.out.push("--".to_string());
        }
        self.out
            .extend(args[self.i + 1..].iter().map(|a| a.as_ref().to_string()));
        self.i = args.len();
    }

    fn scan_long(&mut self, token: &'a str, body: &'a str) {
        let args = self.args;
        let at = self.i;
        let (name, inline) = match body.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (body, None),
        };

        let Some(slot) = self.registry.index_of_long(name) else {
            self.unknown_long(token, name);
            self.i = at + 1;
            return;
        };

        let descriptor = self.registry.descriptor_mut(slot);
        if !descriptor.expects_arg() {
            descriptor.mark_set();
            debug!("matched flag --{}", name);
            if let Some(value) = inline {
                self.warn(
                    DiagnosticKind::UnexpectedFlagValue {
                        name: name.to_string(),
                        value: value.to_string(),
                    },
                    at,
                );
            }
            self.i = at + 1;
            return;
        }

        let rest = &args[at + 1..];
        let source = match inline {
            Some(value) => ValueSource::with_inline(value, rest),
            None => ValueSource::new(rest),
        };
        let outcome = descriptor.read(source);
        self.report_read(slot, source, outcome, at);
        self.i = at + advance(source.has_inline(), outcome);
    }

    fn scan_short_cluster(&mut self, cluster: &'a str) {
        let args = self.args;
        let at = self.i;
        for (pos, c) in cluster.char_indices() {
            let Some(slot) = self.registry.index_of_short(c) else {
                if self.stripping() {
                    self.out.push(format!("-{c}"));
                } else {
                    self.warn(DiagnosticKind::UnknownShortOption(c), at);
                }
                continue;
            };

            let descriptor = self.registry.descriptor_mut(slot);
            if !descriptor.expects_arg() {
                descriptor.mark_set();
                debug!("matched flag -{} (--{})", c, descriptor.name());
                continue;
            }

            // A value-taking option ends the cluster; the rest of the token is
            // its value, or the value is the next token.
            let inline = &cluster[pos + c.len_utf8()..];
            let rest = &args[at + 1..];
            let source = if inline.is_empty() {
                ValueSource::new(rest)
            } else {
                ValueSource::with_inline(inline, rest)
            };
            let outcome = descriptor.read(source);
            self.report_read(slot, source, outcome, at);
            self.i = at + advance(source.has_inline(), outcome);
            return;
        }
        self.i = at + 1;
    }

    fn unknown_long(&mut self, token: &str, name: &str) {
        if self.stripping() {
            self.out.push(token.to_string());
            return;
        }
        let mut diag = Diagnostic::warning_kind(
            DiagnosticKind::UnknownLongOption(token.to_string()),
            Some(self.i),
        );
        if !name.is_empty() {
            if let Some(best) = find_best_match(name, self.registry.names()) {
                diag = diag.with_suggestion(DiagnosticsFormatter::format(
                    &DiagnosticKind::DidYouMean(format!("--{best}")),
                ));
            }
        }
        self.diagnostics.push(diag);
    }

    fn report_read(
        &mut self,
        slot: usize,
        source: ValueSource<'a, S>,
        outcome: ReadOutcome,
        at: usize,
    ) {
        let name = self.registry.descriptor(slot).name().to_string();
        let first = source.get(0).unwrap_or_default().to_string();
        let kind = match outcome.status {
            ReadStatus::Stored => {
                debug!(
                    "matched --{} ({} value token(s) consumed)",
                    name, outcome.consumed
                );
                return;
            }
            ReadStatus::MissingValue => DiagnosticKind::MissingValue(name),
            ReadStatus::InvalidCount => DiagnosticKind::InvalidSequenceCount { name, count: first },
            ReadStatus::MalformedRange => DiagnosticKind::MalformedRange { name, text: first },
        };
        self.warn(kind, at);
    }

    fn warn(&mut self, kind: DiagnosticKind, at: usize) {
        self.diagnostics
            .push(Diagnostic::warning_kind(kind, Some(at)));
    }
}

/// Tokens to move past after a value read. An inline value lives inside the
/// option token, so it is already counted in `consumed`.
fn advance(inline: bool, outcome: ReadOutcome) -> usize {
    if inline {
        outcome.consumed.max(1)
    } else {
        1 + outcome.consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Descriptor;

    fn registry() -> Registry {
        Registry::from_descriptors([
            Descriptor::flag("all").with_short('a'),
            Descriptor::flag("brief").with_short('b'),
            Descriptor::int("count", 0).with_short('c'),
        ])
        .unwrap()
    }

    #[test]
    fn advance_counts_inline_value_once() {
        let stored = |consumed| ReadOutcome {
            consumed,
            status: ReadStatus::Stored,
        };
        assert_eq!(advance(true, stored(1)), 1);
        assert_eq!(advance(true, stored(4)), 4);
        assert_eq!(advance(false, stored(1)), 2);
        assert_eq!(
            advance(
                false,
                ReadOutcome {
                    consumed: 0,
                    status: ReadStatus::MissingValue,
                }
            ),
            1
        );
    }

    #[test]
    fn empty_vector_yields_nothing() {
        let mut r = registry();
        let args: [&str; 0] = [];
        assert!(collect(&args, &mut r).plain().is_empty());
        assert_eq!(strip(&args, &mut r).stripped(), Some(&[][..]));
    }

    #[test]
    fn program_name_is_never_matched() {
        let mut r = registry();
        let res = collect(&["-a"], &mut r);
        assert!(!r.is_set("all"));
        assert!(res.plain().is_empty());
    }

    #[test]
    fn lone_dash_is_plain() {
        let mut r = registry();
        let res = collect(&["prog", "-", "x"], &mut r);
        assert_eq!(res.plain(), ["-", "x"]);
        assert!(res.diagnostics.is_empty());
    }

    #[test]
    fn double_dash_ends_options_when_enabled() {
        let stop = |mode| {
            Parser::new(ParseConfig {
                mode,
                stop_at_double_dash: true,
            })
        };
        let parser = stop(ParseMode::Collect);
        assert!(parser.config().stop_at_double_dash);

        let mut r = registry();
        let res = parser.parse(&["prog", "-a", "--", "-b", "--count=3"], &mut r);
        assert!(r.is_set("all"));
        assert!(!r.is_set("brief"));
        assert_eq!(res.plain(), ["-b", "--count=3"]);

        let mut r = registry();
        let res = stop(ParseMode::Strip).parse(&["prog", "-a", "--", "-b"], &mut r);
        assert_eq!(res.stripped(), Some(&["prog", "--", "-b"].map(String::from)[..]));
    }

    #[test]
    fn double_dash_is_an_unknown_option_by_default() {
        let parser = Parser::default();
        assert!(!parser.config().stop_at_double_dash);
        assert_eq!(parser.config().mode, ParseMode::Collect);

        let mut r = registry();
        let res = parser.parse(&["prog", "--", "-b"], &mut r);
        assert!(r.is_set("brief"));
        assert_eq!(res.diagnostics.len(), 1);
        assert_eq!(res.diagnostics[0].message, "invalid option: --");
        assert_eq!(res.diagnostics[0].suggestion, None);

        let mut r = registry();
        let res = strip(&["prog", "--", "-b"], &mut r);
        assert_eq!(res.stripped(), Some(&["prog", "--"].map(String::from)[..]));
    }

    #[test]
    fn unknown_long_gets_suggestion() {
        let mut r = registry();
        let res = collect(&["prog", "--cont", "4"], &mut r);
        assert_eq!(res.plain(), ["4"]);
        let d = &res.diagnostics[0];
        assert_eq!(d.arg_index, Some(1));
        assert_eq!(d.suggestion.as_deref(), Some("did you mean '--count'?"));
    }

    #[test]
    fn into_args_returns_leftover() {
        let mut r = registry();
        let res = strip(&["prog", "-ab", "file"], &mut r);
        assert!(!res.has_warnings());
        assert_eq!(res.into_args(), vec!["prog", "file"]);
    }
}
