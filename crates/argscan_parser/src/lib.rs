//! argscan_parser: typed command-line option matching.
//!
//! Callers declare `Descriptor`s in a `Registry`, then run `collect` (plain
//! arguments gathered, unknown options warned) or `strip` (matched options
//! removed, everything else rebuilt into a vector for a later pass).
//! Entry points: `Parser::new(config).parse(args, &mut registry)`, `parse`,
//! `collect`, `strip`.
mod convert;
mod descriptor;
mod help;
mod range;
mod registry;
mod scanner;
mod source;
mod words;

pub use argscan_syntax::{Diagnostic, Severity, codes};
pub use descriptor::{Descriptor, OptionValue, ReadOutcome, ReadStatus};
pub use help::{render_help, usage_line};
pub use range::{IntRange, RangeIter};
pub use registry::{Registry, RegistryError};
pub use scanner::{Leftover, ParseConfig, ParseMode, ParseResult, Parser, collect, parse, strip};
pub use source::ValueSource;
pub use words::read_words;
