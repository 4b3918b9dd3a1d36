//! Declared options and their value readers.
//!
//! A `Descriptor` owns its stored value and `set` flag. The scanner finds the
//! descriptor for an option token and hands it a `ValueSource`; the descriptor
//! decides how many tokens it takes.

use crate::convert::{lenient_float, lenient_int};
use crate::range::{IntRange, parse_range};
use crate::source::ValueSource;

const DEFAULT_DESCRIPTION: &str = "--{name}: no description";

/// Typed value slot of a descriptor. The kind set is closed.
#[derive(Clone, Debug, PartialEq)]
pub enum OptionValue {
    Flag,
    Int(i64),
    Float(f64),
    Str(Option<String>),
    /// Count-prefixed list: `N v1 .. vN`.
    Ints(Vec<i64>),
    Strs(Vec<String>),
    Range(IntRange),
}

impl OptionValue {
    pub fn kind_name(&self) -> &'static str {
        match self {
            OptionValue::Flag => "flag",
            OptionValue::Int(_) => "int",
            OptionValue::Float(_) => "float",
            OptionValue::Str(_) => "string",
            OptionValue::Ints(_) => "ints",
            OptionValue::Strs(_) => "strings",
            OptionValue::Range(_) => "range",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadStatus {
    Stored,
    /// The argument vector ran out before a value was found.
    MissingValue,
    /// Sequence count was non-positive or larger than the tokens left.
    InvalidCount,
    /// Range text matched none of the accepted forms.
    MalformedRange,
}

/// What a value read did: tokens taken from the source and whether a value
/// was stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadOutcome {
    pub consumed: usize,
    pub status: ReadStatus,
}

impl ReadOutcome {
    fn stored(consumed: usize) -> Self {
        Self {
            consumed,
            status: ReadStatus::Stored,
        }
    }

    fn failed(consumed: usize, status: ReadStatus) -> Self {
        Self { consumed, status }
    }

    pub fn success(&self) -> bool {
        matches!(self.status, ReadStatus::Stored)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Descriptor {
    name: String,
    short: Option<char>,
    set: bool,
    description: String,
    value: OptionValue,
}

impl Descriptor {
    fn with_value(name: impl Into<String>, value: OptionValue) -> Self {
        Self {
            name: name.into(),
            short: None,
            set: false,
            description: DEFAULT_DESCRIPTION.to_string(),
            value,
        }
    }

    pub fn flag(name: impl Into<String>) -> Self {
        Self::with_value(name, OptionValue::Flag)
    }

    pub fn int(name: impl Into<String>, default: i64) -> Self {
        Self::with_value(name, OptionValue::Int(default))
    }

    pub fn float(name: impl Into<String>, default: f64) -> Self {
        Self::with_value(name, OptionValue::Float(default))
    }

    pub fn string(name: impl Into<String>) -> Self {
        Self::with_value(name, OptionValue::Str(None))
    }

    pub fn string_with_default(name: impl Into<String>, default: impl Into<String>) -> Self {
        Self::with_value(name, OptionValue::Str(Some(default.into())))
    }

    pub fn ints(name: impl Into<String>) -> Self {
        Self::with_value(name, OptionValue::Ints(Vec::new()))
    }

    pub fn strings(name: impl Into<String>) -> Self {
        Self::with_value(name, OptionValue::Strs(Vec::new()))
    }

    pub fn range(name: impl Into<String>, default: i64) -> Self {
        Self::with_value(name, OptionValue::Range(IntRange::new(default)))
    }

    pub fn with_short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    /// Sets the help template. `{name}`, `{short}` and `{value}` are
    /// substituted when rendering.
    pub fn with_description(mut self, template: impl Into<String>) -> Self {
        self.description = template.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn short(&self) -> Option<char> {
        self.short
    }

    pub fn is_set(&self) -> bool {
        self.set
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn value(&self) -> &OptionValue {
        &self.value
    }

    pub fn expects_arg(&self) -> bool {
        !matches!(self.value, OptionValue::Flag)
    }

    pub(crate) fn mark_set(&mut self) {
        self.set = true;
    }

    pub fn as_int(&self) -> Option<i64> {
        match self.value {
            OptionValue::Int(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self.value {
            OptionValue::Float(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            OptionValue::Str(v) => v.as_deref(),
            _ => None,
        }
    }

    pub fn as_ints(&self) -> Option<&[i64]> {
        match &self.value {
            OptionValue::Ints(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_strs(&self) -> Option<&[String]> {
        match &self.value {
            OptionValue::Strs(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_range(&self) -> Option<&IntRange> {
        match &self.value {
            OptionValue::Range(r) => Some(r),
            _ => None,
        }
    }

    /// Consumes this option's value tokens from `src`.
    ///
    /// Flags take nothing and are simply marked set. An empty source leaves
    /// every variant untouched and reports zero tokens consumed.
    pub fn read<S: AsRef<str>>(&mut self, src: ValueSource<'_, S>) -> ReadOutcome {
        let first = match (&self.value, src.get(0)) {
            (OptionValue::Flag, _) => {
                self.set = true;
                return ReadOutcome::stored(0);
            }
            (_, None) => return ReadOutcome::failed(0, ReadStatus::MissingValue),
            (_, Some(first)) => first,
        };
        match &mut self.value {
            OptionValue::Flag => {}
            OptionValue::Int(v) => *v = lenient_int(first),
            OptionValue::Float(v) => *v = lenient_float(first),
            OptionValue::Str(v) => *v = Some(first.to_string()),
            OptionValue::Ints(values) => {
                let Some(n) = sequence_len(first, src.len()) else {
                    return ReadOutcome::failed(1, ReadStatus::InvalidCount);
                };
                *values = src.iter().skip(1).take(n).map(lenient_int).collect();
                self.set = true;
                return ReadOutcome::stored(1 + n);
            }
            OptionValue::Strs(values) => {
                let Some(n) = sequence_len(first, src.len()) else {
                    return ReadOutcome::failed(1, ReadStatus::InvalidCount);
                };
                *values = src.iter().skip(1).take(n).map(str::to_string).collect();
                self.set = true;
                return ReadOutcome::stored(1 + n);
            }
            OptionValue::Range(range) => match parse_range(first) {
                Some((start, step, end)) => range.assign(start, step, end),
                None => {
                    range.reset();
                    self.set = false;
                    return ReadOutcome::failed(1, ReadStatus::MalformedRange);
                }
            },
        }
        self.set = true;
        ReadOutcome::stored(1)
    }

    /// Current value as display text; empty for flags and unset strings.
    pub fn current_value_text(&self) -> String {
        match &self.value {
            OptionValue::Flag => String::new(),
            OptionValue::Int(v) => itoa::Buffer::new().format(*v).to_string(),
            OptionValue::Float(v) => ryu::Buffer::new().format(*v).to_string(),
            OptionValue::Str(v) => v.clone().unwrap_or_default(),
            OptionValue::Ints(values) => {
                let mut buf = itoa::Buffer::new();
                let mut out = String::new();
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        out.push(' ');
                    }
                    out.push_str(buf.format(*v));
                }
                out
            }
            OptionValue::Strs(values) => values.join(" "),
            OptionValue::Range(r) => {
                let mut buf = itoa::Buffer::new();
                let mut out = String::from(buf.format(r.start()));
                out.push(':');
                out.push_str(buf.format(r.step()));
                out.push(':');
                out.push_str(buf.format(r.end()));
                out
            }
        }
    }

    /// The description template with its placeholders filled in.
    pub fn render_description(&self) -> String {
        let short = self.short.map(|c| format!("-{c}")).unwrap_or_default();
        self.description
            .replace("{name}", &self.name)
            .replace("{short}", &short)
            .replace("{value}", &self.current_value_text())
    }
}

/// Element count for a sequence read, if `count_text` names a positive count
/// that fits in the `available` tokens (count token included).
fn sequence_len(count_text: &str, available: usize) -> Option<usize> {
    let n = usize::try_from(lenient_int(count_text)).ok()?;
    (n > 0 && n < available).then_some(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn src<'a>(tokens: &'a [&'a str]) -> ValueSource<'a, &'a str> {
        ValueSource::new(tokens)
    }

    #[test]
    fn scalar_reads_take_one_token() {
        let mut d = Descriptor::int("count", 3);
        let out = d.read(src(&["17", "rest"]));
        assert_eq!(out, ReadOutcome::stored(1));
        assert_eq!(d.as_int(), Some(17));
        assert!(d.is_set());

        let mut f = Descriptor::float("scale", 1.0);
        f.read(src(&["0.5"]));
        assert_eq!(f.as_float(), Some(0.5));

        let mut s = Descriptor::string("out");
        assert_eq!(s.as_str(), None);
        s.read(src(&["a.txt"]));
        assert_eq!(s.as_str(), Some("a.txt"));
    }

    #[test]
    fn non_numeric_scalar_falls_back_to_zero() {
        let mut d = Descriptor::int("count", 3);
        let out = d.read(src(&["many"]));
        assert!(out.success());
        assert_eq!(d.as_int(), Some(0));
    }

    #[test]
    fn missing_value_leaves_descriptor_unset() {
        let mut d = Descriptor::string_with_default("out", "x");
        let out = d.read(src(&[]));
        assert_eq!(out.consumed, 0);
        assert_eq!(out.status, ReadStatus::MissingValue);
        assert!(!d.is_set());
        assert_eq!(d.as_str(), Some("x"));
    }

    #[test]
    fn int_sequence_takes_count_plus_elements() {
        let mut d = Descriptor::ints("ids");
        let out = d.read(src(&["3", "10", "20", "30", "extra"]));
        assert_eq!(out, ReadOutcome::stored(4));
        assert_eq!(d.as_ints(), Some(&[10, 20, 30][..]));
        assert!(d.is_set());
    }

    #[test]
    fn sequence_with_bad_count_consumes_only_the_count() {
        let mut d = Descriptor::strings("names");
        assert_eq!(
            d.read(src(&["0", "a"])),
            ReadOutcome::failed(1, ReadStatus::InvalidCount)
        );
        assert_eq!(
            d.read(src(&["-2", "a", "b"])),
            ReadOutcome::failed(1, ReadStatus::InvalidCount)
        );
        assert_eq!(
            d.read(src(&["3", "a", "b"])),
            ReadOutcome::failed(1, ReadStatus::InvalidCount)
        );
        assert!(!d.is_set());
        assert_eq!(d.as_strs(), Some(&[][..]));
    }

    #[test]
    fn sequence_reads_from_inline_count() {
        let mut d = Descriptor::strings("names");
        let rest = ["a", "b"];
        let out = d.read(ValueSource::with_inline("2", &rest));
        assert_eq!(out, ReadOutcome::stored(3));
        assert_eq!(d.current_value_text(), "a b");
    }

    #[test]
    fn range_forms_and_fallback() {
        let mut d = Descriptor::range("frames", 4);
        d.read(src(&["2:3:10"]));
        assert_eq!(d.current_value_text(), "2:3:10");
        d.read(src(&["2:10"]));
        assert_eq!(d.current_value_text(), "2:1:10");
        d.read(src(&["5"]));
        assert_eq!(d.current_value_text(), "5:1:5");
        assert!(d.is_set());

        let out = d.read(src(&["abc"]));
        assert_eq!(out, ReadOutcome::failed(1, ReadStatus::MalformedRange));
        assert!(!d.is_set());
        assert_eq!(d.as_range(), Some(&IntRange::new(4)));
    }

    #[test]
    fn flags_consume_nothing() {
        let mut d = Descriptor::flag("verbose");
        assert!(!d.expects_arg());
        assert_eq!(d.read(src(&["x"])), ReadOutcome::stored(0));
        assert!(d.is_set());
        assert_eq!(d.current_value_text(), "");
    }

    #[test]
    fn description_placeholders() {
        let d = Descriptor::int("count", 7)
            .with_short('c')
            .with_description("{short}, --{name} <n>  repeat count [{value}]");
        assert_eq!(d.render_description(), "-c, --count <n>  repeat count [7]");
        assert_eq!(
            Descriptor::flag("quiet").render_description(),
            "--quiet: no description"
        );
    }

    #[test]
    fn float_text_is_shortest_round_trip() {
        let d = Descriptor::float("scale", 0.1);
        assert_eq!(d.current_value_text(), "0.1");
    }
}
