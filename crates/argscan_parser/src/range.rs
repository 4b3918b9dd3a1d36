//! Integer ranges written as `start:step:end`, `start:end` or a bare integer.

use std::sync::OnceLock;

use regex::Regex;

/// An inclusive integer range with a fallback default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntRange {
    start: i64,
    step: i64,
    end: i64,
    default: i64,
}

impl IntRange {
    /// The degenerate range `default:1:default`.
    pub fn new(default: i64) -> Self {
        Self {
            start: default,
            step: 1,
            end: default,
            default,
        }
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    pub fn default_value(&self) -> i64 {
        self.default
    }

    pub(crate) fn assign(&mut self, start: i64, step: i64, end: i64) {
        self.start = start;
        self.step = step;
        self.end = end;
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::new(self.default);
    }

    pub fn iter(&self) -> RangeIter {
        RangeIter {
            next: Some(self.start),
            step: self.step,
            end: self.end,
        }
    }
}

impl IntoIterator for &IntRange {
    type Item = i64;
    type IntoIter = RangeIter;

    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

/// Walks `start, start + step, ...` without passing `end`.
///
/// A zero step yields `start` once.
#[derive(Clone, Debug)]
pub struct RangeIter {
    next: Option<i64>,
    step: i64,
    end: i64,
}

impl Iterator for RangeIter {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let cur = self.next?;
        let in_bounds = match self.step {
            s if s > 0 => cur <= self.end,
            s if s < 0 => cur >= self.end,
            _ => true,
        };
        if !in_bounds {
            self.next = None;
            return None;
        }
        self.next = if self.step == 0 {
            None
        } else {
            cur.checked_add(self.step)
        };
        Some(cur)
    }
}

fn range_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\s*([+-]?\d+)(?::\s*([+-]?\d+)(?::\s*([+-]?\d+))?)?$")
            .expect("range pattern is valid")
    })
}

/// Parses the three accepted forms into `(start, step, end)`.
///
/// The whole text must match one form; anything else is `None`.
pub(crate) fn parse_range(text: &str) -> Option<(i64, i64, i64)> {
    let caps = range_pattern().captures(text)?;
    let first: i64 = caps.get(1)?.as_str().parse().ok()?;
    let second = caps.get(2).map(|m| m.as_str().parse::<i64>());
    let third = caps.get(3).map(|m| m.as_str().parse::<i64>());
    match (second, third) {
        (Some(step), Some(end)) => Some((first, step.ok()?, end.ok()?)),
        (Some(end), None) => Some((first, 1, end.ok()?)),
        _ => Some((first, 1, first)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_forms() {
        assert_eq!(parse_range("2:3:10"), Some((2, 3, 10)));
        assert_eq!(parse_range("2:10"), Some((2, 1, 10)));
        assert_eq!(parse_range("5"), Some((5, 1, 5)));
        assert_eq!(parse_range("-4:-1:-8"), Some((-4, -1, -8)));
    }

    #[test]
    fn rejects_partial_matches() {
        assert_eq!(parse_range("abc"), None);
        assert_eq!(parse_range("5abc"), None);
        assert_eq!(parse_range("1:2:3:4"), None);
        assert_eq!(parse_range("1:"), None);
        assert_eq!(parse_range(""), None);
        assert_eq!(parse_range("99999999999999999999"), None);
    }

    #[test]
    fn iterates_in_both_directions() {
        let mut r = IntRange::new(0);
        r.assign(2, 3, 10);
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![2, 5, 8]);
        r.assign(5, -2, 0);
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![5, 3, 1]);
        r.assign(7, 0, 100);
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![7]);
        r.assign(4, 1, 2);
        assert_eq!(r.iter().count(), 0);
    }

    #[test]
    fn reset_restores_default() {
        let mut r = IntRange::new(9);
        r.assign(1, 2, 3);
        assert_eq!(r.default_value(), 9);
        r.reset();
        assert_eq!(r, IntRange::new(9));
        assert_eq!(r.default_value(), 9);
        assert_eq!((r.start(), r.step(), r.end()), (9, 1, 9));
    }
}
