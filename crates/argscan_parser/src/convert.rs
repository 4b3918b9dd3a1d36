//! Lenient text-to-number conversion for scalar option values.
//!
//! Mirrors the C library conversions command-line tools traditionally used:
//! leading whitespace is skipped, the longest numeric prefix is converted and
//! the rest ignored, and text without a numeric prefix converts to zero.

pub(crate) fn lenient_int(text: &str) -> i64 {
    let s = text.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let mut acc: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let d = i64::from(b - b'0');
        acc = if negative {
            acc.saturating_mul(10).saturating_sub(d)
        } else {
            acc.saturating_mul(10).saturating_add(d)
        };
    }
    acc
}

pub(crate) fn lenient_float(text: &str) -> f64 {
    let s = text.trim_start();
    s[..float_prefix_len(s)].parse().unwrap_or(0.0)
}

/// Byte length of the longest prefix of `s` in decimal floating-point form:
/// sign, digits with an optional fraction, then an exponent only when it has
/// digits. `inf`, `infinity` and `nan` are accepted in any case.
fn float_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let rest = &s[i..];
    for word in ["infinity", "inf", "nan"] {
        if rest
            .get(..word.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(word))
        {
            return i + word.len();
        }
    }

    let digits = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };
    let int_digits = digits(i);
    i += int_digits;
    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        frac_digits = digits(i + 1);
        i += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(i + 1), Some(b'+' | b'-')));
        let exp_digits = digits(i + 1 + sign);
        if exp_digits > 0 {
            i += 1 + sign + exp_digits;
        }
    }
    i
}
