//! Parsing and formatting numbers in their textual forms.

use crate::{charset::WHITESPACE, error::Error};

#[cfg(feature = "std")]
use bstr::BString;

/// Parse a leading integer from `s`, ignoring anything after it.
///
/// Leading whitespace and a sign are accepted. With `base` set to `None` the
/// base is taken from a prefix: `0x` for hexadecimal, `0b` for binary, `0o`
/// or a bare leading `0` for octal, and decimal otherwise. An explicit base
/// of 16, 8 or 2 also accepts its prefix. Values out of range saturate, and
/// input without digits (or a base outside `2..=36`) yields 0.
///
/// ```rust
/// use bytewise::parse_int;
///
/// assert_eq!(parse_int(b"  -42abc", None), -42);
/// assert_eq!(parse_int(b"0x1A", None), 26);
/// assert_eq!(parse_int(b"012", None), 10);
/// assert_eq!(parse_int(b"012", Some(10)), 12);
/// assert_eq!(parse_int(b"ff", Some(16)), 255);
/// assert_eq!(parse_int(b"99999999999999999999", None), i64::MAX);
/// ```
#[must_use]
pub fn parse_int(s: &[u8], base: Option<u32>) -> i64 {
    if base.is_some_and(|b| !(2..=36).contains(&b)) {
        tracing::debug!(?base, "integer base out of range");
        return 0;
    }

    let mut s = &s[s.iter().take_while(|b| WHITESPACE.contains(b)).count()..];
    let negative = s.first() == Some(&b'-');
    if matches!(s.first(), Some(b'-' | b'+')) {
        s = &s[1..];
    }

    let (digits, radix) = match base {
        None => match prefixed(s) {
            Some(found) => found,
            None if s.first() == Some(&b'0') => (s, 8),
            None => (s, 10),
        },
        Some(radix @ (2 | 8 | 16)) => prefixed(s)
            .filter(|&(_, r)| r == radix)
            .unwrap_or((s, radix)),
        Some(radix) => (s, radix),
    };

    let mut value: i64 = 0;
    for &d in digits {
        let Some(d) = char::from(d).to_digit(radix) else { break };
        let next = value
            .checked_mul(i64::from(radix))
            .and_then(|v| if negative { v.checked_sub(d.into()) } else { v.checked_add(d.into()) });
        match next {
            Some(v) => value = v,
            None => return if negative { i64::MIN } else { i64::MAX },
        }
    }
    value
}

/// Split off a `0x`, `0b` or `0o` prefix when a digit of that base follows.
fn prefixed(s: &[u8]) -> Option<(&[u8], u32)> {
    let radix = match s {
        [b'0', b'x' | b'X', ..] => 16,
        [b'0', b'b' | b'B', ..] => 2,
        [b'0', b'o' | b'O', ..] => 8,
        _ => return None,
    };
    let rest = &s[2..];
    rest.first()
        .is_some_and(|&d| char::from(d).is_digit(radix))
        .then_some((rest, radix))
}

/// Parse `s` as a decimal real number.
///
/// Accepts optional surrounding whitespace, a sign, digits with an optional
/// fractional part (either side of the point may be empty, not both) and an
/// optional exponent.
///
/// # Errors
///
/// [`Error::InvalidNumber`] for anything else, including hexadecimal
/// notation, `inf` and `nan`.
///
/// ```rust
/// use bytewise::{Error, parse_real};
///
/// assert_eq!(parse_real(b" 1.5e3 "), Ok(1500.0));
/// assert_eq!(parse_real(b".5"), Ok(0.5));
/// assert_eq!(parse_real(b"1.5x"), Err(Error::InvalidNumber));
/// ```
pub fn parse_real(s: &[u8]) -> Result<f64, Error> {
    let start = s.iter().take_while(|b| WHITESPACE.contains(b)).count();
    let end = s.len() - s[start..].iter().rev().take_while(|b| WHITESPACE.contains(b)).count();
    let body = &s[start..end];
    if !is_decimal_real(body) {
        tracing::debug!(input = ?bstr::BStr::new(s), "rejected real number");
        return Err(Error::InvalidNumber);
    }
    core::str::from_utf8(body)
        .ok()
        .and_then(|text| text.parse().ok())
        .ok_or(Error::InvalidNumber)
}

fn is_decimal_real(s: &[u8]) -> bool {
    let digits = |s: &[u8]| s.iter().take_while(|b| b.is_ascii_digit()).count();

    let mut i = usize::from(matches!(s.first(), Some(b'+' | b'-')));
    let whole = digits(&s[i..]);
    i += whole;
    let mut fraction = 0;
    if s.get(i) == Some(&b'.') {
        i += 1;
        fraction = digits(&s[i..]);
        i += fraction;
    }
    if whole + fraction == 0 {
        return false;
    }
    if matches!(s.get(i), Some(b'e' | b'E')) {
        i += 1;
        i += usize::from(matches!(s.get(i), Some(b'+' | b'-')));
        let exponent = digits(&s[i..]);
        if exponent == 0 {
            return false;
        }
        i += exponent;
    }
    i == s.len()
}

/// The most decimals [`format_number`] writes; larger requests are capped.
#[cfg(feature = "std")]
pub const MAX_DECIMALS: usize = 500;

/// How [`format_number`] lays out a number.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat<'a> {
    /// Digits after the decimal point, at most [`MAX_DECIMALS`]. The value is
    /// rounded half away from zero to this many places.
    ///
    /// # Default
    ///
    /// `0`
    pub decimals: usize,
    /// Written between the whole and fractional parts when `decimals` is
    /// non-zero.
    ///
    /// # Default
    ///
    /// `.`
    pub decimal_point: &'a [u8],
    /// Written between groups of three whole digits.
    ///
    /// # Default
    ///
    /// `,`
    pub thousands_sep: &'a [u8],
}

#[cfg(feature = "std")]
impl Default for NumberFormat<'_> {
    fn default() -> Self {
        Self {
            decimals: 0,
            decimal_point: b".",
            thousands_sep: b",",
        }
    }
}

/// Format `x` with grouped thousands and a fixed number of decimals.
///
/// ```rust
/// use bytewise::{NumberFormat, format_number};
///
/// let euro = NumberFormat { decimals: 2, decimal_point: b",", thousands_sep: b"." };
/// assert_eq!(format_number(1234567.891, &euro), "1.234.567,89");
/// assert_eq!(format_number(-0.4, &NumberFormat::default()), "0");
/// ```
#[cfg(feature = "std")]
#[must_use]
pub fn format_number(x: f64, format: &NumberFormat<'_>) -> BString {
    use std::{format, vec::Vec};

    let decimals = format.decimals.min(MAX_DECIMALS);
    let rounded = round_half_up(x, decimals);
    if !rounded.is_finite() {
        return format!("{rounded}").into();
    }
    let text = format!("{:.*}", decimals, rounded.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut out = Vec::with_capacity(text.len() * 2);
    if rounded < 0.0 {
        out.push(b'-');
    }
    for (i, digit) in whole.bytes().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.extend_from_slice(format.thousands_sep);
        }
        out.push(digit);
    }
    if decimals > 0 {
        out.extend_from_slice(format.decimal_point);
        out.extend_from_slice(fraction.as_bytes());
    }
    out.into()
}

/// Round half away from zero, first snapping to 15 significant digits so
/// that `1.005` rounds to `1.01` as written rather than as stored.
#[cfg(feature = "std")]
fn round_half_up(x: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
    let scaled = x * factor;
    if !scaled.is_finite() {
        return x;
    }
    let snapped: f64 = std::format!("{scaled:.14e}").parse().unwrap_or(scaled);
    snapped.round() / factor
}
