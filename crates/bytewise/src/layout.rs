//! Trimming, padding, wrapping and other whole-string layout.

use alloc::vec::Vec;

use bstr::{BStr, BString, ByteSlice};

use crate::charset::CharSet;

/// Bytes stripped by the trim functions when no character list is given.
const DEFAULT_TRIM: &[u8] = b" \t\n\r\0\x0B";

fn trim_set(chars: Option<&[u8]>) -> CharSet {
    chars.map_or_else(|| CharSet::of(DEFAULT_TRIM), CharSet::parse)
}

fn strip<'a>(s: &'a [u8], set: &CharSet, leading: bool, trailing: bool) -> &'a BStr {
    let mut start = 0;
    let mut end = s.len();
    if leading {
        while start < end && set.contains(s[start]) {
            start += 1;
        }
    }
    if trailing {
        while end > start && set.contains(s[end - 1]) {
            end -= 1;
        }
    }
    s[start..end].as_bstr()
}

/// Strip leading and trailing bytes in `chars` (a list in
/// [`CharSet::parse`] syntax). `None` strips spaces, tabs, newlines, carriage
/// returns, NULs and vertical tabs.
///
/// ```rust
/// use bytewise::trim;
///
/// assert_eq!(trim(b"  abc\n", None), "abc");
/// assert_eq!(trim(b"abcxyzcba", Some(b"a..c")), "xyz");
/// ```
#[must_use]
pub fn trim<'a>(s: &'a [u8], chars: Option<&[u8]>) -> &'a BStr {
    strip(s, &trim_set(chars), true, true)
}

/// Like [`trim`] but strips leading bytes only.
#[must_use]
pub fn ltrim<'a>(s: &'a [u8], chars: Option<&[u8]>) -> &'a BStr {
    strip(s, &trim_set(chars), true, false)
}

/// Like [`trim`] but strips trailing bytes only.
#[must_use]
pub fn rtrim<'a>(s: &'a [u8], chars: Option<&[u8]>) -> &'a BStr {
    strip(s, &trim_set(chars), false, true)
}

fn padding(out: &mut Vec<u8>, with: &[u8], n: usize) {
    out.extend(with.iter().cycle().take(n));
}

fn pad_sides(s: &[u8], len: usize, with: &[u8], left_share: impl FnOnce(usize) -> usize) -> BString {
    if with.is_empty() || len <= s.len() {
        return s.into();
    }
    let total = len - s.len();
    let left = left_share(total);
    let mut out = Vec::with_capacity(len);
    padding(&mut out, with, left);
    out.extend_from_slice(s);
    padding(&mut out, with, total - left);
    out.into()
}

/// Center `s` in a field of `len` bytes by repeating `with` on both sides.
/// The left side gets the smaller half of an odd amount of padding.
///
/// Strings already `len` bytes or longer, and an empty `with`, leave `s`
/// unchanged.
///
/// ```rust
/// use bytewise::pad;
///
/// assert_eq!(pad(b"x", 5, b" "), "  x  ");
/// assert_eq!(pad(b"x", 6, b"ab"), "abxaba");
/// ```
#[must_use]
pub fn pad(s: &[u8], len: usize, with: &[u8]) -> BString {
    pad_sides(s, len, with, |total| total / 2)
}

/// Like [`pad`] but pads on the left only.
#[must_use]
pub fn lpad(s: &[u8], len: usize, with: &[u8]) -> BString {
    pad_sides(s, len, with, |total| total)
}

/// Like [`pad`] but pads on the right only.
#[must_use]
pub fn rpad(s: &[u8], len: usize, with: &[u8]) -> BString {
    pad_sides(s, len, with, |_| 0)
}

/// Break `s` into lines of at most `cols` bytes joined by `sep`, cutting
/// through words that are too long to fit.
///
/// Breaks already present in `s` start a new line. An empty `sep`, or `cols`
/// of zero, leaves `s` unchanged.
///
/// ```rust
/// use bytewise::wrap;
///
/// assert_eq!(wrap(b"abcdef", 2, b"\n"), "ab\ncd\nef");
/// assert_eq!(wrap(b"abc defghij", 4, b"\n"), "abc\ndefg\nhij");
/// ```
#[must_use]
pub fn wrap(s: &[u8], cols: usize, sep: &[u8]) -> BString {
    if cols == 0 {
        return s.into();
    }
    wrap_lines(s, cols, sep, true)
}

/// Break `s` into lines at spaces so that lines are at most `width` bytes,
/// joined by `sep`. Words longer than `width` are kept whole on their own
/// line.
///
/// ```rust
/// use bytewise::word_wrap;
///
/// assert_eq!(word_wrap(b"abc def ghi", 8, b"\n"), "abc def\nghi");
/// ```
#[must_use]
pub fn word_wrap(s: &[u8], width: usize, sep: &[u8]) -> BString {
    wrap_lines(s, width, sep, false)
}

fn wrap_lines(s: &[u8], width: usize, sep: &[u8], cut: bool) -> BString {
    if s.is_empty() || sep.is_empty() {
        return s.into();
    }

    let mut out = Vec::with_capacity(s.len() + s.len() / width.max(1) * sep.len());
    let (mut line_start, mut last_space) = (0, 0);
    let mut i = 0;
    while i < s.len() {
        if i + sep.len() < s.len() && s[i..].starts_with(sep) {
            // An existing break ends the line here.
            out.extend_from_slice(&s[line_start..i + sep.len()]);
            i += sep.len();
            line_start = i;
            last_space = i;
            continue;
        }
        if s[i] == b' ' {
            if i - line_start >= width {
                out.extend_from_slice(&s[line_start..i]);
                out.extend_from_slice(sep);
                line_start = i + 1;
            }
            last_space = i;
        } else if i - line_start >= width && cut && line_start >= last_space {
            out.extend_from_slice(&s[line_start..i]);
            out.extend_from_slice(sep);
            line_start = i;
            last_space = i;
        } else if i - line_start >= width && line_start < last_space {
            out.extend_from_slice(&s[line_start..last_space]);
            out.extend_from_slice(sep);
            line_start = last_space + 1;
            last_space = line_start;
        }
        i += 1;
    }
    if line_start < s.len() {
        out.extend_from_slice(&s[line_start..]);
    }
    out.into()
}

/// `s` repeated `n` times.
#[must_use]
pub fn repeat(s: &[u8], n: usize) -> BString {
    s.repeat(n).into()
}

/// The bytes of `s` in reverse order.
#[must_use]
pub fn reverse(s: &[u8]) -> BString {
    s.iter().rev().copied().collect::<Vec<u8>>().into()
}
