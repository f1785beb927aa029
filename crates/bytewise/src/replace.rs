//! Search-and-replace.

use alloc::vec::Vec;
use core::cmp::Reverse;

use bstr::BString;

use crate::search::match_positions;

/// Replace every non-overlapping occurrence of `needle` with `new`.
///
/// An empty needle matches around every byte, so the replacement is
/// interleaved with the input:
///
/// ```rust
/// use bytewise::replace;
///
/// assert_eq!(replace(b"abcxabc", b"x", b"y"), "abcyabc");
/// assert_eq!(replace(b"abc", b"", b"x"), "xaxbxcx");
/// ```
#[must_use]
pub fn replace(s: &[u8], needle: &[u8], new: &[u8]) -> BString {
    replace_count(s, needle, new).0
}

/// Like [`replace`] but ASCII case-insensitive. The replacement is inserted
/// verbatim.
#[must_use]
pub fn ireplace(s: &[u8], needle: &[u8], new: &[u8]) -> BString {
    ireplace_count(s, needle, new).0
}

/// Like [`replace`], also returning how many replacements were made.
#[must_use]
pub fn replace_count(s: &[u8], needle: &[u8], new: &[u8]) -> (BString, usize) {
    if needle.is_empty() {
        return interleave(s, new);
    }
    splice_at(s, &match_positions(s, needle), needle.len(), new)
}

/// Like [`ireplace`], also returning how many replacements were made.
#[must_use]
pub fn ireplace_count(s: &[u8], needle: &[u8], new: &[u8]) -> (BString, usize) {
    if needle.is_empty() {
        return interleave(s, new);
    }
    let positions = match_positions(&s.to_ascii_lowercase(), &needle.to_ascii_lowercase());
    splice_at(s, &positions, needle.len(), new)
}

fn interleave(s: &[u8], new: &[u8]) -> (BString, usize) {
    let mut out = Vec::with_capacity(s.len() + (s.len() + 1) * new.len());
    out.extend_from_slice(new);
    for &b in s {
        out.push(b);
        out.extend_from_slice(new);
    }
    (out.into(), s.len() + 1)
}

fn splice_at(s: &[u8], positions: &[usize], width: usize, new: &[u8]) -> (BString, usize) {
    let mut out = Vec::with_capacity(s.len());
    let mut last = 0;
    for &at in positions {
        out.extend_from_slice(&s[last..at]);
        out.extend_from_slice(new);
        last = at + width;
    }
    out.extend_from_slice(&s[last..]);
    (out.into(), positions.len())
}

/// Replace several needles at once.
///
/// At each position the longest matching key wins. Replaced text is never
/// searched again, so a replacement may contain keys. Empty keys are ignored.
///
/// ```rust
/// use bytewise::replace_multiple;
///
/// let pairs: [(&[u8], &[u8]); 2] = [(b":one", b":one :two"), (b":two", b"b")];
/// assert_eq!(replace_multiple(b":one :two", &pairs), ":one :two b");
/// ```
#[must_use]
pub fn replace_multiple(s: &[u8], pairs: &[(&[u8], &[u8])]) -> BString {
    let mut keys: Vec<&(&[u8], &[u8])> = pairs.iter().filter(|(key, _)| !key.is_empty()).collect();
    if keys.is_empty() {
        return s.into();
    }
    keys.sort_by_key(|(key, _)| Reverse(key.len()));

    let mut out = Vec::with_capacity(s.len());
    let mut i = 0;
    'outer: while i < s.len() {
        for (key, new) in &keys {
            if s[i..].starts_with(key) {
                out.extend_from_slice(new);
                i += key.len();
                continue 'outer;
            }
        }
        out.push(s[i]);
        i += 1;
    }
    out.into()
}

/// Map each byte of `from` to the byte at the same index in `to`. Only the
/// first `min(from.len(), to.len())` pairs are used; a byte listed twice maps
/// as its last listing says.
///
/// ```rust
/// use bytewise::translate;
///
/// assert_eq!(translate(b"abcba", b"abc", b"123"), "12321");
/// ```
#[must_use]
pub fn translate(s: &[u8], from: &[u8], to: &[u8]) -> BString {
    let mut table: [u8; 256] = core::array::from_fn(|i| u8::try_from(i).unwrap_or_default());
    for (&f, &t) in from.iter().zip(to) {
        table[usize::from(f)] = t;
    }
    s.iter()
        .map(|&b| table[usize::from(b)])
        .collect::<Vec<u8>>()
        .into()
}
