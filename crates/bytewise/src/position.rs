//! Extraction and splicing by position.

use alloc::vec::Vec;

use bstr::{BStr, BString, ByteSlice};

use crate::range::{Bound, resolve};

fn length_bound(length: Option<isize>) -> Bound {
    length.map_or(Bound::ToEnd, Bound::Len)
}

fn end_bound(end: Option<isize>) -> Bound {
    end.map_or(Bound::ToEnd, Bound::End)
}

/// Get the part of `s` starting at `offset` and spanning `length` bytes.
///
/// A negative offset counts from the end. `None` runs to the end of the
/// string; a negative length selects nothing. An offset at or past the end
/// yields an empty string.
///
/// ```rust
/// use bytewise::substring;
///
/// assert_eq!(substring(b"abcdef", 2, Some(3)), "cde");
/// assert_eq!(substring(b"abcdef", -2, None), "ef");
/// assert_eq!(substring(b"abcdef", -7, Some(3)), "ab");
/// ```
#[must_use]
pub fn substring(s: &[u8], offset: isize, length: Option<isize>) -> &BStr {
    s[resolve(s.len(), offset, length_bound(length)).as_range()].as_bstr()
}

/// Get the part of `s` between an inclusive start index and an exclusive end
/// index. Negative indexes count from the end; `None` runs to the end.
///
/// ```rust
/// use bytewise::slice;
///
/// assert_eq!(slice(b"abcdef", 1, Some(3)), "bc");
/// assert_eq!(slice(b"abcdef", -4, Some(-2)), "cd");
/// assert_eq!(slice(b"abcdef", 4, Some(-5)), "");
/// ```
#[must_use]
pub fn slice(s: &[u8], start: isize, end: Option<isize>) -> &BStr {
    s[resolve(s.len(), start, end_bound(end)).as_range()].as_bstr()
}

/// Replace the bytes [`substring`] would select with `new`.
///
/// When the selection is empty, `new` is inserted at its start; an offset past
/// the end appends.
#[must_use]
pub fn replace_substring(s: &[u8], new: &[u8], offset: isize, length: Option<isize>) -> BString {
    splice(s, new, offset, length_bound(length))
}

/// Replace the bytes [`slice`] would select with `new`.
///
/// If the end index comes at or before the start index, `new` is inserted at
/// the start index.
#[must_use]
pub fn replace_slice(s: &[u8], new: &[u8], start: isize, end: Option<isize>) -> BString {
    splice(s, new, start, end_bound(end))
}

/// Insert `new` into `s` at `offset`. Negative offsets count from the end;
/// offsets outside the string clamp to its ends.
#[must_use]
pub fn insert(s: &[u8], new: &[u8], offset: isize) -> BString {
    splice(s, new, offset, Bound::Len(0))
}

fn splice(s: &[u8], new: &[u8], offset: isize, bound: Bound) -> BString {
    let range = resolve(s.len(), offset, bound);
    let mut out = Vec::with_capacity(s.len() - range.len() + new.len());
    out.extend_from_slice(&s[..range.start()]);
    out.extend_from_slice(new);
    out.extend_from_slice(&s[range.end()..]);
    out.into()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(b"abcdef", 2, Some(3), "cde")]
    #[case(b"abcdef", 2, None, "cdef")]
    #[case(b"abcdef", 2, Some(1000), "cdef")]
    #[case(b"abcdef", 1000, None, "")]
    #[case(b"abcdef", 1000, Some(3), "")]
    #[case(b"abcdef", 2, Some(0), "")]
    #[case(b"abcdef", -2, None, "ef")]
    #[case(b"abcdef", -4, Some(2), "cd")]
    #[case(b"abcdef", -1000, None, "abcdef")]
    #[case(b"abcdef", -7, Some(3), "ab")]
    #[case(b"", 2, Some(4), "")]
    fn substrings(
        #[case] s: &[u8],
        #[case] offset: isize,
        #[case] length: Option<isize>,
        #[case] expected: &str,
    ) {
        assert_eq!(substring(s, offset, length), expected);
    }

    #[rstest]
    #[case(b"abcdef", 1, Some(3), "bc")]
    #[case(b"abcdef", 3, Some(4), "d")]
    #[case(b"abcdef", 3, Some(3), "")]
    #[case(b"abcdef", 3, Some(2), "")]
    #[case(b"abcdef", 2, None, "cdef")]
    #[case(b"abcdef", 2, Some(1000), "cdef")]
    #[case(b"abcdef", 1000, None, "")]
    #[case(b"abcdef", 1000, Some(4), "")]
    #[case(b"abcdef", 1000, Some(2000), "")]
    #[case(b"abcdef", 0, Some(-2), "abcd")]
    #[case(b"abcdef", 1, Some(-1), "bcde")]
    #[case(b"abcdef", 3, Some(-3), "")]
    #[case(b"abcdef", 4, Some(-5), "")]
    #[case(b"abcdef", -4, Some(-2), "cd")]
    #[case(b"abcdef", -4, Some(4), "cd")]
    #[case(b"abcdef", -1000, None, "abcdef")]
    #[case(b"abcdef", -1000, Some(-2), "abcd")]
    #[case(b"abcdef", -1000, Some(-100), "")]
    #[case(b"", 3, Some(5), "")]
    fn slices(
        #[case] s: &[u8],
        #[case] start: isize,
        #[case] end: Option<isize>,
        #[case] expected: &str,
    ) {
        assert_eq!(slice(s, start, end), expected);
    }

    #[rstest]
    #[case(b"abcdef", 2, Some(3), "abxf")]
    #[case(b"abcdef", 2, None, "abx")]
    #[case(b"abcdef", 2, Some(1000), "abx")]
    #[case(b"abcdef", 1000, None, "abcdefx")]
    #[case(b"abcdef", 1000, Some(3), "abcdefx")]
    #[case(b"abcdef", 2, Some(0), "abxcdef")]
    #[case(b"abcdef", -2, None, "abcdx")]
    #[case(b"abcdef", -4, Some(2), "abxef")]
    #[case(b"abcdef", -1000, None, "x")]
    #[case(b"abcdef", -1000, Some(-100), "xabcdef")]
    #[case(b"abcdef", -7, Some(3), "xcdef")]
    #[case(b"", 2, Some(4), "x")]
    fn replaced_substrings(
        #[case] s: &[u8],
        #[case] offset: isize,
        #[case] length: Option<isize>,
        #[case] expected: &str,
    ) {
        assert_eq!(replace_substring(s, b"x", offset, length), expected);
    }

    #[rstest]
    #[case(b"abcdef", 2, Some(4), "abxef")]
    #[case(b"abcdef", 2, None, "abx")]
    #[case(b"abcdef", 2, Some(1000), "abx")]
    #[case(b"abcdef", 1000, None, "abcdefx")]
    #[case(b"abcdef", 1000, Some(1003), "abcdefx")]
    #[case(b"abcdef", 1000, Some(3), "abcdefx")]
    #[case(b"abcdef", 2, Some(2), "abxcdef")]
    #[case(b"abcdef", -2, None, "abcdx")]
    #[case(b"abcdef", -4, Some(4), "abxef")]
    #[case(b"abcdef", -1000, None, "x")]
    #[case(b"abcdef", -1000, Some(-100), "xabcdef")]
    #[case(b"abcdef", -7, Some(-4), "xcdef")]
    #[case(b"", 2, Some(4), "x")]
    fn replaced_slices(
        #[case] s: &[u8],
        #[case] start: isize,
        #[case] end: Option<isize>,
        #[case] expected: &str,
    ) {
        assert_eq!(replace_slice(s, b"x", start, end), expected);
    }

    #[rstest]
    #[case(b"abcdef", 2, "abxcdef")]
    #[case(b"abcdef", -2, "abcdxef")]
    #[case(b"abcdef", 100, "abcdefx")]
    #[case(b"abcdef", -100, "xabcdef")]
    #[case(b"", 5, "x")]
    fn inserts(#[case] s: &[u8], #[case] offset: isize, #[case] expected: &str) {
        assert_eq!(insert(s, b"x", offset), expected);
    }
}
