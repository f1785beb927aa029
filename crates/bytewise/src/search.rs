//! Searching, affix tests and the extractions built on them.
//!
//! Empty needles are not treated uniformly across this module. Each function
//! documents what an empty needle does, and callers relying on a particular
//! behavior should check the function they use rather than assume symmetry:
//! [`find`] matches an empty needle at the starting offset, [`before`] and
//! [`after`] return an empty string for it, and [`contains`] always succeeds.

use alloc::vec::Vec;
use core::cmp::Ordering;

use bstr::{BStr, ByteSlice};

use crate::{
    charset::CharSet,
    compare::{isubstring_cmp, substring_cmp},
    range::{Bound, resolve, signed_len},
};

/// Position of the first occurrence of `needle` at or after `offset`.
///
/// An `offset` past the end of `s` finds nothing. An empty needle is found
/// at `offset` itself.
///
/// ```rust
/// use bytewise::find;
///
/// assert_eq!(find(b"xxxabcxxxabcxxx", b"abc", 0), Some(3));
/// assert_eq!(find(b"abcdef", b"bcd", 2), None);
/// assert_eq!(find(b"abcdef", b"", 2), Some(2));
/// assert_eq!(find(b"abcdef", b"", 7), None);
/// ```
#[must_use]
pub fn find(s: &[u8], needle: &[u8], offset: usize) -> Option<usize> {
    if offset > s.len() {
        return None;
    }
    if needle.is_empty() {
        return Some(offset);
    }
    s[offset..].find(needle).map(|i| i + offset)
}

/// Like [`find`] but ASCII case-insensitive.
#[must_use]
pub fn ifind(s: &[u8], needle: &[u8], offset: usize) -> Option<usize> {
    if offset > s.len() || needle.is_empty() {
        return find(s, needle, offset);
    }
    s[offset..]
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
        .map(|i| i + offset)
}

/// Position of the last occurrence of `needle`, searching backwards.
///
/// `offset` counts bytes from the *end* of `s`: a match must start at or
/// before `len - offset`. An `offset` past the start finds nothing, and an
/// empty needle is found at `len - offset`.
///
/// ```rust
/// use bytewise::rfind;
///
/// assert_eq!(rfind(b"xxxabcxxxabcxxx", b"abc", 0), Some(9));
/// assert_eq!(rfind(b"abcdef", b"cde", 4), Some(2));
/// assert_eq!(rfind(b"abcdef", b"cde", 5), None);
/// assert_eq!(rfind(b"abcdef", b"", 2), Some(4));
/// ```
#[must_use]
pub fn rfind(s: &[u8], needle: &[u8], offset: usize) -> Option<usize> {
    if offset > s.len() {
        return None;
    }
    if needle.is_empty() {
        return Some(s.len() - offset);
    }
    let last_start = s.len().checked_sub(needle.len())?.min(s.len() - offset);
    s[..last_start + needle.len()].rfind(needle)
}

/// Whether `needle` occurs in `s` at or after `offset`. An empty needle is
/// always contained.
#[must_use]
pub fn contains(s: &[u8], needle: &[u8], offset: usize) -> bool {
    needle.is_empty() || find(s, needle, offset).is_some()
}

/// Like [`contains`] but ASCII case-insensitive.
#[must_use]
pub fn icontains(s: &[u8], needle: &[u8], offset: usize) -> bool {
    needle.is_empty() || ifind(s, needle, offset).is_some()
}

/// Whether `s` contains any of the bytes listed in `chars`. The list is
/// taken literally; `..` is two dots. An empty list matches nothing.
#[must_use]
pub fn contains_chars(s: &[u8], chars: &[u8]) -> bool {
    let set = CharSet::of(chars);
    s.iter().any(|&b| set.contains(b))
}

/// Whether `s` contains the byte `c`.
#[must_use]
pub fn contains_char(s: &[u8], c: u8) -> bool {
    s.contains(&c)
}

/// Whether `s` starts with `prefix`.
#[must_use]
pub fn begins_with(s: &[u8], prefix: &[u8]) -> bool {
    s.starts_with(prefix)
}

/// Like [`begins_with`] but ASCII case-insensitive.
#[must_use]
pub fn ibegins_with(s: &[u8], prefix: &[u8]) -> bool {
    s.len() >= prefix.len() && s[..prefix.len()].eq_ignore_ascii_case(prefix)
}

/// Whether `s` ends with `suffix`.
#[must_use]
pub fn ends_with(s: &[u8], suffix: &[u8]) -> bool {
    suffix.is_empty() || substring_cmp(s, -signed_len(suffix), None, suffix) == Ordering::Equal
}

/// Like [`ends_with`] but ASCII case-insensitive.
#[must_use]
pub fn iends_with(s: &[u8], suffix: &[u8]) -> bool {
    suffix.is_empty() || isubstring_cmp(s, -signed_len(suffix), None, suffix) == Ordering::Equal
}

/// `s` without `prefix`, or `None` if `s` does not start with it.
///
/// ```rust
/// use bytewise::remove_prefix;
///
/// assert_eq!(remove_prefix(b"abcdef", b"abc").unwrap(), "def");
/// assert_eq!(remove_prefix(b"abcdef", b"").unwrap(), "abcdef");
/// assert!(remove_prefix(b"abc", b"abcdef").is_none());
/// ```
#[must_use]
pub fn remove_prefix<'a>(s: &'a [u8], prefix: &[u8]) -> Option<&'a BStr> {
    begins_with(s, prefix).then(|| s[prefix.len()..].as_bstr())
}

/// Like [`remove_prefix`] but ASCII case-insensitive.
#[must_use]
pub fn iremove_prefix<'a>(s: &'a [u8], prefix: &[u8]) -> Option<&'a BStr> {
    ibegins_with(s, prefix).then(|| s[prefix.len()..].as_bstr())
}

/// `s` without `suffix`, or `None` if `s` does not end with it.
#[must_use]
pub fn remove_suffix<'a>(s: &'a [u8], suffix: &[u8]) -> Option<&'a BStr> {
    ends_with(s, suffix).then(|| s[..s.len() - suffix.len()].as_bstr())
}

/// Like [`remove_suffix`] but ASCII case-insensitive.
#[must_use]
pub fn iremove_suffix<'a>(s: &'a [u8], suffix: &[u8]) -> Option<&'a BStr> {
    iends_with(s, suffix).then(|| s[..s.len() - suffix.len()].as_bstr())
}

/// The part of `s` before the first occurrence of `needle`.
///
/// Returns all of `s` when the needle does not occur, and an empty string
/// when the needle is empty.
#[must_use]
pub fn before<'a>(s: &'a [u8], needle: &[u8]) -> &'a BStr {
    if needle.is_empty() {
        return b"".as_bstr();
    }
    match s.find(needle) {
        Some(i) => s[..i].as_bstr(),
        None => s.as_bstr(),
    }
}

/// The part of `s` after the last occurrence of `needle`.
///
/// Returns all of `s` when the needle does not occur, and an empty string
/// when the needle is empty.
#[must_use]
pub fn after<'a>(s: &'a [u8], needle: &[u8]) -> &'a BStr {
    match rfind(s, needle, 0) {
        Some(i) => s[i + needle.len()..].as_bstr(),
        None => s.as_bstr(),
    }
}

/// The tail of `s` starting at the first occurrence of `needle`, or `None`.
/// An empty needle yields all of `s`.
#[must_use]
pub fn starting_with<'a>(s: &'a [u8], needle: &[u8]) -> Option<&'a BStr> {
    find(s, needle, 0).map(|i| s[i..].as_bstr())
}

/// Like [`starting_with`] but ASCII case-insensitive.
#[must_use]
pub fn istarting_with<'a>(s: &'a [u8], needle: &[u8]) -> Option<&'a BStr> {
    ifind(s, needle, 0).map(|i| s[i..].as_bstr())
}

/// The tail of `s` starting at the last occurrence of the byte `c`.
#[must_use]
pub fn rstarting_with(s: &[u8], c: u8) -> Option<&BStr> {
    s.rfind_byte(c).map(|i| s[i..].as_bstr())
}

/// The tail of `s` starting at the first byte listed in `chars`.
#[must_use]
pub fn starting_with_chars<'a>(s: &'a [u8], chars: &[u8]) -> Option<&'a BStr> {
    let set = CharSet::of(chars);
    s.iter()
        .position(|&b| set.contains(b))
        .map(|i| s[i..].as_bstr())
}

/// The head of `s` up to the first occurrence of `needle`, or `None` if it
/// does not occur. An empty needle yields an empty head.
#[must_use]
pub fn preceding<'a>(s: &'a [u8], needle: &[u8]) -> Option<&'a BStr> {
    find(s, needle, 0).map(|i| s[..i].as_bstr())
}

/// Like [`preceding`] but ASCII case-insensitive.
#[must_use]
pub fn ipreceding<'a>(s: &'a [u8], needle: &[u8]) -> Option<&'a BStr> {
    ifind(s, needle, 0).map(|i| s[..i].as_bstr())
}

/// Number of non-overlapping occurrences of `needle` in the `length` bytes
/// starting at `offset` (to the end when `None`).
///
/// An empty needle counts every position in the window, including both ends.
///
/// ```rust
/// use bytewise::count;
///
/// assert_eq!(count(b"ababa", b"aba", 0, None), 1);
/// assert_eq!(count(b"xxabcxxxabcxxabcx", b"abc", 6, Some(5)), 1);
/// assert_eq!(count(b"abcdef", b"", 3, None), 4);
/// ```
#[must_use]
pub fn count(s: &[u8], needle: &[u8], offset: usize, length: Option<usize>) -> usize {
    if needle.is_empty() {
        return match s.len().checked_sub(offset) {
            Some(rest) => length.map_or(rest, |len| rest.min(len)) + 1,
            None => 0,
        };
    }
    if offset >= s.len() {
        return 0;
    }
    let rest = s.len() - offset;
    let window = length.map_or(rest, |len| rest.min(len));
    s[offset..offset + window].find_iter(needle).count()
}

/// Length of the initial run of bytes from `chars` in the part of `s` that
/// [`substring`](crate::substring) would select. A negative `length` is an
/// end index counted from the end of `s`. The bytes in `chars` are taken
/// literally.
///
/// ```rust
/// use bytewise::span;
///
/// assert_eq!(span(b"aaab", b"a", 0, None), 3);
/// assert_eq!(span(b"xyz", b"a", 0, None), 0);
/// assert_eq!(span(b"42 is the answer", b"1234567890", 1, Some(-3)), 1);
/// assert_eq!(span(b"42 is the answer", b"0..9", 1, Some(-3)), 0);
/// ```
#[must_use]
pub fn span(s: &[u8], chars: &[u8], offset: isize, length: Option<isize>) -> usize {
    let bound = match length {
        None => Bound::ToEnd,
        Some(len) if len < 0 => Bound::End(len),
        Some(len) => Bound::Len(len),
    };
    let set = CharSet::of(chars);
    s[resolve(s.len(), offset, bound).as_range()]
        .iter()
        .take_while(|&&b| set.contains(b))
        .count()
}

/// Positions of every non-overlapping occurrence of `needle`.
pub(crate) fn match_positions(s: &[u8], needle: &[u8]) -> Vec<usize> {
    s.find_iter(needle).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_forward() {
        assert_eq!(find(b"abcdef", b"cde", 0), Some(2));
        assert_eq!(find(b"abcdef", b"xyz", 0), None);
        assert_eq!(find(b"abcdef", b"abcdef", 0), Some(0));
        assert_eq!(find(b"abcdef", b"abcdefghi", 0), None);
        assert_eq!(find(b"abcdef", b"", 0), Some(0));
        assert_eq!(find(b"", b"abc", 0), None);
        assert_eq!(find(b"", b"", 0), Some(0));
        assert_eq!(find(b"abcdef", b"bcd", 2), None);
        assert_eq!(find(b"abcdef", b"de", 2), Some(3));
        assert_eq!(find(b"abcdef", b"", 2), Some(2));
        assert_eq!(find(b"abcdef", b"bcd", 10), None);
        assert_eq!(find(b"xxxabcxxxabcxxx", b"abc", 0), Some(3));
    }

    #[test]
    fn find_forward_ignoring_case() {
        assert_eq!(ifind(b"abCdEf", b"cDe", 0), Some(2));
        assert_eq!(ifind(b"abcdef", b"xyz", 0), None);
        assert_eq!(ifind(b"abCDef", b"aBcdeF", 0), Some(0));
        assert_eq!(ifind(b"abcdef", b"abcdefghi", 0), None);
        assert_eq!(ifind(b"abcdef", b"", 0), Some(0));
        assert_eq!(ifind(b"", b"abc", 0), None);
        assert_eq!(ifind(b"", b"", 0), Some(0));
        assert_eq!(ifind(b"abcdef", b"bcd", 2), None);
        assert_eq!(ifind(b"abcDef", b"de", 2), Some(3));
        assert_eq!(ifind(b"abcdef", b"", 2), Some(2));
        assert_eq!(ifind(b"abcdef", b"bcd", 10), None);
        assert_eq!(ifind(b"xxxABCxxxabcxxx", b"abc", 0), Some(3));
    }

    #[test]
    fn find_backward() {
        assert_eq!(rfind(b"xxxabcxxxabcxxx", b"abc", 0), Some(9));
        assert_eq!(rfind(b"abcdef", b"cde", 0), Some(2));
        assert_eq!(rfind(b"abcdef", b"xyz", 0), None);
        assert_eq!(rfind(b"abcdef", b"abcdef", 0), Some(0));
        assert_eq!(rfind(b"abcdef", b"abcdefghi", 0), None);
        assert_eq!(rfind(b"abcdef", b"", 0), Some(6));
        assert_eq!(rfind(b"", b"abc", 0), None);
        assert_eq!(rfind(b"", b"", 0), Some(0));
        assert_eq!(rfind(b"abcdef", b"cde", 2), Some(2));
        assert_eq!(rfind(b"abcdef", b"cde", 4), Some(2));
        assert_eq!(rfind(b"abcdef", b"cde", 5), None);
        assert_eq!(rfind(b"abcdef", b"bc", 2), Some(1));
        assert_eq!(rfind(b"abcdef", b"", 2), Some(4));
        assert_eq!(rfind(b"abcdef", b"bcd", 10), None);
    }

    #[test]
    fn containment() {
        assert!(contains(b"xabcx", b"abc", 0));
        assert!(!contains(b"xabcx", b"def", 0));
        assert!(contains(b"xxxxx", b"", 0));
        assert!(contains(b"", b"", 0));
        assert!(!contains(b"", b"xxx", 0));
        assert!(contains(b"xxxabcxx", b"abc", 2));
        assert!(!contains(b"xxxabcxx", b"abc", 4));

        assert!(icontains(b"xabcx", b"ABC", 0));
        assert!(!icontains(b"xabcx", b"DEF", 0));
        assert!(icontains(b"xxxxx", b"", 0));
        assert!(icontains(b"", b"", 0));
        assert!(!icontains(b"", b"xxx", 0));
        assert!(icontains(b"xxxAbCxx", b"aBc", 2));
        assert!(!icontains(b"xxxabcxx", b"abc", 4));
    }

    #[test]
    fn character_containment() {
        assert!(contains_chars(b"abcdef", b"xycz"));
        assert!(!contains_chars(b"abcdef", b"xyz"));
        assert!(!contains_chars(b"abcdef", b""));
        assert!(contains_char(b"abcdef", b'e'));
        assert!(!contains_char(b"abcdef", b'x'));
    }

    #[test]
    fn case_insensitive_windows() {
        assert_eq!(ifind(b"xxABcxaBC", b"abc", 0), Some(2));
        assert_eq!(ifind(b"xxABcxaBC", b"abc", 3), Some(6));
        assert_eq!(ifind(b"xxABcxaBC", b"abc", 7), None);
        assert_eq!(ifind(b"ab", b"ABC", 0), None);
        assert_eq!(ifind(b"\xC4\xE4", b"\xE4", 0), Some(1));
        assert_eq!(ifind(b"[@", b"{`", 0), None);
    }

    #[test]
    fn character_lists_are_literal() {
        assert!(contains_chars(b".", b"a..z"));
        assert!(!contains_chars(b"m", b"a..z"));
        assert!(!contains_chars(b"5", b"0..9"));
        assert_eq!(starting_with_chars(b"xy.z", b"a..c").unwrap(), ".z");
        assert_eq!(starting_with_chars(b"b", b"a..c"), None);
        assert_eq!(span(b"42 is the answer", b"0..9", 1, Some(-3)), 0);
        assert_eq!(span(b"9..0x", b"0..9", 0, None), 4);
    }

    #[test]
    fn prefixes() {
        assert!(begins_with(b"abcdef", b"abc"));
        assert!(!begins_with(b"abcdef", b"xyz"));
        assert!(!begins_with(b"abcdef", b"cde"));
        assert!(!begins_with(b"", b"abc"));
        assert!(begins_with(b"abcdef", b""));
        assert!(!begins_with(b"abc", b"abcdef"));

        assert!(ibegins_with(b"aBcdef", b"AbC"));
        assert!(!ibegins_with(b"abcdef", b"xyz"));
        assert!(!ibegins_with(b"abcdef", b"cde"));
        assert!(!ibegins_with(b"", b"abc"));
        assert!(ibegins_with(b"AbCdef", b""));
        assert!(!ibegins_with(b"abc", b"abcdef"));
    }

    #[test]
    fn suffixes() {
        assert!(ends_with(b"abcdef", b"def"));
        assert!(!ends_with(b"abcdef", b"xyz"));
        assert!(!ends_with(b"abcdef", b"bcd"));
        assert!(!ends_with(b"a", b"def"));
        assert!(!ends_with(b"", b"def"));
        assert!(ends_with(b"abcdef", b""));
        assert!(!ends_with(b"def", b"abcdef"));
        assert!(!ends_with(b"abc", b"abcd"));

        assert!(iends_with(b"abcDeF", b"Def"));
        assert!(!iends_with(b"abcdef", b"xyz"));
        assert!(!iends_with(b"abcdef", b"bcd"));
        assert!(!iends_with(b"a", b"def"));
        assert!(!iends_with(b"", b"def"));
        assert!(iends_with(b"abcdef", b""));
        assert!(!iends_with(b"def", b"abcdef"));
    }

    #[test]
    fn prefix_removal() {
        assert_eq!(remove_prefix(b"abcdef", b"abc").unwrap(), "def");
        assert_eq!(remove_prefix(b"abcdef", b"xyz"), None);
        assert_eq!(remove_prefix(b"abcdef", b"cde"), None);
        assert_eq!(remove_prefix(b"abcdef", b"").unwrap(), "abcdef");
        assert_eq!(remove_prefix(b"abcdef", b"abcdef").unwrap(), "");
        assert_eq!(remove_prefix(b"abc", b"xyzijk"), None);
        assert_eq!(remove_prefix(b"abc", b"abcdef"), None);
        assert_eq!(remove_prefix(b"", b"abc"), None);
        assert_eq!(remove_prefix(b"", b"").unwrap(), "");

        assert_eq!(iremove_prefix(b"aBCdEf", b"ABc").unwrap(), "dEf");
        assert_eq!(iremove_prefix(b"abcdef", b"xyz"), None);
        assert_eq!(iremove_prefix(b"abcdef", b"").unwrap(), "abcdef");
        assert_eq!(iremove_prefix(b"abcdef", b"aBcDEf").unwrap(), "");
        assert_eq!(iremove_prefix(b"abc", b"abcdef"), None);
        assert_eq!(iremove_prefix(b"", b"").unwrap(), "");
    }

    #[test]
    fn suffix_removal() {
        assert_eq!(remove_suffix(b"abcdef", b"def").unwrap(), "abc");
        assert_eq!(remove_suffix(b"abcdef", b"xyz"), None);
        assert_eq!(remove_suffix(b"abcdef", b"bcd"), None);
        assert_eq!(remove_suffix(b"abcdef", b"").unwrap(), "abcdef");
        assert_eq!(remove_suffix(b"abcdef", b"abcdef").unwrap(), "");
        assert_eq!(remove_suffix(b"abc", b"xyzijk"), None);
        assert_eq!(remove_suffix(b"abc", b"abcdef"), None);
        assert_eq!(remove_suffix(b"", b"abc"), None);
        assert_eq!(remove_suffix(b"", b"").unwrap(), "");

        assert_eq!(iremove_suffix(b"aBcdEf", b"DeF").unwrap(), "aBc");
        assert_eq!(iremove_suffix(b"abcdef", b"xyz"), None);
        assert_eq!(iremove_suffix(b"abcdef", b"AbcdEf").unwrap(), "");
        assert_eq!(iremove_suffix(b"abc", b"abcdef"), None);
        assert_eq!(iremove_suffix(b"", b"").unwrap(), "");
    }

    #[test]
    fn before_and_after() {
        assert_eq!(before(b"abc/def", b"/"), "abc");
        assert_eq!(before(b"abc/def/ghi", b"/"), "abc");
        assert_eq!(before(b"abc", b"/"), "abc");
        assert_eq!(before(b"abcdef", b""), "");
        assert_eq!(before(b"abcdef", b"abcdef"), "");
        assert_eq!(before(b"abc", b"abcdef"), "abc");
        assert_eq!(before(b"", b""), "");
        assert_eq!(before(b"", b"abc"), "");

        assert_eq!(after(b"abc/def", b"/"), "def");
        assert_eq!(after(b"abc/def/ghi", b"/"), "ghi");
        assert_eq!(after(b"abc", b"/"), "abc");
        assert_eq!(after(b"abcdef", b""), "");
        assert_eq!(after(b"abcdef", b"abcdef"), "");
        assert_eq!(after(b"abc", b"abcdef"), "abc");
        assert_eq!(after(b"", b""), "");
        assert_eq!(after(b"", b"abc"), "");
    }

    #[test]
    fn tails_and_heads() {
        assert_eq!(starting_with(b"abcdef", b"cd").unwrap(), "cdef");
        assert_eq!(starting_with(b"abcdef", b"").unwrap(), "abcdef");
        assert_eq!(starting_with(b"abcdef", b"xyz"), None);
        assert_eq!(starting_with(b"aaxaaxaa", b"x").unwrap(), "xaaxaa");
        assert_eq!(istarting_with(b"abCdef", b"cd").unwrap(), "Cdef");

        assert_eq!(rstarting_with(b"aaxaa", b'x').unwrap(), "xaa");
        assert_eq!(rstarting_with(b"aaxaaxaa", b'x').unwrap(), "xaa");
        assert_eq!(rstarting_with(b"abcdef", b'x'), None);

        assert_eq!(starting_with_chars(b"aaxxaa", b"x").unwrap(), "xxaa");
        assert_eq!(starting_with_chars(b"aayxaa", b"xy").unwrap(), "yxaa");

        assert_eq!(preceding(b"abcdef", b"c").unwrap(), "ab");
        assert_eq!(preceding(b"abcdef", b"x"), None);
        assert_eq!(preceding(b"abcdef", b"de").unwrap(), "abc");
        assert_eq!(preceding(b"abcdef", b"").unwrap(), "");
        assert_eq!(ipreceding(b"aBcDef", b"cde").unwrap(), "aB");
        assert_eq!(ipreceding(b"abCdEf", b"x"), None);
    }

    #[test]
    fn counting() {
        let s = b"xxabcxxxabcxxabcx";
        assert_eq!(count(s, b"abc", 0, None), 3);
        assert_eq!(count(b"xxxx", b"abc", 0, None), 0);
        assert_eq!(count(b"ababa", b"aba", 0, None), 1);
        assert_eq!(count(b"", b"abc", 0, None), 0);
        assert_eq!(count(b"abcdef", b"", 0, None), 7);
        assert_eq!(count(s, b"abc", 6, None), 2);
        assert_eq!(count(s, b"abc", 30, None), 0);
        assert_eq!(count(s, b"abc", 6, Some(5)), 1);
        assert_eq!(count(s, b"abc", 6, Some(0)), 0);
        assert_eq!(count(b"abc", b"abcdef", 0, None), 0);
        assert_eq!(count(b"abcdef", b"", 3, None), 4);
        assert_eq!(count(b"abcdef", b"", 3, Some(2)), 3);
        assert_eq!(count(b"abcdef", b"", 10, None), 0);
        assert_eq!(count(b"abcdef", b"abc", 6, None), 0);
        assert_eq!(count(b"abcdef", b"", 6, None), 1);
    }

    #[test]
    fn spans() {
        assert_eq!(span(b"aaab", b"a", 0, None), 3);
        assert_eq!(span(b"xyz", b"a", 0, None), 0);
        assert_eq!(span(b"aaab", b"a", 1, None), 2);
        assert_eq!(span(b"aaab", b"a", -2, None), 1);
        assert_eq!(span(b"aaab", b"a", 0, Some(2)), 2);
        assert_eq!(span(b"aaaa", b"a", 0, Some(-1)), 3);
        assert_eq!(span(b"aaab", b"a", 10, None), 0);
    }

    #[test]
    fn match_positions_do_not_overlap() {
        assert_eq!(match_positions(b"aaaa", b"aa"), [0, 2]);
        assert!(match_positions(b"abc", b"x").is_empty());
    }
}
