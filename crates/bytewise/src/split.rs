//! Splitting strings into parts and joining them back.

use alloc::vec::Vec;
use core::num::NonZeroUsize;

use bstr::{BStr, BString, ByteSlice};

use crate::charset::{CharSet, WHITESPACE};

/// The bytes of `s`.
#[must_use]
pub fn chars(s: &[u8]) -> Vec<u8> {
    s.to_vec()
}

/// `s` cut into pieces of `size` bytes; the last piece may be shorter.
///
/// ```rust
/// use core::num::NonZeroUsize;
/// use bytewise::chunks;
///
/// let two = NonZeroUsize::new(2).unwrap();
/// assert_eq!(chunks(b"abcde", two), ["ab", "cd", "e"]);
/// assert!(chunks(b"", two).is_empty());
/// ```
#[must_use]
pub fn chunks(s: &[u8], size: NonZeroUsize) -> Vec<&BStr> {
    s.chunks(size.get()).map(ByteSlice::as_bstr).collect()
}

/// Split `s` on a delimiter.
///
/// With `delim` set to `None`, `s` is split on runs of ASCII whitespace and
/// no empty parts are produced; `limit` is ignored. Otherwise every
/// occurrence of the delimiter separates two parts, which may be empty. An
/// empty delimiter leaves `s` whole.
///
/// `limit` of `Some(k)` with `k >= 0` makes at most `k` splits, leaving the
/// rest of the string in the last part; a negative `k` drops the last `-k`
/// parts.
///
/// ```rust
/// use bytewise::split;
///
/// assert_eq!(split(b"  a  b  ", None, None), ["a", "b"]);
/// assert_eq!(split(b"aba", Some(b"b"), None), ["a", "a"]);
/// assert_eq!(split(b"ababa", Some(b"b"), Some(1)), ["a", "aba"]);
/// assert_eq!(split(b"ababa", Some(b"b"), Some(-1)), ["a", "a"]);
/// ```
#[must_use]
pub fn split<'a>(s: &'a [u8], delim: Option<&[u8]>, limit: Option<isize>) -> Vec<&'a BStr> {
    let Some(delim) = delim else {
        return tokenize(s, WHITESPACE);
    };
    if delim.is_empty() {
        return alloc::vec![s.as_bstr()];
    }

    match limit {
        Some(k) if k < 0 => {
            let mut parts: Vec<&BStr> = s.split_str(delim).map(ByteSlice::as_bstr).collect();
            parts.truncate(parts.len().saturating_sub(k.unsigned_abs()));
            parts
        }
        Some(k) => s
            .splitn_str(k.unsigned_abs().saturating_add(1), delim)
            .map(ByteSlice::as_bstr)
            .collect(),
        None => s.split_str(delim).map(ByteSlice::as_bstr).collect(),
    }
}

/// Split `s` on any of the bytes listed in `chars`, dropping empty tokens.
/// The list is taken literally.
///
/// ```rust
/// use bytewise::tokenize;
///
/// assert_eq!(tokenize(b"xabcxyabc", b"abc"), ["x", "xy"]);
/// ```
#[must_use]
pub fn tokenize<'a>(s: &'a [u8], chars: &[u8]) -> Vec<&'a BStr> {
    let set = CharSet::of(chars);
    s.split(|&b| set.contains(b))
        .filter(|part| !part.is_empty())
        .map(ByteSlice::as_bstr)
        .collect()
}

/// Concatenate `parts` with `sep` between each pair.
#[must_use]
pub fn join<T: AsRef<[u8]>>(sep: &[u8], parts: &[T]) -> BString {
    bstr::join(sep, parts).into()
}

fn is_word_byte(b: u8, extra: &CharSet) -> bool {
    b.is_ascii_alphabetic() || b == b'\'' || b == b'-' || extra.contains(b)
}

/// The words of `s` with their byte offsets.
///
/// A word is a run of ASCII letters, apostrophes, hyphens and bytes in
/// `extra` (a list in [`CharSet::parse`] syntax). Unless listed in `extra`,
/// an apostrophe or hyphen cannot start the string and a hyphen cannot end
/// it.
///
/// ```rust
/// use bytewise::find_words;
///
/// let words = find_words(b"a b c", b"");
/// assert_eq!(words.iter().map(|(at, _)| *at).collect::<Vec<_>>(), [0, 2, 4]);
/// ```
#[must_use]
pub fn find_words<'a>(s: &'a [u8], extra: &[u8]) -> Vec<(usize, &'a BStr)> {
    let extra = CharSet::parse(extra);
    let mut start = 0;
    let mut end = s.len();
    if s.first().is_some_and(|&b| (b == b'\'' || b == b'-') && !extra.contains(b)) {
        start += 1;
    }
    if end > start && s[end - 1] == b'-' && !extra.contains(b'-') {
        end -= 1;
    }

    let mut found = Vec::new();
    let mut i = start;
    while i < end {
        let word_start = i;
        while i < end && is_word_byte(s[i], &extra) {
            i += 1;
        }
        if i > word_start {
            found.push((word_start, s[word_start..i].as_bstr()));
        } else {
            i += 1;
        }
    }
    found
}

/// The words of `s`, as [`find_words`] finds them.
///
/// ```rust
/// use bytewise::words;
///
/// assert_eq!(words(b"Hello fri3nd, you're looking good today!", b""),
///            ["Hello", "fri", "nd", "you're", "looking", "good", "today"]);
/// ```
#[must_use]
pub fn words<'a>(s: &'a [u8], extra: &[u8]) -> Vec<&'a BStr> {
    find_words(s, extra).into_iter().map(|(_, word)| word).collect()
}

/// Number of words in `s`, as [`find_words`] finds them.
#[must_use]
pub fn word_count(s: &[u8], extra: &[u8]) -> usize {
    find_words(s, extra).len()
}

/// Split an identifier written in camel case into its words.
///
/// A new word starts at an uppercase letter that follows a non-uppercase
/// byte, and at the last uppercase letter of an acronym when a lowercase
/// letter follows it.
///
/// ```rust
/// use bytewise::split_camel_case;
///
/// assert_eq!(split_camel_case(b"XMLHttpRequest"), ["XML", "Http", "Request"]);
/// assert_eq!(split_camel_case(b"camelCase"), ["camel", "Case"]);
/// ```
#[must_use]
pub fn split_camel_case(s: &[u8]) -> Vec<&BStr> {
    let mut parts = Vec::new();
    let mut start = 0;
    for i in 1..s.len() {
        let (prev, cur) = (s[i - 1], s[i]);
        let next_is_lower = s.get(i + 1).is_some_and(u8::is_ascii_lowercase);
        let boundary = cur.is_ascii_uppercase()
            && (!prev.is_ascii_uppercase() || next_is_lower);
        if boundary {
            parts.push(s[start..i].as_bstr());
            start = i;
        }
    }
    parts.push(s[start..].as_bstr());
    parts
}
