//! ASCII case mapping.
//!
//! Bytes outside `A-Z`/`a-z` are never changed, so these functions are safe
//! to apply to UTF-8 text and arbitrary binary data alike.

use bstr::BString;

/// Lowercase every ASCII letter.
#[must_use]
pub fn lower(s: &[u8]) -> BString {
    s.to_ascii_lowercase().into()
}

/// Uppercase every ASCII letter.
#[must_use]
pub fn upper(s: &[u8]) -> BString {
    s.to_ascii_uppercase().into()
}

/// Lowercase the first byte if it is an ASCII letter.
#[must_use]
pub fn lcfirst(s: &[u8]) -> BString {
    map_first(s, u8::to_ascii_lowercase)
}

/// Uppercase the first byte if it is an ASCII letter.
#[must_use]
pub fn ucfirst(s: &[u8]) -> BString {
    map_first(s, u8::to_ascii_uppercase)
}

fn map_first(s: &[u8], f: impl FnOnce(&u8) -> u8) -> BString {
    let mut out = BString::from(s);
    if let Some(first) = out.first_mut() {
        *first = f(first);
    }
    out
}

/// Uppercase the first letter of every word, where words are separated by
/// spaces, tabs, carriage returns, newlines, form feeds and vertical tabs.
///
/// ```rust
/// use bytewise::ucwords;
///
/// assert_eq!(ucwords(b"hello world-wide\tweb"), "Hello World-wide\tWeb");
/// ```
#[must_use]
pub fn ucwords(s: &[u8]) -> BString {
    let mut out = BString::from(s);
    let mut at_word_start = true;
    for b in out.iter_mut() {
        if at_word_start {
            b.make_ascii_uppercase();
        }
        at_word_start = matches!(*b, b' ' | b'\t' | b'\r' | b'\n' | b'\x0C' | b'\x0B');
    }
    out
}

/// Rotate every ASCII letter by 13 places.
#[must_use]
pub fn rot13(s: &[u8]) -> BString {
    s.iter()
        .map(|&b| match b {
            b'a'..=b'z' => (b - b'a' + 13) % 26 + b'a',
            b'A'..=b'Z' => (b - b'A' + 13) % 26 + b'A',
            _ => b,
        })
        .collect::<alloc::vec::Vec<u8>>()
        .into()
}
