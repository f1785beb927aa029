//! Backslash escaping in the C and quoting styles.

use alloc::vec::Vec;

use bstr::BString;

use crate::charset::CharSet;

/// Prefix every byte listed in `chars` (a list in [`CharSet::parse`] syntax)
/// with a backslash.
///
/// Listed control bytes with a C escape (`\n`, `\t`, `\r`, `\a`, `\v`, `\b`,
/// `\f`) use it, and other listed bytes outside printable ASCII become a
/// three-digit octal escape.
///
/// ```rust
/// use bytewise::add_cslashes;
///
/// assert_eq!(add_cslashes(b"foo[bar]", b"A..Z"), "foo[bar]");
/// assert_eq!(add_cslashes(b"zoo['.']", b"z..A"), "\\zoo['\\.']");
/// assert_eq!(add_cslashes(b"a\nb\x01", b"\0..\x1F"), "a\\nb\\001");
/// ```
#[must_use]
pub fn add_cslashes(s: &[u8], chars: &[u8]) -> BString {
    let set = CharSet::parse(chars);
    let mut out = Vec::with_capacity(s.len());
    for &b in s {
        if !set.contains(b) {
            out.push(b);
            continue;
        }
        out.push(b'\\');
        match b {
            b'\n' => out.push(b'n'),
            b'\t' => out.push(b't'),
            b'\r' => out.push(b'r'),
            0x07 => out.push(b'a'),
            0x0B => out.push(b'v'),
            0x08 => out.push(b'b'),
            0x0C => out.push(b'f'),
            b if b < 32 || b > 126 => {
                out.extend_from_slice(&[b'0' + (b >> 6), b'0' + ((b >> 3) & 7), b'0' + (b & 7)]);
            }
            b => out.push(b),
        }
    }
    out.into()
}

/// Escape `s` for use inside a C string literal.
///
/// ```rust
/// use bytewise::escape_c_string;
///
/// assert_eq!(escape_c_string(b"say \"hi\"\n"), "say \\\"hi\\\"\\n");
/// ```
#[must_use]
pub fn escape_c_string(s: &[u8]) -> BString {
    add_cslashes(s, b"\n\r\t\x0B\x0C\"'\\")
}

/// Undo C-style escapes.
///
/// Recognizes the escapes [`add_cslashes`] produces, `\xHH` with one or two
/// hex digits, and octal escapes of one to three digits. A backslash before
/// any other byte is dropped, as is a trailing lone backslash.
///
/// ```rust
/// use bytewise::unescape_c_string;
///
/// assert_eq!(unescape_c_string(b"a\\tb\\x41\\101\\q"), "a\tbAAq");
/// ```
#[must_use]
pub fn unescape_c_string(s: &[u8]) -> BString {
    let mut out = Vec::with_capacity(s.len());
    let mut i = 0;
    while i < s.len() {
        if s[i] != b'\\' {
            out.push(s[i]);
            i += 1;
            continue;
        }
        i += 1;
        let Some(&c) = s.get(i) else { break };
        i += 1;
        match c {
            b'n' => out.push(b'\n'),
            b't' => out.push(b'\t'),
            b'r' => out.push(b'\r'),
            b'a' => out.push(0x07),
            b'v' => out.push(0x0B),
            b'b' => out.push(0x08),
            b'f' => out.push(0x0C),
            b'\\' => out.push(b'\\'),
            b'x' => {
                let digits = hex_run(&s[i..]);
                if digits.is_empty() {
                    out.push(b'x');
                } else {
                    out.push(digits.iter().fold(0, |acc, &d| acc * 16 + hex_value(d)));
                    i += digits.len();
                }
            }
            b'0'..=b'7' => {
                let digits = octal_run(&s[i - 1..]);
                out.push(digits.iter().fold(0u8, |acc, &d| acc.wrapping_mul(8).wrapping_add(d - b'0')));
                i += digits.len() - 1;
            }
            c => out.push(c),
        }
    }
    out.into()
}

fn hex_run(s: &[u8]) -> &[u8] {
    let n = s.iter().take(2).take_while(|b| b.is_ascii_hexdigit()).count();
    &s[..n]
}

fn octal_run(s: &[u8]) -> &[u8] {
    let n = s.iter().take(3).take_while(|b| (b'0'..=b'7').contains(*b)).count();
    &s[..n]
}

fn hex_value(d: u8) -> u8 {
    match d {
        b'0'..=b'9' => d - b'0',
        b'a'..=b'f' => d - b'a' + 10,
        _ => d - b'A' + 10,
    }
}

/// Backslash-escape single quotes, double quotes and backslashes, and write
/// NUL as `\0`.
///
/// ```rust
/// use bytewise::escape_slashes;
///
/// assert_eq!(escape_slashes(b"O'Re\"il\\ly\0"), "O\\'Re\\\"il\\\\ly\\0");
/// ```
#[must_use]
pub fn escape_slashes(s: &[u8]) -> BString {
    let mut out = Vec::with_capacity(s.len());
    for &b in s {
        match b {
            b'\'' | b'"' | b'\\' => out.extend_from_slice(&[b'\\', b]),
            0 => out.extend_from_slice(b"\\0"),
            b => out.push(b),
        }
    }
    out.into()
}

/// Undo [`escape_slashes`]: `\0` becomes NUL, any other escaped byte stands
/// for itself and a trailing lone backslash is dropped.
#[must_use]
pub fn unescape_backslashes(s: &[u8]) -> BString {
    let mut out = Vec::with_capacity(s.len());
    let mut bytes = s.iter().copied();
    while let Some(b) = bytes.next() {
        if b != b'\\' {
            out.push(b);
            continue;
        }
        match bytes.next() {
            Some(b'0') => out.push(0),
            Some(c) => out.push(c),
            None => {}
        }
    }
    out.into()
}
