//! Percent-encoding for URLs and form data.

use alloc::{string::String, vec::Vec};

use bstr::BString;

const UPPER_HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Which bytes pass through unescaped and how a space is written.
#[derive(Clone, Copy)]
pub(crate) enum Flavor {
    /// `application/x-www-form-urlencoded`: space is `+`, `~` is escaped.
    Form,
    /// RFC 3986: space is `%20`, `~` is unreserved.
    Standard,
}

impl Flavor {
    fn unreserved(self, b: u8) -> bool {
        b.is_ascii_alphanumeric()
            || matches!(b, b'-' | b'_' | b'.')
            || (matches!(self, Self::Standard) && b == b'~')
    }
}

pub(crate) fn percent_encode_into(out: &mut String, s: &[u8], flavor: Flavor) {
    for &b in s {
        if flavor.unreserved(b) {
            out.push(char::from(b));
        } else if b == b' ' && matches!(flavor, Flavor::Form) {
            out.push('+');
        } else {
            out.push('%');
            out.push(char::from(UPPER_HEX[usize::from(b >> 4)]));
            out.push(char::from(UPPER_HEX[usize::from(b & 0x0F)]));
        }
    }
}

pub(crate) fn percent_decode(s: &[u8], flavor: Flavor) -> BString {
    let mut out = Vec::with_capacity(s.len());
    let mut i = 0;
    while i < s.len() {
        let b = s[i];
        if b == b'%' {
            if let Some(decoded) = s.get(i + 1..i + 3).and_then(|h| hex_pair(h[0], h[1])) {
                out.push(decoded);
                i += 3;
                continue;
            }
        }
        out.push(if b == b'+' && matches!(flavor, Flavor::Form) { b' ' } else { b });
        i += 1;
    }
    out.into()
}

fn hex_pair(hi: u8, lo: u8) -> Option<u8> {
    let hi = char::from(hi).to_digit(16)?;
    let lo = char::from(lo).to_digit(16)?;
    u8::try_from(hi << 4 | lo).ok()
}

/// Percent-encode `s` for a query component, writing spaces as `+`.
///
/// ASCII letters, digits, `-`, `_` and `.` are left as they are; every other
/// byte becomes `%XX` with uppercase hex digits.
///
/// ```rust
/// use bytewise::encode_url;
///
/// assert_eq!(encode_url(b"a b&c=d~"), "a+b%26c%3Dd%7E");
/// ```
#[must_use]
pub fn encode_url(s: &[u8]) -> String {
    let mut out = String::with_capacity(s.len());
    percent_encode_into(&mut out, s, Flavor::Form);
    out
}

/// Decode `%XX` escapes and `+` as space. Malformed escapes are kept as
/// they are.
#[must_use]
pub fn decode_url(s: &[u8]) -> BString {
    percent_decode(s, Flavor::Form)
}

/// Percent-encode `s` following RFC 3986: `~` is left as it is and spaces
/// become `%20`.
///
/// ```rust
/// use bytewise::encode_standard_url;
///
/// assert_eq!(encode_standard_url(b"a b&c=d~"), "a%20b%26c%3Dd~");
/// ```
#[must_use]
pub fn encode_standard_url(s: &[u8]) -> String {
    let mut out = String::with_capacity(s.len());
    percent_encode_into(&mut out, s, Flavor::Standard);
    out
}

/// Decode `%XX` escapes, leaving `+` alone. Malformed escapes are kept as
/// they are.
#[must_use]
pub fn decode_standard_url(s: &[u8]) -> BString {
    percent_decode(s, Flavor::Standard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_encoding() {
        assert_eq!(encode_url(b""), "");
        assert_eq!(encode_url(b"-_.AZaz09"), "-_.AZaz09");
        assert_eq!(encode_url(b"\x00\xFF/"), "%00%FF%2F");
        assert_eq!(decode_url(b"a+b%26c%3dd%7E"), "a b&c=d~");
        assert_eq!(decode_url(b"%zz%4"), "%zz%4");
        assert_eq!(decode_url(b"100%"), "100%");
    }

    #[test]
    fn standard_encoding() {
        assert_eq!(encode_standard_url(b"a+b c"), "a%2Bb%20c");
        assert_eq!(decode_standard_url(b"a+b%20c"), "a+b c");
        assert_eq!(decode_standard_url(b"%E2%98%BA"), "\u{263A}");
    }
}
