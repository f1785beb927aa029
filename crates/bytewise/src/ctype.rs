//! ASCII character class predicates over whole strings.
//!
//! Each predicate is true when the string is non-empty and every byte
//! belongs to the class. The empty string belongs to no class.

fn all(s: &[u8], class: impl Fn(u8) -> bool) -> bool {
    !s.is_empty() && s.iter().all(|&b| class(b))
}

/// Every byte is an ASCII letter or digit.
#[must_use]
pub fn is_alphanumeric(s: &[u8]) -> bool {
    all(s, |b| b.is_ascii_alphanumeric())
}

/// Every byte is an ASCII letter.
#[must_use]
pub fn is_alphabetic(s: &[u8]) -> bool {
    all(s, |b| b.is_ascii_alphabetic())
}

/// Every byte is an ASCII control character.
#[must_use]
pub fn is_control(s: &[u8]) -> bool {
    all(s, |b| b.is_ascii_control())
}

/// Every byte is a decimal digit.
#[must_use]
pub fn is_decimal(s: &[u8]) -> bool {
    all(s, |b| b.is_ascii_digit())
}

/// Every byte is a hexadecimal digit.
#[must_use]
pub fn is_hex(s: &[u8]) -> bool {
    all(s, |b| b.is_ascii_hexdigit())
}

/// Every byte is printable and not a space.
#[must_use]
pub fn is_visible(s: &[u8]) -> bool {
    all(s, |b| b.is_ascii_graphic())
}

/// Every byte is an ASCII lowercase letter.
#[must_use]
pub fn is_lower(s: &[u8]) -> bool {
    all(s, |b| b.is_ascii_lowercase())
}

/// Every byte is an ASCII uppercase letter.
#[must_use]
pub fn is_upper(s: &[u8]) -> bool {
    all(s, |b| b.is_ascii_uppercase())
}

/// Every byte is printable, space included.
#[must_use]
pub fn is_printable(s: &[u8]) -> bool {
    all(s, |b| b == b' ' || b.is_ascii_graphic())
}

/// Every byte is printable but neither a space nor alphanumeric.
#[must_use]
pub fn is_punctuation(s: &[u8]) -> bool {
    all(s, |b| b.is_ascii_punctuation())
}

/// Every byte is whitespace: space, tab, newline, carriage return, vertical
/// tab or form feed.
#[must_use]
pub fn is_whitespace(s: &[u8]) -> bool {
    all(s, |b| crate::charset::WHITESPACE.contains(&b))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(is_alphanumeric, b"abc123", b"abc 123")]
    #[case(is_alphabetic, b"abcXYZ", b"abc1")]
    #[case(is_control, b"\x00\x1F\x7F", b"\x00a")]
    #[case(is_decimal, b"0123456789", b"12.5")]
    #[case(is_hex, b"09afAF", b"0x1F")]
    #[case(is_visible, b"a!~", b"a b")]
    #[case(is_lower, b"abc", b"aBc")]
    #[case(is_upper, b"ABC", b"ABc")]
    #[case(is_printable, b"a b!", b"a\tb")]
    #[case(is_punctuation, b"!@#", b"!a")]
    #[case(is_whitespace, b"\n\n\t ", b" x ")]
    fn classes(#[case] class: fn(&[u8]) -> bool, #[case] member: &[u8], #[case] outsider: &[u8]) {
        assert!(class(member));
        assert!(!class(outsider));
        assert!(!class(b""));
        assert!(!class(b"\x80"));
    }
}
