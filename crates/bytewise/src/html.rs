//! Escaping special HTML characters and stripping markup.

use alloc::vec::Vec;

use bstr::BString;

const QUOTE_ENTITY: (u8, &str) = (b'"', "&quot;");
const SPECIAL: [(u8, &str); 3] = [(b'&', "&amp;"), (b'<', "&lt;"), (b'>', "&gt;")];

fn entity(b: u8, quotes: bool) -> Option<&'static str> {
    if quotes && b == QUOTE_ENTITY.0 {
        return Some(QUOTE_ENTITY.1);
    }
    SPECIAL.iter().find(|(c, _)| *c == b).map(|(_, e)| *e)
}

/// Replace `&`, `<` and `>` with their HTML entities, and `"` too when
/// `quotes` is set. Single quotes are left alone.
///
/// ```rust
/// use bytewise::encode_html;
///
/// assert_eq!(encode_html(b"<a href=\"x\">&</a>", true),
///            "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
/// assert_eq!(encode_html(b"\"it's\"", false), "\"it's\"");
/// ```
#[must_use]
pub fn encode_html(s: &[u8], quotes: bool) -> BString {
    let mut out = Vec::with_capacity(s.len());
    for &b in s {
        match entity(b, quotes) {
            Some(e) => out.extend_from_slice(e.as_bytes()),
            None => out.push(b),
        }
    }
    out.into()
}

/// The replacements [`encode_html`] makes, ordered by byte.
#[must_use]
pub fn encode_html_dict(quotes: bool) -> Vec<(u8, &'static str)> {
    let mut dict: Vec<_> = SPECIAL.to_vec();
    if quotes {
        dict.push(QUOTE_ENTITY);
    }
    dict.sort_unstable_by_key(|&(b, _)| b);
    dict
}

const NAMED: [(&[u8], u8); 5] = [
    (b"amp", b'&'),
    (b"lt", b'<'),
    (b"gt", b'>'),
    (b"quot", b'"'),
    (b"apos", b'\''),
];

/// Decode the entities [`encode_html`] produces, `&apos;`, and decimal or
/// hexadecimal character references.
///
/// Character references are written out as UTF-8. References to code points
/// HTML does not allow in text (most control characters, surrogates and
/// noncharacters) and unknown named entities are left as they are.
///
/// ```rust
/// use bytewise::unencode_html;
///
/// assert_eq!(unencode_html(b"&lt;p&gt; &amp;amp; &#39;&#x263A;&#39;"), "<p> &amp; '\u{263A}'");
/// assert_eq!(unencode_html(b"&nbsp;&#0;"), "&nbsp;&#0;");
/// ```
#[must_use]
pub fn unencode_html(s: &[u8]) -> BString {
    let mut out = Vec::with_capacity(s.len());
    let mut i = 0;
    while i < s.len() {
        if s[i] == b'&' {
            if let Some((decoded, consumed)) = decode_reference(&s[i + 1..]) {
                out.extend_from_slice(decoded.encode_utf8(&mut [0; 4]).as_bytes());
                i += consumed + 1;
                continue;
            }
        }
        out.push(s[i]);
        i += 1;
    }
    out.into()
}

/// Decode the reference following an `&`, returning the character and how
/// many bytes it spans including the closing `;`.
fn decode_reference(s: &[u8]) -> Option<(char, usize)> {
    let end = s.iter().take(10).position(|&b| b == b';')?;
    let name = &s[..end];
    let c = if let Some(num) = name.strip_prefix(b"#") {
        let (digits, radix) = match num.first() {
            Some(b'x' | b'X') => (&num[1..], 16),
            _ => (num, 10),
        };
        if digits.is_empty() || !digits.iter().all(|b| char::from(*b).is_digit(radix)) {
            return None;
        }
        let code = digits
            .iter()
            .try_fold(0u32, |acc, &d| acc.checked_mul(radix)?.checked_add(char::from(d).to_digit(radix)?))?;
        allowed_reference(code)?
    } else {
        NAMED
            .iter()
            .find(|(entity, _)| *entity == name)
            .map(|&(_, b)| char::from(b))?
    };
    Some((c, end + 1))
}

fn allowed_reference(code: u32) -> Option<char> {
    let allowed = match code {
        0x09 | 0x0A | 0x0C | 0x0D | 0x20..=0x7E | 0xA0..=0xD7FF => true,
        0xE000..=0x10_FFFF => (code & 0xFFFF) < 0xFFFE && !(0xFDD0..=0xFDEF).contains(&code),
        _ => false,
    };
    if allowed { char::from_u32(code) } else { None }
}

#[derive(Clone, Copy)]
enum Markup {
    Text,
    Tag { depth: usize, quote: Option<u8> },
    Comment,
}

/// Remove HTML tags and comments from `s`, keeping the text between them.
///
/// A `<` followed by whitespace is ordinary text. Quoted attribute values may
/// contain `>`, and an unterminated tag (including a trailing `<`) runs to
/// the end of input and is dropped.
///
/// ```rust
/// use bytewise::strip_tags;
///
/// assert_eq!(strip_tags(b"<p>Hello <b>world</b></p>"), "Hello world");
/// assert_eq!(strip_tags(b"1 < 2 <!-- no -->ok"), "1 < 2 ok");
/// ```
#[must_use]
pub fn strip_tags(s: &[u8]) -> BString {
    let mut out = Vec::with_capacity(s.len());
    let mut state = Markup::Text;
    let mut i = 0;
    while i < s.len() {
        let b = s[i];
        state = match state {
            Markup::Text if b == b'<' => {
                if s[i..].starts_with(b"<!--") {
                    i += 3;
                    Markup::Comment
                } else if s.get(i + 1).is_some_and(u8::is_ascii_whitespace) {
                    out.push(b);
                    Markup::Text
                } else {
                    Markup::Tag { depth: 1, quote: None }
                }
            }
            Markup::Text => {
                out.push(b);
                Markup::Text
            }
            Markup::Tag { depth, quote: Some(q) } => Markup::Tag {
                depth,
                quote: (b != q).then_some(q),
            },
            Markup::Tag { depth, quote: None } => match b {
                b'"' | b'\'' => Markup::Tag { depth, quote: Some(b) },
                b'<' => Markup::Tag { depth: depth + 1, quote: None },
                b'>' if depth == 1 => Markup::Text,
                b'>' => Markup::Tag { depth: depth - 1, quote: None },
                _ => Markup::Tag { depth, quote: None },
            },
            Markup::Comment if s[i..].starts_with(b"-->") => {
                i += 2;
                Markup::Text
            }
            Markup::Comment => Markup::Comment,
        };
        i += 1;
    }
    out.into()
}
