//! Hex and base64 transfer encodings.

use alloc::{string::String, vec::Vec};

use base64::{Engine, engine::general_purpose::STANDARD};
use bstr::BString;

use crate::error::Error;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Lowercase hexadecimal representation of `s`, two digits per byte.
///
/// ```rust
/// use bytewise::encode_hex;
///
/// assert_eq!(encode_hex(b"\x01\xAB"), "01ab");
/// ```
#[must_use]
pub fn encode_hex(s: &[u8]) -> String {
    let mut out = String::with_capacity(s.len() * 2);
    for &b in s {
        out.push(char::from(HEX_DIGITS[usize::from(b >> 4)]));
        out.push(char::from(HEX_DIGITS[usize::from(b & 0x0F)]));
    }
    out
}

/// Decode hexadecimal digits of either case.
///
/// # Errors
///
/// [`Error::InvalidHex`] carries the input length when it is odd, or the
/// offset of the first byte that is not a hex digit.
pub fn decode_hex(s: &[u8]) -> Result<BString, Error> {
    if s.len() % 2 != 0 {
        tracing::debug!(len = s.len(), "odd-length hex input");
        return Err(Error::InvalidHex(s.len()));
    }
    let mut out = Vec::with_capacity(s.len() / 2);
    for (i, pair) in s.chunks_exact(2).enumerate() {
        let digit = |at: usize| {
            char::from(pair[at])
                .to_digit(16)
                .ok_or(Error::InvalidHex(2 * i + at))
        };
        let (hi, lo) = (digit(0)?, digit(1)?);
        #[allow(clippy::cast_possible_truncation)]
        out.push((hi << 4 | lo) as u8);
    }
    Ok(out.into())
}

/// Standard (RFC 4648, padded) base64 encoding of `s`.
#[must_use]
pub fn encode_base64(s: &[u8]) -> String {
    STANDARD.encode(s)
}

/// Decode standard padded base64.
///
/// # Errors
///
/// [`Error::InvalidBase64`] when `s` is not valid base64.
pub fn decode_base64(s: &[u8]) -> Result<BString, Error> {
    STANDARD.decode(s).map(BString::from).map_err(|err| {
        tracing::debug!(%err, "rejected base64 input");
        Error::from(err)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex() {
        assert_eq!(encode_hex(b""), "");
        assert_eq!(encode_hex(b"abc\xFF"), "616263ff");
        assert_eq!(decode_hex(b"616263FF").unwrap(), b"abc\xFF".as_slice());
        assert_eq!(decode_hex(b"").unwrap(), "");
    }

    #[test]
    fn malformed_hex() {
        assert_eq!(decode_hex(b"abc"), Err(Error::InvalidHex(3)));
        assert_eq!(decode_hex(b"00zz"), Err(Error::InvalidHex(2)));
        assert_eq!(decode_hex(b"0z"), Err(Error::InvalidHex(1)));
    }

    #[test]
    fn base64() {
        assert_eq!(encode_base64(b"Hello, world!"), "SGVsbG8sIHdvcmxkIQ==");
        assert_eq!(encode_base64(b""), "");
        assert_eq!(decode_base64(b"SGVsbG8sIHdvcmxkIQ==").unwrap(), "Hello, world!");
        assert!(matches!(decode_base64(b"!!!"), Err(Error::InvalidBase64(_))));
    }
}
