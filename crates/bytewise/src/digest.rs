//! Message digests.

use alloc::string::String;

use md5::{Digest, Md5};
use sha1::Sha1;

use crate::encode::encode_hex;

/// The 16-byte MD5 digest of `s`.
#[must_use]
pub fn md5(s: &[u8]) -> [u8; 16] {
    Md5::digest(s).into()
}

/// The MD5 digest of `s` as 32 lowercase hex digits.
///
/// ```rust
/// use bytewise::md5_hex;
///
/// assert_eq!(md5_hex(b""), "d41d8cd98f00b204e9800998ecf8427e");
/// ```
#[must_use]
pub fn md5_hex(s: &[u8]) -> String {
    encode_hex(&md5(s))
}

/// The 20-byte SHA-1 digest of `s`.
#[must_use]
pub fn sha1(s: &[u8]) -> [u8; 20] {
    Sha1::digest(s).into()
}

/// The SHA-1 digest of `s` as 40 lowercase hex digits.
#[must_use]
pub fn sha1_hex(s: &[u8]) -> String {
    encode_hex(&sha1(s))
}
