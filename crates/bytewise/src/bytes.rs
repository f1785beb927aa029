//! Whole-string byte statistics and single-byte conversions.

use alloc::vec::Vec;

use bstr::BString;
use rand::{Rng, seq::SliceRandom};

/// Number of bytes in `s`.
#[must_use]
pub fn length(s: &[u8]) -> usize {
    s.len()
}

/// The byte with the given code. Codes outside `0..=255` wrap modulo 256,
/// so `-1` is `0xFF`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn from_ascii(code: i64) -> u8 {
    code.rem_euclid(256) as u8
}

/// Code of the first byte of `s`, or 0 when `s` is empty.
#[must_use]
pub fn to_ascii(s: &[u8]) -> u8 {
    s.first().copied().unwrap_or(0)
}

/// How often each byte value occurs in `s`, indexed by byte.
#[must_use]
pub fn byte_frequencies(s: &[u8]) -> [usize; 256] {
    let mut counts = [0; 256];
    for &b in s {
        counts[usize::from(b)] += 1;
    }
    counts
}

/// The distinct bytes of `s`, in ascending order.
#[must_use]
pub fn unique(s: &[u8]) -> BString {
    collect_where(s, |n| n > 0)
}

/// The bytes that never occur in `s`, in ascending order.
#[must_use]
pub fn unused_bytes(s: &[u8]) -> BString {
    collect_where(s, |n| n == 0)
}

fn collect_where(s: &[u8], keep: impl Fn(usize) -> bool) -> BString {
    (0..=u8::MAX)
        .zip(byte_frequencies(s))
        .filter(|&(_, n)| keep(n))
        .map(|(b, _)| b)
        .collect::<Vec<u8>>()
        .into()
}

/// A random permutation of the bytes of `s`.
///
/// ```rust
/// use rand::{SeedableRng, rngs::SmallRng};
/// use bytewise::shuffle;
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let mut out = shuffle(b"abcdef", &mut rng).to_vec();
/// out.sort_unstable();
/// assert_eq!(out, b"abcdef");
/// ```
pub fn shuffle<R: Rng + ?Sized>(s: &[u8], rng: &mut R) -> BString {
    let mut out = s.to_vec();
    out.shuffle(rng);
    out.into()
}
