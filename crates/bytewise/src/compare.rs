//! Lexicographic, truncated, natural and collated comparison.

use core::cmp::Ordering;

use crate::range::{origin_of, widen, widen_signed};

/// Byte-wise lexicographic comparison.
#[must_use]
pub fn cmp(a: &[u8], b: &[u8]) -> Ordering {
    a.cmp(b)
}

/// Like [`cmp`] but ASCII case-insensitive.
#[must_use]
pub fn icmp(a: &[u8], b: &[u8]) -> Ordering {
    folded(a).cmp(folded(b))
}

/// Like [`cmp`] but only the first `n` bytes of each side take part.
///
/// ```rust
/// use core::cmp::Ordering;
/// use bytewise::ncmp;
///
/// assert_eq!(ncmp(b"abc", b"abcdef", 3), Ordering::Equal);
/// assert_eq!(ncmp(b"abc", b"abcdef", 5), Ordering::Less);
/// ```
#[must_use]
pub fn ncmp(a: &[u8], b: &[u8], n: usize) -> Ordering {
    truncated(a, n).cmp(truncated(b, n))
}

/// Like [`ncmp`] but ASCII case-insensitive.
#[must_use]
pub fn incmp(a: &[u8], b: &[u8], n: usize) -> Ordering {
    folded(truncated(a, n)).cmp(folded(truncated(b, n)))
}

/// Whether two strings are byte-for-byte equal.
#[must_use]
pub fn equal(a: &[u8], b: &[u8]) -> bool {
    a == b
}

/// Whether two strings are equal ignoring ASCII case.
#[must_use]
pub fn iequal(a: &[u8], b: &[u8]) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Compare part of `a`, starting at `offset`, with `b`.
///
/// The comparison window starts at `offset` (negative counts from the end)
/// and spans `length` bytes, or runs to the end of `a` when `length` is
/// `None`. Both `a`'s window and `b` are truncated to the window size before
/// comparing, so a window longer than what remains of `a` still lets a longer
/// `b` compare greater. A window reaching before the start of `a` loses the
/// bytes that fall outside.
///
/// An empty window compares equal only to an empty `b`, and less than
/// anything else. This holds for an empty `a` at any offset.
///
/// ```rust
/// use core::cmp::Ordering;
/// use bytewise::substring_cmp;
///
/// assert_eq!(substring_cmp(b"xabcx", 1, Some(3), b"abc"), Ordering::Equal);
/// assert_eq!(substring_cmp(b"xxabc", 2, Some(5), b"abcd"), Ordering::Less);
/// assert_eq!(substring_cmp(b"abcxx", -7, Some(5), b"abc"), Ordering::Equal);
/// assert_eq!(substring_cmp(b"", -3, None, b"abc"), Ordering::Less);
/// ```
#[must_use]
pub fn substring_cmp(a: &[u8], offset: isize, length: Option<isize>, b: &[u8]) -> Ordering {
    window_cmp(a, offset, length, b, false)
}

/// Like [`substring_cmp`] but ASCII case-insensitive.
#[must_use]
pub fn isubstring_cmp(a: &[u8], offset: isize, length: Option<isize>, b: &[u8]) -> Ordering {
    window_cmp(a, offset, length, b, true)
}

fn window_cmp(a: &[u8], offset: isize, length: Option<isize>, b: &[u8], fold: bool) -> Ordering {
    let size = widen(a.len());
    let origin = origin_of(size, widen_signed(offset));
    let window = match length {
        None => size - origin,
        Some(len) if origin < 0 => (widen_signed(len) + origin).max(0),
        Some(len) => widen_signed(len),
    };

    if window <= 0 || origin >= size || a.is_empty() {
        return if b.is_empty() {
            Ordering::Equal
        } else {
            Ordering::Less
        };
    }

    // Both are in range here: 0 <= start < a.len() and 0 < window.
    let start = usize::try_from(origin.max(0)).unwrap_or_default();
    let window = usize::try_from(window).unwrap_or(usize::MAX);
    if fold {
        incmp(&a[start..], b, window)
    } else {
        ncmp(&a[start..], b, window)
    }
}

/// Compare strings in "natural" order, where runs of digits compare by
/// numeric value and leading whitespace is ignored.
///
/// ```rust
/// use core::cmp::Ordering;
/// use bytewise::human_cmp;
///
/// assert_eq!(human_cmp(b"test9", b"test10"), Ordering::Less);
/// assert_eq!(human_cmp(b"img12", b"img012"), Ordering::Greater);
/// ```
#[must_use]
pub fn human_cmp(a: &[u8], b: &[u8]) -> Ordering {
    natural_cmp(a, b, false)
}

/// Like [`human_cmp`] but ASCII case-insensitive.
#[must_use]
pub fn ihuman_cmp(a: &[u8], b: &[u8]) -> Ordering {
    natural_cmp(a, b, true)
}

fn natural_cmp(a: &[u8], b: &[u8], fold: bool) -> Ordering {
    let (mut i, mut j) = (0, 0);
    loop {
        while a.get(i).is_some_and(u8::is_ascii_whitespace) {
            i += 1;
        }
        while b.get(j).is_some_and(u8::is_ascii_whitespace) {
            j += 1;
        }

        let ca = a.get(i).copied();
        let cb = b.get(j).copied();
        match (ca, cb) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                // A leading zero makes the run compare digit by digit, like a
                // fraction; otherwise the longer run is the larger number.
                let ord = if x == b'0' || y == b'0' {
                    compare_left(&a[i..], &b[j..])
                } else {
                    compare_right(&a[i..], &b[j..])
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            _ => {}
        }

        let (mut x, mut y) = (a[i], b[j]);
        if fold {
            x = x.to_ascii_uppercase();
            y = y.to_ascii_uppercase();
        }
        match x.cmp(&y) {
            Ordering::Equal => {
                i += 1;
                j += 1;
            }
            ord => return ord,
        }
    }
}

fn compare_right(a: &[u8], b: &[u8]) -> Ordering {
    let mut bias = Ordering::Equal;
    let mut k = 0;
    loop {
        let da = a.get(k).filter(|c| c.is_ascii_digit());
        let db = b.get(k).filter(|c| c.is_ascii_digit());
        match (da, db) {
            (None, None) => return bias,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                if bias == Ordering::Equal {
                    bias = x.cmp(y);
                }
            }
        }
        k += 1;
    }
}

fn compare_left(a: &[u8], b: &[u8]) -> Ordering {
    let mut k = 0;
    loop {
        let da = a.get(k).filter(|c| c.is_ascii_digit());
        let db = b.get(k).filter(|c| c.is_ascii_digit());
        match (da, db) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x != y => return x.cmp(y),
            _ => {}
        }
        k += 1;
    }
}

/// A locale's string ordering.
///
/// The crate does not read process locale state; callers that need a
/// language-specific order supply their own collator.
pub trait Collate {
    /// Compare two strings under this collation.
    fn collate(&self, a: &[u8], b: &[u8]) -> Ordering;
}

/// The `C`/`POSIX` locale: plain byte order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByteOrder;

impl Collate for ByteOrder {
    fn collate(&self, a: &[u8], b: &[u8]) -> Ordering {
        a.cmp(b)
    }
}

impl<F> Collate for F
where
    F: Fn(&[u8], &[u8]) -> Ordering,
{
    fn collate(&self, a: &[u8], b: &[u8]) -> Ordering {
        self(a, b)
    }
}

/// Compare under the default `C` locale.
#[must_use]
pub fn locale_cmp(a: &[u8], b: &[u8]) -> Ordering {
    ByteOrder.collate(a, b)
}

/// Compare under a caller-provided collation.
#[must_use]
pub fn locale_cmp_with<C: Collate + ?Sized>(collator: &C, a: &[u8], b: &[u8]) -> Ordering {
    collator.collate(a, b)
}

fn truncated(s: &[u8], n: usize) -> &[u8] {
    &s[..s.len().min(n)]
}

/// Lazily ASCII-lowercased bytes, comparable without allocating.
fn folded(s: &[u8]) -> impl Iterator<Item = u8> + '_ {
    s.iter().map(u8::to_ascii_lowercase)
}
