//! Offset/length normalization shared by every positional operation.
//!
//! Callers describe a region of a buffer the way scripting languages do: an
//! offset that may be negative (counted from the end) and a second argument
//! that is either absent, a byte count, or an exclusive end index. [`resolve`]
//! reconciles these conventions into a [`ResolvedRange`] that is always in
//! bounds. Nothing in this module can panic or overflow: the arithmetic is
//! carried out in `i128`, which holds every `usize`/`isize` sum and difference
//! we form.

use core::ops::Range;

/// How the argument following an offset is interpreted.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bound {
    /// The range runs to the end of the buffer.
    #[default]
    ToEnd,
    /// A byte count. Negative counts select nothing.
    ///
    /// When the offset points before the start of the buffer, the part of the
    /// count that lies before the start is consumed, so `(-7, Len(3))` on a
    /// six byte buffer selects two bytes.
    Len(isize),
    /// An exclusive end index. Negative indexes count from the end of the
    /// buffer. An end at or before the start selects nothing.
    End(isize),
}

/// An in-bounds region of a buffer of known length.
///
/// `start <= n` and `start + len <= n` hold for the `n` the range was resolved
/// against. An empty range still carries a meaningful `start`: replace-style
/// operations insert there.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRange {
    start: usize,
    len: usize,
}

impl ResolvedRange {
    const fn empty_at(start: usize) -> Self {
        Self { start, len: 0 }
    }

    /// First byte of the range.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Number of bytes in the range.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// One past the last byte of the range.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.start + self.len
    }

    /// Whether the range selects no bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The range as a slice index.
    #[must_use]
    pub const fn as_range(&self) -> Range<usize> {
        self.start..self.end()
    }
}

/// Resolve `offset` and `bound` against a buffer of `n` bytes.
///
/// - An offset at or past the end yields the empty range at `n`.
/// - A negative offset counts from the end and is clamped to the start.
/// - [`Bound::ToEnd`] selects everything from the start position.
/// - [`Bound::Len`] selects at most that many bytes.
/// - [`Bound::End`] selects up to an exclusive end index.
///
/// ```rust
/// use bytewise::{Bound, resolve};
///
/// let r = resolve(6, -4, Bound::End(-2));
/// assert_eq!(r.as_range(), 2..4);
///
/// let r = resolve(6, 1000, Bound::Len(3));
/// assert_eq!((r.start(), r.len()), (6, 0));
///
/// let r = resolve(6, -1000, Bound::End(-100));
/// assert_eq!((r.start(), r.len()), (0, 0));
/// ```
#[must_use]
pub fn resolve(n: usize, offset: isize, bound: Bound) -> ResolvedRange {
    let size = widen(n);
    let offset = widen_signed(offset);
    if offset >= size {
        return ResolvedRange::empty_at(n);
    }

    let origin = origin_of(size, offset);
    let start = origin.max(0);
    let wanted = match bound {
        Bound::ToEnd => size - start,
        Bound::Len(len) => {
            let len = widen_signed(len);
            if origin < 0 { len + origin } else { len }
        }
        Bound::End(end) => end_of(size, widen_signed(end)) - start,
    };
    let len = wanted.clamp(0, size - start);

    ResolvedRange {
        start: narrow(start),
        len: narrow(len),
    }
}

/// Position an offset denotes before clamping; negative when the offset
/// reaches past the start of the buffer.
pub(crate) fn origin_of(size: i128, offset: i128) -> i128 {
    if offset < 0 { size + offset } else { offset }
}

fn end_of(size: i128, end: i128) -> i128 {
    if end < 0 { size + end } else { end }
}

#[allow(clippy::cast_lossless, clippy::cast_possible_wrap)]
pub(crate) const fn widen(n: usize) -> i128 {
    n as i128
}

#[allow(clippy::cast_lossless)]
pub(crate) const fn widen_signed(n: isize) -> i128 {
    n as i128
}

/// Narrow a value already known to lie in `0..=usize::MAX`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) const fn narrow(n: i128) -> usize {
    debug_assert!(n >= 0);
    n as usize
}

/// Length of a slice as an `isize`, for callers that build negative offsets
/// from lengths. Slice lengths never exceed `isize::MAX`.
pub(crate) fn signed_len(bytes: &[u8]) -> isize {
    isize::try_from(bytes.len()).unwrap_or(isize::MAX)
}
