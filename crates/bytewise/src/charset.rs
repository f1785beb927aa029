//! Byte sets described by character lists.

use core::fmt;

/// A set of byte values.
///
/// Sets are usually built with [`CharSet::parse`] from a character list such
/// as `b"abc"` or `b"a..z0..9_"`, where `x..y` denotes the inclusive range of
/// bytes from `x` to `y`. A `..` that cannot form a range (at either end of
/// the list, or with a start greater than its end) is taken literally.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct CharSet {
    bits: [u64; 4],
}

impl CharSet {
    /// The empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { bits: [0; 4] }
    }

    /// The set of exactly the listed bytes, without range syntax.
    #[must_use]
    pub fn of(bytes: &[u8]) -> Self {
        let mut set = Self::new();
        for &b in bytes {
            set.insert(b);
        }
        set
    }

    /// Parse a character list with `x..y` ranges.
    ///
    /// ```rust
    /// use bytewise::CharSet;
    ///
    /// let set = CharSet::parse(b"a..c_");
    /// assert!(set.contains(b'b'));
    /// assert!(set.contains(b'_'));
    /// assert!(!set.contains(b'd'));
    /// ```
    #[must_use]
    pub fn parse(list: &[u8]) -> Self {
        let mut set = Self::new();
        let mut i = 0;
        while i < list.len() {
            let c = list[i];
            let is_range = i + 3 < list.len()
                && list[i + 1] == b'.'
                && list[i + 2] == b'.'
                && list[i + 3] >= c;
            if is_range {
                for b in c..=list[i + 3] {
                    set.insert(b);
                }
                i += 4;
            } else {
                set.insert(c);
                i += 1;
            }
        }
        set
    }

    /// Add a byte to the set.
    pub fn insert(&mut self, b: u8) {
        self.bits[usize::from(b >> 6)] |= 1 << (b & 63);
    }

    /// Whether the set contains a byte.
    #[must_use]
    pub const fn contains(&self, b: u8) -> bool {
        self.bits[(b >> 6) as usize] & (1 << (b & 63)) != 0
    }

    /// Whether no byte is in the set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bits[0] | self.bits[1] | self.bits[2] | self.bits[3] == 0
    }

    /// Iterate over the members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(|&b| self.contains(b))
    }
}

impl fmt::Debug for CharSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.iter().map(char::from))
            .finish()
    }
}

/// ASCII whitespace as recognized by C's `isspace`.
pub(crate) const WHITESPACE: &[u8] = b" \t\n\r\x0B\x0C";
