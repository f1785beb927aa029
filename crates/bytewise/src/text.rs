//! Edit distance and English inflection.

use alloc::vec::Vec;

use bstr::BString;

/// Per-operation costs for [`levenshtein_with`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevenshteinCosts {
    /// Cost of inserting one byte.
    ///
    /// # Default
    ///
    /// `1`
    pub insert: usize,
    /// Cost of replacing one byte with another.
    ///
    /// # Default
    ///
    /// `1`
    pub replace: usize,
    /// Cost of deleting one byte.
    ///
    /// # Default
    ///
    /// `1`
    pub delete: usize,
}

impl Default for LevenshteinCosts {
    fn default() -> Self {
        Self {
            insert: 1,
            replace: 1,
            delete: 1,
        }
    }
}

/// The minimum number of byte insertions, replacements and deletions that
/// turn `a` into `b`.
///
/// ```rust
/// use bytewise::levenshtein;
///
/// assert_eq!(levenshtein(b"kitten", b"sitting"), 3);
/// ```
#[must_use]
pub fn levenshtein(a: &[u8], b: &[u8]) -> usize {
    levenshtein_with(a, b, &LevenshteinCosts::default())
}

/// Like [`levenshtein`] with custom costs for each kind of edit.
#[must_use]
pub fn levenshtein_with(a: &[u8], b: &[u8], costs: &LevenshteinCosts) -> usize {
    if a.is_empty() {
        return b.len().saturating_mul(costs.insert);
    }
    if b.is_empty() {
        return a.len().saturating_mul(costs.delete);
    }

    let mut prev: Vec<usize> = (0..=b.len()).map(|j| j.saturating_mul(costs.insert)).collect();
    let mut cur = alloc::vec![0; b.len() + 1];
    for &x in a {
        cur[0] = prev[0].saturating_add(costs.delete);
        for (j, &y) in b.iter().enumerate() {
            let replace = prev[j].saturating_add(if x == y { 0 } else { costs.replace });
            let delete = prev[j + 1].saturating_add(costs.delete);
            let insert = cur[j].saturating_add(costs.insert);
            cur[j + 1] = replace.min(delete).min(insert);
        }
        core::mem::swap(&mut prev, &mut cur);
    }
    prev[b.len()]
}

/// Naive English plural (or third person singular) of a word.
///
/// A consonant followed by `y` becomes `-ies`; sibilant endings (`-s`, `-z`,
/// `-x`, `-j`, `-sh`, `-zh`, and `-ch` after a consonant) take `-es`;
/// everything else takes `-s`. Irregular forms are not handled.
///
/// ```rust
/// use bytewise::pluralize;
///
/// assert_eq!(pluralize(b"city"), "cities");
/// assert_eq!(pluralize(b"boy"), "boys");
/// assert_eq!(pluralize(b"church"), "churches");
/// assert_eq!(pluralize(b"cat"), "cats");
/// ```
#[must_use]
pub fn pluralize(s: &[u8]) -> BString {
    const VOWELS: &[u8] = b"aeiou";

    let mut out = s.to_vec();
    match s {
        [.., c, b'y'] if !VOWELS.contains(c) => {
            out.pop();
            out.extend_from_slice(b"ies");
        }
        [.., c, b'c', b'h'] if !VOWELS.contains(c) && *c != b'y' => out.extend_from_slice(b"es"),
        [.., b's' | b'z', b'h'] | [.., b's' | b'z' | b'x' | b'j'] => out.extend_from_slice(b"es"),
        _ => out.push(b's'),
    }
    out.into()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(b"", b"", 0)]
    #[case(b"", b"abc", 3)]
    #[case(b"abc", b"", 3)]
    #[case(b"abc", b"abc", 0)]
    #[case(b"abc", b"abd", 1)]
    #[case(b"flaw", b"lawn", 2)]
    #[case(b"kitten", b"sitting", 3)]
    fn distances(#[case] a: &[u8], #[case] b: &[u8], #[case] expected: usize) {
        assert_eq!(levenshtein(a, b), expected);
        assert_eq!(levenshtein(b, a), expected);
    }

    #[test]
    fn weighted_distances() {
        let costs = LevenshteinCosts {
            insert: 1,
            replace: 10,
            delete: 1,
        };
        // A replacement is cheaper as a deletion plus an insertion.
        assert_eq!(levenshtein_with(b"abc", b"abd", &costs), 2);
        assert_eq!(levenshtein_with(b"", b"ab", &costs), 2);

        let expensive_inserts = LevenshteinCosts {
            insert: 5,
            ..LevenshteinCosts::default()
        };
        assert_eq!(levenshtein_with(b"a", b"ab", &expensive_inserts), 5);
        assert_eq!(levenshtein_with(b"ab", b"a", &expensive_inserts), 1);
    }

    #[rstest]
    #[case(b"", "s")]
    #[case(b"y", "ys")]
    #[case(b"fly", "flies")]
    #[case(b"day", "days")]
    #[case(b"yy", "yies")]
    #[case(b"bus", "buses")]
    #[case(b"box", "boxes")]
    #[case(b"buzz", "buzzes")]
    #[case(b"dish", "dishes")]
    #[case(b"watch", "watches")]
    #[case(b"stomach", "stomachs")]
    #[case(b"ch", "chs")]
    #[case(b"beach", "beachs")]
    #[case(b"psych", "psychs")]
    #[case(b"dog", "dogs")]
    fn plurals(#[case] s: &[u8], #[case] expected: &str) {
        assert_eq!(pluralize(s), expected);
    }
}
