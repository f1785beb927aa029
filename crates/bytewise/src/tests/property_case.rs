use alloc::vec::Vec;

use quickcheck_macros::quickcheck;

use crate::{lower, reverse, rot13, upper};

#[quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn case_mapping_is_idempotent(s: Vec<u8>) -> bool {
    upper(&lower(&s)) == upper(&s) && lower(&upper(&s)) == lower(&s)
}

#[quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn case_mapping_keeps_non_letters(s: Vec<u8>) -> bool {
    let unchanged = |a: &[u8], b: &[u8]| {
        a.iter()
            .zip(b)
            .all(|(x, y)| x.is_ascii_alphabetic() || x == y)
    };
    let (low, up) = (lower(&s), upper(&s));
    low.len() == s.len() && unchanged(&s, &low) && unchanged(&s, &up)
}

#[quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn involutions(s: Vec<u8>) -> bool {
    rot13(&rot13(&s)) == s.as_slice() && reverse(&reverse(&s)) == s.as_slice()
}
