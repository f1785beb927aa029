#![no_main]

use arbitrary::Arbitrary;
use bytewise::{Bound, insert, replace_substring, resolve, slice, substring, substring_cmp};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    buffer: &'a [u8],
    new: &'a [u8],
    offset: isize,
    bound: Bound,
}

fuzz_target!(|input: Input<'_>| {
    let Input {
        buffer,
        new,
        offset,
        bound,
    } = input;
    let n = buffer.len();

    let range = resolve(n, offset, bound);
    assert!(range.start() <= n);
    assert!(range.len() <= n - range.start());
    if offset >= 0 && offset.unsigned_abs() >= n {
        assert_eq!((range.start(), range.len()), (n, 0));
    }

    let (length, end) = match bound {
        Bound::ToEnd => (None, None),
        Bound::Len(len) => (Some(len), None),
        Bound::End(end) => (None, Some(end)),
    };
    let part = match bound {
        Bound::End(_) => slice(buffer, offset, end),
        _ => substring(buffer, offset, length),
    };
    assert_eq!(part, &buffer[range.as_range()]);

    if !matches!(bound, Bound::End(_)) {
        assert_eq!(replace_substring(buffer, part, offset, length), buffer);
        let spliced = replace_substring(buffer, new, offset, length);
        assert_eq!(spliced.len(), n - range.len() + new.len());
        let _ = substring_cmp(buffer, offset, length, new);
    }

    let inserted = insert(buffer, new, offset);
    assert_eq!(inserted.len(), n + new.len());
});
