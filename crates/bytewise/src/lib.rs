//! Byte-oriented string utilities.
//!
//! Every function in this crate is a pure operation over byte slices. Nothing
//! here assumes UTF-8: lengths, offsets and case mapping are all defined on
//! bytes, with ASCII as the only alphabet that has case.
//!
//! Positional operations ([`substring`], [`slice`], [`replace_substring`],
//! [`insert`], [`substring_cmp`], [`span`]) share one offset/length resolver,
//! [`resolve`], which turns negative or out-of-range arguments into an
//! in-bounds [`ResolvedRange`] instead of failing.
//!
//! Functions that can fail to find something return [`Option`]; `None` is
//! always distinct from `Some("")`.
//!
//! ```rust
//! use bytewise::{after, before, find, slice, substring};
//!
//! assert_eq!(substring(b"abcdef", -4, Some(2)), "cd");
//! assert_eq!(slice(b"abcdef", 0, Some(-2)), "abcd");
//! assert_eq!(find(b"abcdef", b"de", 2), Some(3));
//! assert_eq!(find(b"abcdef", b"", 7), None);
//! assert_eq!(before(b"abc/def", b"/"), "abc");
//! assert_eq!(after(b"abc", b"/"), "abc");
//! ```

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod bytes;
mod case;
mod charset;
mod compare;
mod csv;
mod ctype;
mod digest;
mod encode;
mod error;
mod escape;
mod html;
mod layout;
mod number;
mod position;
mod query;
mod range;
mod replace;
mod search;
mod split;
mod text;
mod url;

#[cfg(feature = "std")]
pub mod capture;

#[cfg(test)]
mod tests;

pub use bstr::{BStr, BString, ByteSlice};
pub use bytes::{byte_frequencies, from_ascii, length, shuffle, to_ascii, unique, unused_bytes};
pub use case::{lcfirst, lower, rot13, ucfirst, ucwords, upper};
pub use charset::CharSet;
pub use compare::{
    ByteOrder, Collate, cmp, equal, human_cmp, icmp, iequal, ihuman_cmp, incmp,
    isubstring_cmp, locale_cmp, locale_cmp_with, ncmp, substring_cmp,
};
pub use csv::{CsvOptions, parse_csv};
pub use ctype::{
    is_alphabetic, is_alphanumeric, is_control, is_decimal, is_hex, is_lower, is_printable,
    is_punctuation, is_upper, is_visible, is_whitespace,
};
pub use digest::{md5, md5_hex, sha1, sha1_hex};
pub use encode::{decode_base64, decode_hex, encode_base64, encode_hex};
pub use error::Error;
pub use escape::{
    add_cslashes, escape_c_string, escape_slashes, unescape_backslashes, unescape_c_string,
};
pub use html::{encode_html, encode_html_dict, strip_tags, unencode_html};
pub use layout::{
    lpad, ltrim, pad, repeat, reverse, rpad, rtrim, trim, word_wrap, wrap,
};
#[cfg(feature = "std")]
pub use number::{MAX_DECIMALS, NumberFormat, format_number};
pub use number::{parse_int, parse_real};
pub use position::{insert, replace_slice, replace_substring, slice, substring};
pub use query::{QueryEncoding, QueryTable, QueryValue, encode_query_string, parse_query_string};
pub use range::{Bound, ResolvedRange, resolve};
pub use replace::{
    ireplace, ireplace_count, replace, replace_count, replace_multiple, translate,
};
pub use search::{
    after, before, begins_with, contains, contains_char, contains_chars, count, ends_with,
    find, ibegins_with, icontains, iends_with, ifind, ipreceding, iremove_prefix, iremove_suffix,
    istarting_with, preceding, remove_prefix, remove_suffix, rfind, rstarting_with, span,
    starting_with, starting_with_chars,
};
pub use split::{
    chars, chunks, find_words, join, split, split_camel_case, tokenize, word_count, words,
};
pub use text::{LevenshteinCosts, levenshtein, levenshtein_with, pluralize};
pub use url::{decode_standard_url, decode_url, encode_standard_url, encode_url};
