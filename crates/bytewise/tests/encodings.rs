#![expect(missing_docs)]
#![expect(clippy::needless_raw_string_hashes)]

use core::fmt::Write;

use bytewise::{
    CsvOptions, Error, QueryEncoding, QueryValue, decode_base64, decode_hex, decode_standard_url,
    decode_url, encode_base64, encode_hex, encode_html, encode_query_string, encode_standard_url,
    encode_url, escape_c_string, escape_slashes, md5_hex, parse_csv, parse_query_string,
    sha1_hex, strip_tags, unencode_html, unescape_backslashes, unescape_c_string,
};

const SAMPLE: &[u8] = br#"a&b "c"<d>"#;

fn render_encodings(s: &[u8]) -> String {
    let mut out = String::new();
    writeln!(out, "url: {}", encode_url(s)).unwrap();
    writeln!(out, "standard_url: {}", encode_standard_url(s)).unwrap();
    writeln!(out, "html: {}", encode_html(s, true)).unwrap();
    writeln!(out, "c_string: {}", escape_c_string(s)).unwrap();
    writeln!(out, "slashes: {}", escape_slashes(s)).unwrap();
    writeln!(out, "hex: {}", encode_hex(s)).unwrap();
    writeln!(out, "base64: {}", encode_base64(s)).unwrap();
    writeln!(out, "md5: {}", md5_hex(s)).unwrap();
    writeln!(out, "sha1: {}", sha1_hex(s)).unwrap();
    out
}

#[test]
fn snapshot_encodings() {
    insta::assert_snapshot!(render_encodings(SAMPLE), @r#"
    url: a%26b+%22c%22%3Cd%3E
    standard_url: a%26b%20%22c%22%3Cd%3E
    html: a&amp;b &quot;c&quot;&lt;d&gt;
    c_string: a&b \"c\"<d>
    slashes: a&b \"c\"<d>
    hex: 612662202263223c643e
    base64: YSZiICJjIjxkPg==
    md5: 44dd5aff804ec676bb88cc5168ce652a
    sha1: d21a8711b765cf9ae42c4bd2d415fa53efa9e5cd
    "#);
}

#[test]
fn every_encoding_reverses() {
    let all_bytes: Vec<u8> = (0..=255).collect();
    for s in [SAMPLE, b"", b"\\\\0\0\n\x0B'~+%", all_bytes.as_slice()] {
        assert_eq!(decode_url(encode_url(s).as_bytes()), s);
        assert_eq!(decode_standard_url(encode_standard_url(s).as_bytes()), s);
        assert_eq!(unescape_c_string(&escape_c_string(s)), s);
        assert_eq!(unescape_backslashes(&escape_slashes(s)), s);
        assert_eq!(decode_hex(encode_hex(s).as_bytes()).unwrap(), s);
        assert_eq!(decode_base64(encode_base64(s).as_bytes()).unwrap(), s);
    }
    assert_eq!(unencode_html(&encode_html(SAMPLE, true)), SAMPLE);
}

#[test]
fn malformed_input_is_rejected() {
    assert_eq!(decode_hex(b"abc"), Err(Error::InvalidHex(3)));
    assert_eq!(decode_hex(b"0g"), Err(Error::InvalidHex(1)));
    assert!(matches!(decode_base64(b"a"), Err(Error::InvalidBase64(_))));
    assert!(matches!(decode_base64(b"a*=="), Err(Error::InvalidBase64(_))));
}

#[test]
fn markup_survives_stripping_only_as_text() {
    let page = b"<p class=\"x > y\">Fish &amp; <i>chips</i></p><!-- menu -->";
    assert_eq!(unencode_html(&strip_tags(page)), "Fish & chips");
}

#[test]
fn query_strings_from_csv_rows() {
    let header = parse_csv(b"name,tags\n", &CsvOptions::default());
    let row = parse_csv(b"\"Smith, J.\",\"a b\"\n", &CsvOptions::default());
    let mut pairs = Vec::new();
    for (key, value) in header.iter().zip(&row) {
        pairs.push(format!("{}={}", encode_url(key), encode_url(value)));
    }
    let query = pairs.join("&");
    insta::assert_snapshot!(query, @"name=Smith%2C+J.&tags=a+b");

    let table = parse_query_string(query.as_bytes());
    assert_eq!(table.get("name").and_then(QueryValue::as_leaf).unwrap(), "Smith, J.");
    assert_eq!(
        encode_query_string(&table, b";", QueryEncoding::Rfc3986),
        "name=Smith%2C%20J.;tags=a%20b"
    );
}
