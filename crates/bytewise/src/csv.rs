//! Parsing a single line of delimiter-separated values.

use alloc::vec::Vec;

use bstr::{BString, ByteSlice};

/// Syntax for [`parse_csv`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    /// Separates fields.
    ///
    /// # Default
    ///
    /// `,`
    pub delimiter: u8,
    /// Encloses a field that may contain delimiters. Inside a quoted field a
    /// doubled quote stands for one quote.
    ///
    /// # Default
    ///
    /// `"`
    pub quote: u8,
    /// Inside a quoted field, keeps the following byte from closing the
    /// field. Both the escape byte and the escaped byte stay in the output.
    /// `None` disables escaping.
    ///
    /// # Default
    ///
    /// `Some(b'\\')`
    pub escape: Option<u8>,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            escape: Some(b'\\'),
        }
    }
}

/// Split one line of CSV into its fields.
///
/// A single trailing line break is ignored. Spaces and tabs before an
/// opening quote are skipped; unquoted fields are kept verbatim. Text after
/// a closing quote is appended to the field, and an unterminated quoted
/// field runs to the end of the line. The empty line has one empty field.
///
/// ```rust
/// use bytewise::{CsvOptions, parse_csv};
///
/// let fields = parse_csv(b"1,\"two, three\",\"say \"\"hi\"\"\"\n", &CsvOptions::default());
/// assert_eq!(fields, ["1", "two, three", "say \"hi\""]);
/// ```
#[must_use]
pub fn parse_csv(s: &[u8], options: &CsvOptions) -> Vec<BString> {
    let line = s
        .strip_suffix(b"\r\n")
        .or_else(|| s.strip_suffix(b"\n"))
        .or_else(|| s.strip_suffix(b"\r"))
        .unwrap_or(s);

    let mut fields = Vec::new();
    let mut start = 0;
    loop {
        let (field, next) = parse_field(line, start, options);
        fields.push(field);
        match next {
            Some(next) => start = next,
            None => return fields,
        }
    }
}

/// Parse the field starting at `start`, returning it and the start of the
/// next field, if any.
fn parse_field(line: &[u8], start: usize, options: &CsvOptions) -> (BString, Option<usize>) {
    let blanks = line[start..]
        .iter()
        .take_while(|&&b| (b == b' ' || b == b'\t') && b != options.delimiter)
        .count();
    let mut i = start + blanks;
    if line.get(i) != Some(&options.quote) {
        return rest_of_field(Vec::new(), line, start, options.delimiter);
    }

    let mut out = Vec::new();
    i += 1;
    loop {
        match line.get(i) {
            None => return (out.into(), None),
            Some(&b) if Some(b) == options.escape && b != options.quote => {
                out.push(b);
                out.extend(line.get(i + 1));
                i += 2;
            }
            Some(&b) if b == options.quote => {
                if line.get(i + 1) == Some(&options.quote) {
                    out.push(b);
                    i += 2;
                } else {
                    i += 1;
                    break;
                }
            }
            Some(&b) => {
                out.push(b);
                i += 1;
            }
        }
    }
    rest_of_field(out, line, i, options.delimiter)
}

fn rest_of_field(mut out: Vec<u8>, line: &[u8], from: usize, delimiter: u8) -> (BString, Option<usize>) {
    let rest = &line[from..];
    match rest.find_byte(delimiter) {
        Some(d) => {
            out.extend_from_slice(&rest[..d]);
            (out.into(), Some(from + d + 1))
        }
        None => {
            out.extend_from_slice(rest);
            (out.into(), None)
        }
    }
}
