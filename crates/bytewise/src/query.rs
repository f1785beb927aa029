//! Form-encoded query strings with bracketed nested keys.
//!
//! `a=1&b[]=2&b[]=3&c[x][y]=4` parses into a [`QueryTable`] holding a leaf
//! under `a`, a table under `b` with the integer keys `0` and `1`, and a
//! nested table under `c`. [`encode_query_string`] produces the same syntax
//! back, with the brackets percent-encoded.

use alloc::{collections::BTreeMap, format, string::String, vec::Vec};

use bstr::{BStr, BString, ByteSlice};

use crate::url::{Flavor, percent_decode, percent_encode_into};

/// A value in a [`QueryTable`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// A decoded parameter value.
    Leaf(BString),
    /// Parameters nested under a bracketed key.
    Table(QueryTable),
}

impl QueryValue {
    /// The value if this is a leaf.
    #[must_use]
    pub fn as_leaf(&self) -> Option<&BStr> {
        match self {
            Self::Leaf(v) => Some(v.as_bstr()),
            Self::Table(_) => None,
        }
    }

    /// The nested table if this is one.
    #[must_use]
    pub fn as_table(&self) -> Option<&QueryTable> {
        match self {
            Self::Leaf(_) => None,
            Self::Table(t) => Some(t),
        }
    }

    fn make_table(&mut self) -> &mut QueryTable {
        match self {
            Self::Table(table) => table,
            Self::Leaf(_) => {
                *self = Self::Table(QueryTable::new());
                self.make_table()
            }
        }
    }
}

/// An insertion-ordered map from keys to [`QueryValue`]s.
///
/// Keys that are canonical non-negative integers (`0`, `17`, but not `017`)
/// advance the index used by [`QueryTable::push`], so appending after
/// `{"3": ..}` uses key `4`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "Vec<(BString, QueryValue)>", into = "Vec<(BString, QueryValue)>")
)]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryTable {
    entries: Vec<(BString, QueryValue)>,
    /// Position of each key in `entries`.
    index: BTreeMap<Vec<u8>, usize>,
    next_index: u64,
}

impl QueryTable {
    /// An empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: BTreeMap::new(),
            next_index: 0,
        }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The value stored under `key`.
    #[must_use]
    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<&QueryValue> {
        let at = *self.index.get(key.as_ref())?;
        Some(&self.entries[at].1)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&BStr, &QueryValue)> {
        self.entries.iter().map(|(k, v)| (k.as_bstr(), v))
    }

    /// Store `value` under `key`. An existing key keeps its position and
    /// takes the new value.
    pub fn insert(&mut self, key: impl AsRef<[u8]>, value: QueryValue) {
        let key = key.as_ref();
        if let Some(at) = self.position(key) {
            self.entries[at].1 = value;
            return;
        }
        if let Some(n) = integer_key(key) {
            self.next_index = self.next_index.max(n.saturating_add(1));
        }
        self.append(key.to_vec(), value);
    }

    /// Append `value` under the next free integer key.
    pub fn push(&mut self, value: QueryValue) {
        let key = format!("{}", self.next_index).into_bytes();
        self.next_index = self.next_index.saturating_add(1);
        match self.position(&key) {
            Some(at) => self.entries[at].1 = value,
            None => self.append(key, value),
        }
    }

    fn append(&mut self, key: Vec<u8>, value: QueryValue) {
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key.into(), value));
    }

    fn position(&self, key: &[u8]) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// The table under `key`, creating it or replacing a leaf as needed.
    /// `None` appends a new table.
    fn child_table(&mut self, key: Option<&[u8]>) -> &mut QueryTable {
        let at = match key.map(|k| (k, self.position(k))) {
            Some((_, Some(at))) => at,
            Some((k, None)) => {
                self.insert(k, QueryValue::Table(Self::new()));
                self.entries.len() - 1
            }
            None => {
                self.push(QueryValue::Table(Self::new()));
                self.entries.len() - 1
            }
        };
        self.entries[at].1.make_table()
    }

    fn assign(&mut self, key: Option<&[u8]>, value: QueryValue) {
        match key {
            Some(k) => self.insert(k, value),
            None => self.push(value),
        }
    }
}

impl From<Vec<(BString, QueryValue)>> for QueryTable {
    fn from(entries: Vec<(BString, QueryValue)>) -> Self {
        let mut table = Self::new();
        for (key, value) in entries {
            table.insert(key, value);
        }
        table
    }
}

impl From<QueryTable> for Vec<(BString, QueryValue)> {
    fn from(table: QueryTable) -> Self {
        table.entries
    }
}

fn integer_key(key: &[u8]) -> Option<u64> {
    match key {
        [b'0'] => Some(0),
        [b'1'..=b'9', rest @ ..] if rest.iter().all(u8::is_ascii_digit) => {
            key.to_str().ok()?.parse().ok()
        }
        _ => None,
    }
}

/// Parse an `application/x-www-form-urlencoded` query string.
///
/// Pairs are separated by `&` and split at their first `=`; both halves are
/// URL-decoded. Leading spaces are removed from names, and spaces or dots in
/// the top-level part of a name become `_`. A name may be followed by
/// bracketed keys: `[]` appends to a table and `[k]` stores under `k`. A `[`
/// without a closing `]` in the top-level name is kept as `_` followed by the
/// rest of the name. Later duplicates replace earlier ones. Pairs with an
/// empty name are skipped.
///
/// ```rust
/// use bytewise::parse_query_string;
///
/// let table = parse_query_string(b"a.b=1&list[]=x&list[]=y&a.b=2");
/// assert_eq!(table.get("a_b").and_then(|v| v.as_leaf()).unwrap(), "2");
/// let list = table.get("list").and_then(|v| v.as_table()).unwrap();
/// assert_eq!(list.get("1").and_then(|v| v.as_leaf()).unwrap(), "y");
/// ```
#[must_use]
pub fn parse_query_string(s: &[u8]) -> QueryTable {
    let mut table = QueryTable::new();
    for pair in s.split(|&b| b == b'&').filter(|p| !p.is_empty()) {
        let (name, value) = match pair.find_byte(b'=') {
            Some(i) => (&pair[..i], &pair[i + 1..]),
            None => (pair, &[][..]),
        };
        let name = percent_decode(name, Flavor::Form);
        let value = percent_decode(value, Flavor::Form);
        register(&mut table, &name, value);
    }
    table
}

fn register(table: &mut QueryTable, name: &[u8], value: BString) {
    let name = &name[name.iter().take_while(|&&b| b == b' ').count()..];
    let base_end = name.find_byte(b'[').unwrap_or(name.len());
    if base_end == 0 {
        tracing::debug!(name = ?name.as_bstr(), "skipping query parameter without a name");
        return;
    }

    let mut base: Vec<u8> = name[..base_end]
        .iter()
        .map(|&b| if b == b' ' || b == b'.' { b'_' } else { b })
        .collect();
    let mut path: Vec<Option<&[u8]>> = Vec::new();
    let mut rest = &name[base_end..];
    while let Some(inner) = rest.strip_prefix(b"[") {
        let Some(close) = inner.find_byte(b']') else {
            if path.is_empty() {
                base.push(b'_');
                base.extend_from_slice(inner);
            }
            break;
        };
        path.push((close > 0).then(|| &inner[..close]));
        rest = &inner[close + 1..];
    }

    let mut current = table;
    let mut key = Some(base.as_slice());
    for index in path {
        current = current.child_table(key);
        key = index;
    }
    current.assign(key, QueryValue::Leaf(value));
}

/// How [`encode_query_string`] percent-encodes keys and values.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryEncoding {
    /// Spaces become `+`, as in HTML form submissions.
    #[default]
    FormUrlencoded,
    /// Spaces become `%20`, following RFC 3986.
    Rfc3986,
}

impl From<QueryEncoding> for Flavor {
    fn from(encoding: QueryEncoding) -> Self {
        match encoding {
            QueryEncoding::FormUrlencoded => Self::Form,
            QueryEncoding::Rfc3986 => Self::Standard,
        }
    }
}

/// Render `table` as a query string, joining pairs with `sep`.
///
/// Nested tables are flattened to `outer%5Binner%5D=value`. Empty nested
/// tables produce nothing.
///
/// ```rust
/// use bytewise::{QueryEncoding, encode_query_string, parse_query_string};
///
/// let table = parse_query_string(b"q=a b&tags[]=x");
/// assert_eq!(
///     encode_query_string(&table, b"&", QueryEncoding::FormUrlencoded),
///     "q=a+b&tags%5B0%5D=x"
/// );
/// assert_eq!(
///     encode_query_string(&table, b";", QueryEncoding::Rfc3986),
///     "q=a%20b;tags%5B0%5D=x"
/// );
/// ```
#[must_use]
pub fn encode_query_string(table: &QueryTable, sep: &[u8], encoding: QueryEncoding) -> BString {
    let mut pairs = Vec::new();
    flatten(table, None, encoding.into(), &mut pairs);
    bstr::join(sep, pairs).into()
}

fn flatten(table: &QueryTable, prefix: Option<&str>, flavor: Flavor, pairs: &mut Vec<String>) {
    for (key, value) in table.iter() {
        let mut name = String::new();
        match prefix {
            Some(prefix) => {
                name.push_str(prefix);
                name.push_str("%5B");
                percent_encode_into(&mut name, key, flavor);
                name.push_str("%5D");
            }
            None => percent_encode_into(&mut name, key, flavor),
        }
        match value {
            QueryValue::Leaf(v) => {
                name.push('=');
                percent_encode_into(&mut name, v, flavor);
                pairs.push(name);
            }
            QueryValue::Table(nested) => flatten(nested, Some(&name), flavor, pairs),
        }
    }
}
