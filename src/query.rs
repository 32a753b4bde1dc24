//! Query-string parsing, merging, and serialization.
//!
//! Query strings are parsed the way PHP populates `$_GET`: repeated
//! keys without brackets squash (the last occurrence wins), `a[]`
//! accumulates a list, and `a[k1][k2]` builds nested maps. Key order is
//! first-seen throughout.

use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::encoding::{decode, encode_data};

/// An insertion-ordered map of decoded query keys to values.
pub type QueryMap = IndexMap<String, QueryValue>;

/// A decoded query value.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum QueryValue {
    /// A scalar value.
    Str(String),
    /// A sequence built with `a[]=..&a[]=..` notation.
    List(Vec<QueryValue>),
    /// A nested map built with `a[k]=..` notation.
    Map(QueryMap),
}

impl From<&str> for QueryValue {
    fn from(s: &str) -> Self {
        QueryValue::Str(s.to_owned())
    }
}

impl From<String> for QueryValue {
    fn from(s: String) -> Self {
        QueryValue::Str(s)
    }
}

/// A query component: raw text or an already-parsed map.
///
/// Raw queries are parsed with [`parse_query`] before any merge, so the
/// two forms are interchangeable as input.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Query {
    /// A raw, possibly percent-encoded query string (no leading `?`).
    Raw(String),
    /// A parsed, decoded query map.
    Map(QueryMap),
}

impl Query {
    /// Converts the query into its parsed form.
    #[must_use]
    pub fn into_map(self) -> QueryMap {
        match self {
            Query::Raw(s) => parse_query(&s),
            Query::Map(m) => m,
        }
    }
}

impl From<&str> for Query {
    fn from(s: &str) -> Self {
        Query::Raw(s.to_owned())
    }
}

impl From<String> for Query {
    fn from(s: String) -> Self {
        Query::Raw(s)
    }
}

impl From<QueryMap> for Query {
    fn from(m: QueryMap) -> Self {
        Query::Map(m)
    }
}

/// Parses a raw query string into a [`QueryMap`].
///
/// Pairs are split on `&` and at the first `=`; key and value are
/// percent-decoded before the key's bracket notation is interpreted.
/// A repeated key without brackets overwrites the earlier value in
/// place, keeping its original position:
///
/// ```
/// use http_build_url::{parse_query, QueryValue};
///
/// let map = parse_query("test=1&test=2");
/// assert_eq!(map["test"], QueryValue::Str("2".into()));
///
/// let map = parse_query("test[]=1&test[]=2");
/// assert_eq!(
///     map["test"],
///     QueryValue::List(vec!["1".into(), "2".into()]),
/// );
/// ```
#[must_use]
pub fn parse_query(s: &str) -> QueryMap {
    let mut map = QueryMap::new();
    for pair in s.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
        insert_pair(&mut map, &decode(k), QueryValue::Str(decode(v)));
    }
    map
}

/// Merges `replace` into `base`, key by key.
///
/// A key present in both sides is overwritten by the replacement;
/// map-into-map overwrites recursively per subkey, so base subkeys
/// absent from the replacement survive and replacement subkeys absent
/// from the base are added. Key order stays first-seen.
pub fn merge_query(base: &mut QueryMap, replace: QueryMap) {
    for (k, v) in replace {
        match base.entry(k) {
            Entry::Occupied(mut e) => merge_value(e.get_mut(), v),
            Entry::Vacant(e) => {
                e.insert(v);
            }
        }
    }
}

fn merge_value(base: &mut QueryValue, replace: QueryValue) {
    match (base, replace) {
        (QueryValue::Map(b), QueryValue::Map(r)) => merge_query(b, r),
        (b, r) => *b = r,
    }
}

/// Serializes a [`QueryMap`] back into query-string text.
///
/// Keys and values are percent-encoded from their decoded form, with
/// bracket notation rendered encoded (`a%5B2%5D=1`, `a%5B%5D=1`).
/// An empty map serializes to an empty string.
#[must_use]
pub fn build_query(map: &QueryMap) -> String {
    let mut out = String::new();
    for (key, value) in map {
        write_value(&mut out, &encode_data(key), value);
    }
    out
}

fn write_value(out: &mut String, key: &str, value: &QueryValue) {
    match value {
        QueryValue::Str(s) => {
            if !out.is_empty() {
                out.push('&');
            }
            out.push_str(key);
            out.push('=');
            out.push_str(&encode_data(s));
        }
        QueryValue::List(items) => {
            for item in items {
                write_value(out, &format!("{key}%5B%5D"), item);
            }
        }
        QueryValue::Map(m) => {
            for (k, v) in m {
                write_value(out, &format!("{key}%5B{}%5D", encode_data(k)), v);
            }
        }
    }
}

/// Splits a decoded key like `a[2][b][]` into its head and bracket path.
///
/// Returns `None` when the key carries no well-formed bracket notation,
/// in which case the whole key is treated as a literal.
fn bracket_path(key: &str) -> Option<(&str, Vec<&str>)> {
    let open = key.find('[')?;
    let head = &key[..open];

    let mut segs = Vec::new();
    let mut rest = &key[open..];
    while !rest.is_empty() {
        if !rest.starts_with('[') {
            return None;
        }
        let close = rest.find(']')?;
        segs.push(&rest[1..close]);
        rest = &rest[close + 1..];
    }
    Some((head, segs))
}

fn insert_pair(map: &mut QueryMap, key: &str, value: QueryValue) {
    let Some((head, segs)) = bracket_path(key) else {
        map.insert(key.to_owned(), value);
        return;
    };

    let slot = map
        .entry(head.to_owned())
        .or_insert(QueryValue::Str(String::new()));
    place(slot, &segs, value);
}

fn place(slot: &mut QueryValue, segs: &[&str], value: QueryValue) {
    let Some((seg, rest)) = segs.split_first() else {
        *slot = value;
        return;
    };

    if seg.is_empty() {
        // `[]` appends; a non-list slot is overwritten by a fresh list.
        if !matches!(slot, QueryValue::List(_)) {
            *slot = QueryValue::List(Vec::new());
        }
        let QueryValue::List(items) = slot else {
            unreachable!()
        };
        items.push(QueryValue::Str(String::new()));
        place(items.last_mut().unwrap(), rest, value);
    } else {
        if !matches!(slot, QueryValue::Map(_)) {
            *slot = QueryValue::Map(QueryMap::new());
        }
        let QueryValue::Map(m) = slot else {
            unreachable!()
        };
        let child = m
            .entry((*seg).to_owned())
            .or_insert(QueryValue::Str(String::new()));
        place(child, rest, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squashes_unbracketed_repeats() {
        let map = parse_query("a=1&b=2&a=3");
        assert_eq!(build_query(&map), "a=3&b=2");
    }

    #[test]
    fn nested_brackets() {
        let map = parse_query("a[b][c]=1&a[b][d]=2");
        let QueryValue::Map(a) = &map["a"] else {
            panic!("expected map")
        };
        let QueryValue::Map(b) = &a["b"] else {
            panic!("expected map")
        };
        assert_eq!(b["c"], QueryValue::Str("1".into()));
        assert_eq!(b["d"], QueryValue::Str("2".into()));
        assert_eq!(build_query(&map), "a%5Bb%5D%5Bc%5D=1&a%5Bb%5D%5Bd%5D=2");
    }

    #[test]
    fn encoded_brackets_in_keys() {
        // %5B/%5D decode to brackets before interpretation.
        assert_eq!(
            parse_query("a%5B2%5D=b"),
            parse_query("a[2]=b"),
        );
    }

    #[test]
    fn malformed_brackets_stay_literal() {
        let map = parse_query("a[2=b");
        assert_eq!(map["a[2"], QueryValue::Str("b".into()));
    }

    #[test]
    fn merge_overwrites_and_adds() {
        let mut base = parse_query("a[2]=b");
        merge_query(&mut base, parse_query("a[2]=1&b=c&a[3]=b"));
        assert_eq!(build_query(&base), "a%5B2%5D=1&a%5B3%5D=b&b=c");
    }

    #[test]
    fn merge_replaces_mismatched_shapes() {
        let mut base = parse_query("a=1");
        merge_query(&mut base, parse_query("a[]=2"));
        assert_eq!(build_query(&base), "a%5B%5D=2");
    }

    #[test]
    fn value_round_trip() {
        let map = parse_query("q=50%25%20off&plus=a%2Bb");
        assert_eq!(map["q"], QueryValue::Str("50% off".into()));
        assert_eq!(build_query(&map), "q=50%25%20off&plus=a%2Bb");
    }
}
