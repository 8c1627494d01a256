//! Request parameter types and the query-string codec.
//!
//! Every API call is a GET whose arguments travel on the query string. This
//! module provides [`ParamValue`], the tagged value type for a single
//! argument, and [`Params`], the ordered parameter map that the dispatcher
//! threads through its pipeline.
//!
//! # Encoding Rules
//!
//! - Integers and floats are stringified; booleans become `true` / `false`
//! - Lists become repeated keys, one `key=value` pair per element
//! - Every string is UTF-8 and percent-encoded before it reaches the wire
//!
//! # Example
//!
//! ```rust
//! use bitly_api::clients::Params;
//!
//! let params = Params::new()
//!     .with("hash", vec!["abc", "def"])
//!     .with("limit", 10)
//!     .with("private", true)
//!     .with_opt("note", None::<String>);
//!
//! assert_eq!(
//!     params.to_query_string(),
//!     "hash=abc&hash=def&limit=10&private=true"
//! );
//! ```

use std::borrow::Cow;
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// A single request argument.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    /// A plain string value.
    Str(String),
    /// An integer value.
    Int(i64),
    /// A floating point value.
    Float(f64),
    /// A boolean, sent as `true` or `false`.
    Bool(bool),
    /// A list of strings, sent as repeated keys.
    List(Vec<String>),
}

impl ParamValue {
    /// Returns the wire representation of each element of this value.
    ///
    /// Scalars produce exactly one element, lists produce one per entry
    /// (possibly none).
    #[must_use]
    pub fn wire_values(&self) -> Vec<Cow<'_, str>> {
        match self {
            Self::Str(s) => vec![Cow::Borrowed(s.as_str())],
            Self::Int(i) => vec![Cow::Owned(i.to_string())],
            Self::Float(f) => vec![Cow::Owned(f.to_string())],
            Self::Bool(b) => vec![Cow::Borrowed(if *b { "true" } else { "false" })],
            Self::List(items) => items.iter().map(|s| Cow::Borrowed(s.as_str())).collect(),
        }
    }

    /// Returns `true` when the value carries nothing (an empty string or list).
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Str(s) => s.is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Int(_) | Self::Float(_) | Self::Bool(_) => false,
        }
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(value: Vec<&str>) -> Self {
        Self::List(value.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for ParamValue {
    fn from(value: &[&str]) -> Self {
        Self::List(value.iter().map(|s| (*s).to_string()).collect())
    }
}

impl From<&[String]> for ParamValue {
    fn from(value: &[String]) -> Self {
        Self::List(value.to_vec())
    }
}

/// An ordered map of request arguments.
///
/// Keys are kept in lexicographic order, which is also the order the legacy
/// signature consumes them in. Builder-style methods take `self` by value so
/// each pipeline stage hands a new map to the next one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params {
    entries: BTreeMap<String, ParamValue>,
}

impl Params {
    /// Creates an empty parameter map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the map with `key` set to `value`, replacing any previous value.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Like [`with`](Self::with), but leaves the map untouched when `value` is `None`.
    #[must_use]
    pub fn with_opt<V: Into<ParamValue>>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with(key, value),
            None => self,
        }
    }

    /// Returns the map with `key` set to `value` only if `key` is not present yet.
    #[must_use]
    pub fn with_default(mut self, key: &str, value: impl Into<ParamValue>) -> Self {
        self.entries
            .entry(key.to_string())
            .or_insert_with(|| value.into());
        self
    }

    /// Sets `key` to `value` in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Returns the value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.get(key)
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, ParamValue> {
        self.entries.iter()
    }

    /// Flattens the map into `(key, value)` pairs, one per wire value.
    ///
    /// List values yield one pair per element, in list order.
    #[must_use]
    pub fn pairs(&self) -> Vec<(&str, Cow<'_, str>)> {
        self.entries
            .iter()
            .flat_map(|(key, value)| {
                value
                    .wire_values()
                    .into_iter()
                    .map(move |v| (key.as_str(), v))
            })
            .collect()
    }

    /// Encodes the map as an `application/x-www-form-urlencoded` style query string.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut query = String::new();
        for (key, value) in self.pairs() {
            if !query.is_empty() {
                query.push('&');
            }
            let _ = write!(
                query,
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(&value)
            );
        }
        query
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a String, &'a ParamValue);
    type IntoIter = btree_map::Iter<'a, String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(query: &str) -> Vec<(String, String)> {
        query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let mut parts = pair.splitn(2, '=');
                let key = parts.next().unwrap();
                let value = parts.next().unwrap_or_default();
                (
                    urlencoding::decode(key).unwrap().into_owned(),
                    urlencoding::decode(value).unwrap().into_owned(),
                )
            })
            .collect()
    }

    #[test]
    fn test_scalars_are_stringified() {
        let params = Params::new()
            .with("count", 42)
            .with("ratio", 1.5)
            .with("private", false)
            .with("archived", true);

        assert_eq!(
            params.to_query_string(),
            "archived=true&count=42&private=false&ratio=1.5"
        );
    }

    #[test]
    fn test_lists_become_repeated_keys() {
        let params = Params::new().with("shortUrl", vec!["http://bit.ly/a", "http://bit.ly/b"]);

        assert_eq!(
            decode(&params.to_query_string()),
            vec![
                ("shortUrl".to_string(), "http://bit.ly/a".to_string()),
                ("shortUrl".to_string(), "http://bit.ly/b".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_list_produces_no_pairs() {
        let params = Params::new()
            .with("hash", Vec::<String>::new())
            .with("format", "json");
        assert_eq!(params.to_query_string(), "format=json");
    }

    #[test]
    fn test_none_values_are_dropped() {
        let params = Params::new()
            .with_opt("title", Some("My Link"))
            .with_opt("note", None::<&str>);

        assert!(params.contains_key("title"));
        assert!(!params.contains_key("note"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_reserved_characters_are_percent_encoded() {
        let params = Params::new().with("longUrl", "http://example.com/?a=1&b=two words");
        assert_eq!(
            params.to_query_string(),
            "longUrl=http%3A%2F%2Fexample.com%2F%3Fa%3D1%26b%3Dtwo%20words"
        );
    }

    #[test]
    fn test_non_ascii_is_utf8_encoded() {
        let params = Params::new().with("title", "café");
        assert_eq!(params.to_query_string(), "title=caf%C3%A9");
    }

    #[test]
    fn test_decoding_reconstructs_printable_input() {
        let printable: String = (0x20u8..0x7f).map(char::from).collect();
        let params = Params::new()
            .with("all", printable.clone())
            .with("list", vec!["x y", "&=?", "z"]);

        let decoded = decode(&params.to_query_string());
        assert_eq!(
            decoded,
            vec![
                ("all".to_string(), printable),
                ("list".to_string(), "x y".to_string()),
                ("list".to_string(), "&=?".to_string()),
                ("list".to_string(), "z".to_string()),
            ]
        );
    }

    #[test]
    fn test_with_default_keeps_existing_value() {
        let params = Params::new()
            .with("format", "txt")
            .with_default("format", "json")
            .with_default("login", "demo");

        assert_eq!(params.get("format"), Some(&ParamValue::from("txt")));
        assert_eq!(params.get("login"), Some(&ParamValue::from("demo")));
    }

    #[test]
    fn test_blank_values() {
        assert!(ParamValue::from("").is_blank());
        assert!(ParamValue::List(vec![]).is_blank());
        assert!(!ParamValue::from(0).is_blank());
        assert!(!ParamValue::from(false).is_blank());
    }
}
