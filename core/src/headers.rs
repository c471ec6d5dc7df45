//! Header maps and the canonical header sets sent to rqlite.
//!
//! # Design
//! `Headers` is an ordered map keyed by header name. Names compare
//! case-insensitively on insert, so a map never holds two entries for the
//! same header; the later value wins and the earlier spelling is dropped.

use std::collections::BTreeMap;

pub const CONTENT_TYPE_APPLICATION_JSON: &str = "application/json";
pub const CONTENT_TYPE_APPLICATION_X_WWW_FORM_URLENCODED: &str =
    "application/x-www-form-urlencoded";

pub const ACCEPT: &str = "Accept";
pub const AUTHORIZATION: &str = "Authorization";
pub const CONTENT_TYPE: &str = "Content-Type";

/// A set of HTTP headers with unique names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers(BTreeMap<String, String>);

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a header, replacing any existing entry with the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.0.retain(|existing, _| !existing.eq_ignore_ascii_case(&name));
        self.0.insert(name, value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Merge `other` into `self`; entries from `other` take precedence.
    pub fn merge(&mut self, other: &Headers) {
        for (name, value) in other.iter() {
            self.insert(name, value);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Headers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Headers {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Headers attached to every request: `Accept: application/json`.
pub fn create_default_headers() -> Headers {
    Headers::from([(ACCEPT, CONTENT_TYPE_APPLICATION_JSON)])
}

/// Headers describing a JSON payload: `Content-Type: application/json`.
pub fn create_json_headers() -> Headers {
    Headers::from([(CONTENT_TYPE, CONTENT_TYPE_APPLICATION_JSON)])
}
