use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::headers::Headers;

/// Basic-auth credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auth {
    pub user: String,
    pub pass: String,
}

impl Auth {
    pub fn new(user: impl Into<String>, pass: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            pass: pass.into(),
        }
    }
}

/// Per-request options. Every field is optional and absent by default.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Appended to the URL as `application/x-www-form-urlencoded` pairs.
    pub query: Option<BTreeMap<String, String>>,
    /// Sent as a JSON array. Ignored for GET.
    pub body: Option<Vec<serde_json::Value>>,
    pub auth: Option<Auth>,
    /// Extra headers, applied after the canonical ones.
    pub headers: Option<Headers>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query<K, V, I>(mut self, pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        self.query = Some(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Use a list of SQL statements as the body.
    pub fn statements<S, I>(mut self, statements: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        self.body = Some(
            statements
                .into_iter()
                .map(|s| serde_json::Value::String(s.into()))
                .collect(),
        );
        self
    }

    pub fn body(mut self, body: Vec<serde_json::Value>) -> Self {
        self.body = Some(body);
        self
    }

    pub fn auth(mut self, auth: Auth) -> Self {
        self.auth = Some(auth);
        self
    }

    pub fn headers(mut self, headers: Headers) -> Self {
        self.headers = Some(headers);
        self
    }
}
