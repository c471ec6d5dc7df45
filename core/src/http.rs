//! Requests and responses as plain data.
//!
//! # Design
//! Builders in `client` produce `HttpRequest` values without touching the
//! network; a `Transport` turns one into an `HttpResponse`. The client then
//! decodes the body into a `Response`, which keeps the request it came from.

use std::fmt;

use crate::error::{Error, Result};
use crate::headers::Headers;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Absolute URL, query included, credentials stripped.
    pub url: String,
    pub headers: Headers,
    pub body: Option<String>,
}

/// What a transport hands back: status, headers and the raw body.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Headers,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A completed request with its JSON body decoded.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub headers: Headers,
    /// `Null` when the server sent an empty body. A non-2xx body that is not
    /// JSON is kept as a string.
    pub body: serde_json::Value,
    /// The request that produced this response.
    pub request: HttpRequest,
}

impl Response {
    pub(crate) fn decode(request: HttpRequest, response: HttpResponse) -> Result<Self> {
        let body = if response.body.trim().is_empty() {
            serde_json::Value::Null
        } else if response.is_success() {
            serde_json::from_str(&response.body).map_err(Error::Deserialization)?
        } else {
            // error pages are often plain text
            serde_json::from_str(&response.body)
                .unwrap_or_else(|_| serde_json::Value::String(response.body.clone()))
        };
        Ok(Self {
            status: response.status,
            headers: response.headers,
            body,
            request,
        })
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The JSON payload that was sent, if any.
    pub fn request_data(&self) -> Option<serde_json::Value> {
        self.request
            .body
            .as_deref()
            .and_then(|body| serde_json::from_str(body).ok())
    }
}
