//! HTTP request helper for talking to rqlite.
//!
//! # Overview
//! Builds GET and POST requests with the headers rqlite expects, optional
//! query parameters and optional basic authentication, sends them through a
//! `Transport` and decodes the JSON reply.
//!
//! # Design
//! - Request building (`build_get` / `build_post`) is pure and separate from
//!   I/O, so it can be tested without a server.
//! - `Transport` is the only piece that touches the network; `ReqwestTransport`
//!   is the default.
//! - Whether a non-2xx status fails the call is a `StatusPolicy` on the client,
//!   not a property of the transport.
//! - No state is shared between calls.

pub mod client;
pub mod error;
pub mod headers;
pub mod http;
pub mod options;
pub mod transport;

pub use client::{build_get, build_post, get, post, HttpClient, StatusPolicy};
pub use error::{Error, Result};
pub use headers::{
    create_default_headers, create_json_headers, Headers, CONTENT_TYPE_APPLICATION_JSON,
    CONTENT_TYPE_APPLICATION_X_WWW_FORM_URLENCODED,
};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Response};
pub use options::{Auth, RequestOptions};
pub use transport::{ReqwestTransport, Transport, TransportConfig};
