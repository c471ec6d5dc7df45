//! Error types for the rqlite HTTP helper.
//!
//! # Design
//! Transport failures are wrapped but otherwise untouched. A non-2xx status
//! only becomes an error under `StatusPolicy::Reject`; the raw status and body
//! are kept for the caller.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid url `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Credentials embedded in the URL could not be decoded or removed.
    #[error("invalid credentials in url: {0}")]
    InvalidCredentials(String),

    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// Network error, timeout, or a response the transport could not read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

pub type Result<T> = std::result::Result<T, Error>;
