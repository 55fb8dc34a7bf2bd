//! Error taxonomy for the request pipeline.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the resource does not exist" from "the server returned an unexpected
//! status." All other non-success responses land in `RequestFailed` with the
//! URL, status code, and a truncated body excerpt for debugging. Transport
//! failures pass through unclassified — the pipeline defines no retry policy.

use thiserror::Error;

/// Errors surfaced by the pipeline and the clients built on it.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The base address or path segment was empty, so no request URL could
    /// be formed. Raised before any network I/O.
    #[error("malformed URL from base {base:?} and segment {segment:?}")]
    MalformedUrl { base: String, segment: String },

    /// The transport could not complete the round-trip (DNS failure,
    /// connection refused, timeout). Propagated unchanged.
    #[error("transport failure for {url}: {message}")]
    Transport { url: String, message: String },

    /// The server reported 404 for the requested URL.
    #[error("resource not found: {url}")]
    NotFound { url: String },

    /// The server returned a non-success status other than 404.
    #[error("request to {url} failed with HTTP {status}: {excerpt}")]
    RequestFailed {
        url: String,
        status: u16,
        excerpt: String,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("decode failed: {0}")]
    Decode(String),
}
