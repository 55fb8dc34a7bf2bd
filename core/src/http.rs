//! Plain-data HTTP values and the pure helpers the pipeline is built from.
//!
//! # Design
//! `Response` describes the outcome of a GET as plain data: URL, status,
//! body, and elapsed wall time. URL joining and header merging are pure
//! functions with no I/O, so every invariant they carry is unit-testable
//! without a transport. All fields use owned types to keep values free of
//! lifetime concerns across the pipeline stages.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// A single HTTP header as an owned name/value pair.
pub type Header = (String, String);

/// Characters of the response body carried into error context.
const EXCERPT_MAX_CHARS: usize = 200;

/// The raw result of one dispatched GET. Created per call, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub url: String,
    pub status: u16,
    pub body: String,
    pub elapsed: Duration,
}

impl Response {
    /// Whether the status is in the 2xx success range.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON into `T`, validating each field against its
    /// declared type. Any mismatch or missing field fails immediately.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// A truncated copy of the body, safe to embed in error messages.
    pub fn excerpt(&self) -> String {
        truncate(&self.body, EXCERPT_MAX_CHARS)
    }
}

/// Join a base address and a path segment with exactly one `/`.
///
/// Trailing slashes on the base and leading slashes on the segment are
/// ignored. Fails if either half is empty after trimming — there is no
/// sensible request URL to form.
pub fn join_url(base: &str, segment: &str) -> Result<String, ApiError> {
    let base = base.trim_end_matches('/');
    let segment = segment.trim_start_matches('/');
    if base.is_empty() || segment.is_empty() {
        return Err(ApiError::MalformedUrl {
            base: base.to_string(),
            segment: segment.to_string(),
        });
    }
    Ok(format!("{base}/{segment}"))
}

/// Merge a per-call header overlay over the defaults into a fresh list.
///
/// Default headers keep their position but take the overlay's value when
/// the overlay carries the same name (ASCII-case-insensitive, as HTTP
/// header names compare). Overlay names not present in the defaults are
/// appended. Neither input is mutated.
pub fn merge_headers(defaults: &[Header], overlay: &[Header]) -> Vec<Header> {
    let mut merged = Vec::with_capacity(defaults.len() + overlay.len());
    for (name, value) in defaults {
        let value = overlay
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
            .unwrap_or(value);
        merged.push((name.clone(), value.clone()));
    }
    for (name, value) in overlay {
        if !defaults.iter().any(|(n, _)| n.eq_ignore_ascii_case(name)) {
            merged.push((name.clone(), value.clone()));
        }
    }
    merged
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
