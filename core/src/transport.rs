//! Blocking transport seam between the pipeline and the network.
//!
//! # Design
//! `Transport` describes the one upstream capability the pipeline needs: a
//! blocking GET that returns the response as plain data. Production code
//! uses `UreqTransport`; tests substitute an in-memory implementation so
//! pipeline behavior stays checkable without sockets. Connection handling,
//! TLS, and redirects are entirely the transport's business — the pipeline
//! adds no retry or timeout policy on top.

use std::time::{Duration, Instant};

use crate::error::ApiError;
use crate::http::{Header, Response};

/// Blocking HTTP GET capability.
pub trait Transport {
    /// Execute a GET against `url` with the given headers.
    ///
    /// Non-success statuses are returned as data, not errors. Only a
    /// failure to complete the round-trip (DNS, connection refused,
    /// timeout) maps to `ApiError::Transport`.
    fn get(&self, url: &str, headers: &[Header]) -> Result<Response, ApiError>;
}

/// `ureq`-backed transport.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses come back as data, letting the classifier stage decide what
/// counts as a failure. Elapsed wall time is measured around the full
/// round-trip, body read included.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Like `new`, with an overall per-call timeout handed to the agent.
    pub fn with_timeout(timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn get(&self, url: &str, headers: &[Header]) -> Result<Response, ApiError> {
        let started = Instant::now();

        let mut request = self.agent.get(url);
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let transport_err = |message: String| ApiError::Transport {
            url: url.to_string(),
            message,
        };

        let mut response = request.call().map_err(|e| transport_err(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| transport_err(e.to_string()))?;

        Ok(Response {
            url: url.to_string(),
            status,
            body,
            elapsed: started.elapsed(),
        })
    }
}
