//! The configurable fetch pipeline: URL construction, header merging,
//! dispatch, and response post-processing.
//!
//! # Design
//! `PipelineConfig` is an explicit immutable configuration value built once
//! and handed to `Pipeline`; no call ever writes back into the configured
//! defaults. Each fetch joins the URL, merges per-call headers into a fresh
//! set, dispatches through the `Transport` seam, then applies the stages in
//! a fixed order: logger first, then classifier, then the caller's
//! transform. Logger and classifier observe the raw response by reference
//! before the transform consumes it, and the logger runs even when the
//! classifier subsequently rejects the response.

use std::fmt;

use crate::error::ApiError;
use crate::http::{join_url, merge_headers, Header, Response};
use crate::stage::{Classify, LogResponse};
use crate::transport::{Transport, UreqTransport};

/// Immutable configuration for a `Pipeline`.
///
/// Holds the base address (trailing slashes trimmed at construction),
/// headers sent with every request, and the optional classifier and logger
/// stages. An absent classifier means non-success statuses pass through
/// unchanged; an absent logger means no observability record is emitted.
pub struct PipelineConfig {
    base_url: String,
    default_headers: Vec<Header>,
    classifier: Option<Box<dyn Classify>>,
    logger: Option<Box<dyn LogResponse>>,
}

impl PipelineConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            default_headers: Vec::new(),
            classifier: None,
            logger: None,
        }
    }

    /// Add a header sent with every request unless overridden per call.
    pub fn default_header(mut self, name: &str, value: &str) -> Self {
        self.default_headers
            .push((name.to_string(), value.to_string()));
        self
    }

    pub fn classifier(mut self, classifier: impl Classify + 'static) -> Self {
        self.classifier = Some(Box::new(classifier));
        self
    }

    pub fn logger(mut self, logger: impl LogResponse + 'static) -> Self {
        self.logger = Some(Box::new(logger));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn default_headers(&self) -> &[Header] {
        &self.default_headers
    }
}

impl fmt::Debug for PipelineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineConfig")
            .field("base_url", &self.base_url)
            .field("default_headers", &self.default_headers)
            .field("classifier", &self.classifier.is_some())
            .field("logger", &self.logger.is_some())
            .finish()
    }
}

/// Per-call options: a header overlay merged over the configured defaults.
/// The overlay wins on name collision.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    pub headers: Vec<Header>,
}

impl FetchOptions {
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }
}

/// A configured fetch operation over a blocking transport.
///
/// Stateless apart from its configuration: every call is independent, and
/// the configuration is never mutated by a call.
pub struct Pipeline<C = UreqTransport> {
    config: PipelineConfig,
    transport: C,
}

impl Pipeline<UreqTransport> {
    /// Pipeline over the production `ureq` transport.
    pub fn new(config: PipelineConfig) -> Self {
        Self::with_transport(config, UreqTransport::new())
    }
}

impl<C: Transport> Pipeline<C> {
    pub fn with_transport(config: PipelineConfig, transport: C) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// GET `segment` with the default headers and no transform.
    pub fn fetch(&self, segment: &str) -> Result<Response, ApiError> {
        self.fetch_with(segment, &FetchOptions::default())
    }

    /// GET `segment` with a per-call header overlay and no transform.
    pub fn fetch_with(&self, segment: &str, options: &FetchOptions) -> Result<Response, ApiError> {
        self.fetch_map(segment, options, Ok)
    }

    /// Full pipeline: join the URL, merge headers, dispatch, then run the
    /// logger, the classifier, and finally `transform` on the response.
    ///
    /// Fails before any I/O if the base address or `segment` is empty.
    /// Transport failures propagate unclassified.
    pub fn fetch_map<T>(
        &self,
        segment: &str,
        options: &FetchOptions,
        transform: impl FnOnce(Response) -> Result<T, ApiError>,
    ) -> Result<T, ApiError> {
        let url = join_url(&self.config.base_url, segment)?;
        let headers = merge_headers(&self.config.default_headers, &options.headers);
        let response = self.transport.get(&url, &headers)?;

        if let Some(logger) = &self.config.logger {
            logger.log(&response);
        }
        if let Some(classifier) = &self.config.classifier {
            classifier.classify(&response)?;
        }
        transform(response)
    }
}
