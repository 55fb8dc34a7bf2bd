//! Convenience client for the todo API, built on top of the pipeline.
//!
//! # Design
//! `TodoClient` wires a `Pipeline` with the status classifier and debug
//! logger, then exposes the read operations as preset transforms over
//! `fetch_map`. `fetch_by_id_or_none` trades error fidelity for ergonomics:
//! not-found and every decode failure collapse to `None`, so schema drift is
//! indistinguishable from a missing todo on that path. Callers that need to
//! tell the two apart use `fetch_by_id`.

use crate::error::ApiError;
use crate::pipeline::{FetchOptions, Pipeline, PipelineConfig};
use crate::stage::{DebugLogger, StatusClassifier};
use crate::transport::{Transport, UreqTransport};
use crate::types::Todo;

/// Synchronous read-only client for the todo API.
pub struct TodoClient<C = UreqTransport> {
    pipeline: Pipeline<C>,
}

impl TodoClient<UreqTransport> {
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, UreqTransport::new())
    }
}

impl<C: Transport> TodoClient<C> {
    pub fn with_transport(base_url: &str, transport: C) -> Self {
        let config = PipelineConfig::new(base_url)
            .default_header("accept", "application/json")
            .classifier(StatusClassifier)
            .logger(DebugLogger);
        Self {
            pipeline: Pipeline::with_transport(config, transport),
        }
    }

    /// Fetch every todo, in the order the server returns them.
    pub fn fetch_all(&self) -> Result<Vec<Todo>, ApiError> {
        self.pipeline
            .fetch_map("todos", &FetchOptions::default(), |response| {
                response.decode()
            })
    }

    /// Fetch a single todo. A 404 surfaces as `ApiError::NotFound` and any
    /// decode failure propagates.
    pub fn fetch_by_id(&self, id: u64) -> Result<Todo, ApiError> {
        self.pipeline
            .fetch_map(&format!("todos/{id}"), &FetchOptions::default(), |response| {
                response.decode()
            })
    }

    /// Fetch a single todo, treating absence as `None` instead of an error.
    ///
    /// `None` covers both a 404 from the server and any failure to decode
    /// the body, so a malformed response reads as "missing" here. Transport
    /// failures and non-404 status failures still propagate.
    pub fn fetch_by_id_or_none(&self, id: u64) -> Result<Option<Todo>, ApiError> {
        match self.fetch_by_id(id) {
            Ok(todo) => Ok(Some(todo)),
            Err(ApiError::NotFound { .. }) | Err(ApiError::Decode(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
