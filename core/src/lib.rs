//! Synchronous request pipeline for JSON-over-HTTP APIs.
//!
//! # Overview
//! Assembles a configurable fetch operation from a base address, default
//! headers, an optional error classifier, and an optional response logger.
//! Each call joins the URL, merges per-call headers over the defaults,
//! dispatches a blocking GET through the `Transport` seam, then applies the
//! post-dispatch stages in a fixed order: logger, classifier, caller
//! transform.
//!
//! # Design
//! - `PipelineConfig` is immutable once built; calls never write back into
//!   the configured defaults.
//! - Optional stages are explicit `Option` capabilities with documented
//!   defaults, not identity-function placeholders.
//! - Transport failures propagate unclassified; the pipeline defines no
//!   retry or timeout policy of its own.
//! - `TodoClient` layers the todo API's read operations on top as preset
//!   transforms.

pub mod error;
pub mod http;
pub mod pipeline;
pub mod stage;
pub mod todo;
pub mod transport;
pub mod types;

pub use error::ApiError;
pub use http::{Header, Response};
pub use pipeline::{FetchOptions, Pipeline, PipelineConfig};
pub use stage::{Classify, DebugLogger, LogResponse, StatusClassifier};
pub use todo::TodoClient;
pub use transport::{Transport, UreqTransport};
pub use types::Todo;
