//! Optional post-dispatch stages: response logging and error classification.
//!
//! # Design
//! Both stages are explicit optional capabilities on `PipelineConfig` rather
//! than identity-function placeholders: an absent stage simply does not run.
//! Each trait has a blanket impl for closures so call sites can pass an
//! inline function or a named implementation interchangeably.

use crate::error::ApiError;
use crate::http::Response;

/// Decides whether a completed response counts as a failure.
pub trait Classify {
    /// Inspect the response and either accept it or reject it with a
    /// classified error. Rejection aborts the pipeline before the caller's
    /// transform runs.
    fn classify(&self, response: &Response) -> Result<(), ApiError>;
}

impl<F> Classify for F
where
    F: Fn(&Response) -> Result<(), ApiError>,
{
    fn classify(&self, response: &Response) -> Result<(), ApiError> {
        self(response)
    }
}

/// Classifier that rejects every non-success status.
///
/// 404 maps to `ApiError::NotFound`; anything else outside 2xx maps to
/// `ApiError::RequestFailed` carrying the URL, the status, and a truncated
/// body excerpt.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusClassifier;

impl Classify for StatusClassifier {
    fn classify(&self, response: &Response) -> Result<(), ApiError> {
        if response.ok() {
            return Ok(());
        }
        if response.status == 404 {
            return Err(ApiError::NotFound {
                url: response.url.clone(),
            });
        }
        Err(ApiError::RequestFailed {
            url: response.url.clone(),
            status: response.status,
            excerpt: response.excerpt(),
        })
    }
}

/// Records an observability line for a completed round-trip.
pub trait LogResponse {
    /// Observe the raw response. Runs before classification and before any
    /// transform, so it always sees what actually came off the wire.
    fn log(&self, response: &Response);
}

impl<F> LogResponse for F
where
    F: Fn(&Response),
{
    fn log(&self, response: &Response) {
        self(response)
    }
}

/// Logger that emits URL, status, and elapsed time through the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct DebugLogger;

impl LogResponse for DebugLogger {
    fn log(&self, response: &Response) {
        log::debug!(
            "GET {} -> {} in {:?}",
            response.url,
            response.status,
            response.elapsed
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn response(status: u16, body: &str) -> Response {
        Response {
            url: "http://localhost:3000/todos/1".to_string(),
            status,
            body: body.to_string(),
            elapsed: Duration::from_millis(3),
        }
    }

    #[test]
    fn status_classifier_accepts_success() {
        assert!(StatusClassifier.classify(&response(200, "{}")).is_ok());
        assert!(StatusClassifier.classify(&response(204, "")).is_ok());
    }

    #[test]
    fn status_classifier_maps_404_to_not_found() {
        let err = StatusClassifier.classify(&response(404, "{}")).unwrap_err();
        match err {
            ApiError::NotFound { url } => assert_eq!(url, "http://localhost:3000/todos/1"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn status_classifier_rejects_server_error_with_context() {
        let err = StatusClassifier
            .classify(&response(500, "internal error"))
            .unwrap_err();
        match err {
            ApiError::RequestFailed {
                url,
                status,
                excerpt,
            } => {
                assert_eq!(url, "http://localhost:3000/todos/1");
                assert_eq!(status, 500);
                assert_eq!(excerpt, "internal error");
            }
            other => panic!("expected RequestFailed, got {other:?}"),
        }
    }

    #[test]
    fn closure_acts_as_classifier() {
        let reject_redirects = |r: &Response| {
            if (300..400).contains(&r.status) {
                Err(ApiError::RequestFailed {
                    url: r.url.clone(),
                    status: r.status,
                    excerpt: r.excerpt(),
                })
            } else {
                Ok(())
            }
        };
        assert!(reject_redirects.classify(&response(200, "")).is_ok());
        assert!(reject_redirects.classify(&response(301, "")).is_err());
    }
}
