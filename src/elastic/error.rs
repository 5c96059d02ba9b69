use thiserror::Error;

/// Failure talking to the search backend.
///
/// All variants are per-request and recoverable; none of them should bring the service down.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The request never produced a complete response (connect, timeout, reset).
    #[error("search backend unavailable: {0}")]
    Unavailable(#[source] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("[{status}] {kind}: {reason}")]
    Query {
        status: u16,
        kind: String,
        reason: String,
    },

    /// The backend answered 2xx but the body is not the expected envelope.
    #[error("malformed backend response: {0}")]
    Malformed(String),
}

impl BackendError {
    /// Stable machine-readable code used in HTTP error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            BackendError::Unavailable(_) => "backend_unavailable",
            BackendError::Query { .. } => "backend_query_error",
            BackendError::Malformed(_) => "malformed_backend_response",
        }
    }
}
