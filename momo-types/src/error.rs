//! Error types for the gateway client.

use serde::{Deserialize, Serialize};

/// Failure of a gateway operation.
///
/// Each variant is one error kind; `kind()` exposes it for programmatic
/// branching and `Display` keeps the messages callers already parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// Caller input rejected before any network call.
    #[error("Missing required key(s): {}", missing.join(", "))]
    Validation { missing: Vec<String> },

    /// The gateway answered with a 5xx status.
    #[error("Server Error: {body}")]
    Server { status: u16, body: String },

    /// The gateway answered with a status outside the handled ranges.
    #[error("Unexpected HTTP status code: {0}")]
    UnexpectedStatus(u16),

    /// No response was received (connect, DNS or timeout failure).
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Anything else that went wrong while performing the call.
    #[error("Error in request: {0}")]
    Request(String),
}

/// Discriminant of `GatewayError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    Server,
    UnexpectedStatus,
    RequestFailed,
    Request,
}

impl GatewayError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GatewayError::Validation { .. } => ErrorKind::Validation,
            GatewayError::Server { .. } => ErrorKind::Server,
            GatewayError::UnexpectedStatus(_) => ErrorKind::UnexpectedStatus,
            GatewayError::RequestFailed(_) => ErrorKind::RequestFailed,
            GatewayError::Request(_) => ErrorKind::Request,
        }
    }

    /// Shorthand for a single missing argument.
    pub fn missing(key: impl Into<String>) -> Self {
        GatewayError::Validation {
            missing: vec![key.into()],
        }
    }
}

/// Transport-level failure reported by an `HttpTransport` adapter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// Nothing came back from the remote end.
    #[error("{0}")]
    NoResponse(String),

    /// A response arrived but could not be handled.
    #[error("{0}")]
    Other(String),
}

impl From<TransportError> for GatewayError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::NoResponse(msg) => GatewayError::RequestFailed(msg),
            TransportError::Other(msg) => GatewayError::Request(msg),
        }
    }
}
