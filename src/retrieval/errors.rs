//! Transport error types.
//!
//! The display text of these errors is what the stage classifier inspects, so API
//! error messages are carried through verbatim.

use thiserror::Error;

/// Errors raised by the retrieval capability itself (network, auth, quota, decoding)
#[derive(Debug, Error)]
pub enum TransportError {
    /// TCP/TLS/HTTP connection to the endpoint failed.
    #[error("connection failed to {endpoint}: {reason}")]
    ConnectionFailed { endpoint: String, reason: String },

    /// The API answered with a structured error.
    #[error("{message} (HTTP {status} {code})")]
    Api { status: u16, code: String, message: String },

    /// Non-2xx response without a structured error body.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body was not the expected shape.
    #[error("could not decode model response: {reason}")]
    Decode { reason: String },

    /// The capability could not be constructed or configured.
    #[error("retrieval client misconfigured: {reason}")]
    Config { reason: String },
}

impl TransportError {
    /// HTTP status, when the failure came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Api { status, .. } | TransportError::Http { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}
