//! Error types for the hypermedia client.
//!
//! The variants keep distinct failures distinguishable: "the resource never
//! offered that action" is a different thing from "the server refused it",
//! and callers branch on them (disable a control vs. surface a retry).

use thiserror::Error;

use super::transport::ResponseBody;

/// Failures of the client layer.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClientError {
    /// The requested action rel is not among the resource's links. Raised
    /// before any request is issued; carries what the resource does offer.
    #[error("action \"{action}\" is not available; available actions: {}", .available.join(", "))]
    ActionNotAvailable { action: String, available: Vec<String> },

    /// The server answered outside the 2xx range. The raw body is kept
    /// losslessly for the caller to inspect.
    #[error("request failed with status {status}")]
    Http { status: u16, body: ResponseBody },

    /// The request never produced a response (connection refused, protocol
    /// failure, ...).
    #[error("transport error: {0}")]
    Transport(String),

    /// A payload or a successful response could not be read as a HAL
    /// resource.
    #[error("decode error: {0}")]
    Decode(String),
}

impl ClientError {
    /// The HTTP status of an [`ClientError::Http`] failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
