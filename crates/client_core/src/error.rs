use reqwest::StatusCode;
use shared::error::ErrorBody;
use thiserror::Error;

/// Failure taxonomy for REST calls. Errors propagate to the caller without
/// retry or local recovery; the UI layer decides how to surface them.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server rejected request with status {status}")]
    Server { status: StatusCode, body: ErrorBody },
    #[error("entity has no server-assigned id")]
    MissingId,
}

impl ServiceError {
    /// The server-provided human-readable message, when one was sent.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ServiceError::Server { body, .. } => body.message.as_deref(),
            _ => None,
        }
    }
}
