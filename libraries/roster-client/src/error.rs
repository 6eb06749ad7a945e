//! Error types for the directory client.

use roster_core::LoadError;
use thiserror::Error;

/// Errors that can occur when talking to the directory backend.
#[derive(Error, Debug)]
pub enum DirectoryClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),

    /// Server returned a non-success HTTP status
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Server answered 200 but reported failure in the body
    #[error("Request rejected by server: {0}")]
    RequestRejected(String),

    /// Authentication failed (missing, invalid, or expired token)
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Invalid server URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),
}

impl From<DirectoryClientError> for LoadError {
    fn from(err: DirectoryClientError) -> Self {
        match err {
            DirectoryClientError::Request(e) => LoadError::Transport(e.to_string()),
            DirectoryClientError::ServerUnreachable(msg) => LoadError::Transport(msg),
            DirectoryClientError::AuthFailed(msg) => LoadError::Auth(msg),
            DirectoryClientError::ServerError { status, message } => {
                LoadError::Backend(format!("status {}: {}", status, message))
            }
            DirectoryClientError::RequestRejected(msg)
            | DirectoryClientError::ParseError(msg)
            | DirectoryClientError::InvalidUrl(msg) => LoadError::Backend(msg),
        }
    }
}

/// Result type for directory client operations.
pub type Result<T> = std::result::Result<T, DirectoryClientError>;
