/// Core error types for Roster
use thiserror::Error;

/// Result type alias using `LoadError`
pub type Result<T> = std::result::Result<T, LoadError>;

/// Failure loading the directory from the backend.
///
/// The three variants are deliberately distinguishable even though the
/// view renders them through a single error state: callers and tests
/// can tell a dead network from a backend that answered "no" and from
/// a rejected credential.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Network or connection failure; no usable response arrived
    #[error("Network error: {0}")]
    Transport(String),

    /// The backend responded but indicated failure (or sent a
    /// malformed body)
    #[error("Backend error: {0}")]
    Backend(String),

    /// Missing, invalid, or expired credential
    #[error("Authorization failed: {0}")]
    Auth(String),
}
