//! Types for directory API requests and responses.

use roster_core::User;
use serde::Deserialize;

/// Configuration for connecting to a directory backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend (e.g., "https://desk.example.com")
    pub base_url: String,
}

impl ClientConfig {
    /// Create a config for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

/// Response envelope from `GET /api/people`.
///
/// `success: false` is a logical failure distinct from any transport
/// error; the user list is only meaningful when `success` is true.
#[derive(Debug, Clone, Deserialize)]
pub struct PeopleResponse {
    /// Whether the backend considers the request successful
    pub success: bool,
    /// The full registered-user collection, in backend order
    #[serde(default)]
    pub users: Vec<User>,
}
