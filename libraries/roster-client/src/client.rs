//! Directory backend client.

use crate::error::{DirectoryClientError, Result};
use crate::types::{ClientConfig, PeopleResponse};
use async_trait::async_trait;
use reqwest::Client;
use roster_core::{LoadError, TokenStore, User, UserLoader, AUTH_TOKEN_KEY};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Client for the people directory API.
///
/// Holds no per-request state beyond the HTTP connection pool; every
/// call reads the current bearer token from the injected
/// [`TokenStore`]. A missing token is not an error at this layer — the
/// request is sent unauthenticated and any 401/403 surfaces through
/// the auth failure path.
pub struct DirectoryClient {
    http: Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl DirectoryClient {
    /// Create a new client with the given configuration and token
    /// store.
    pub fn new(config: ClientConfig, tokens: Arc<dyn TokenStore>) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(DirectoryClientError::InvalidUrl(
                "URL cannot be empty".into(),
            ));
        }

        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(DirectoryClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Roster/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(DirectoryClientError::Request)?;

        Ok(Self {
            http,
            base_url,
            tokens,
        })
    }

    /// Get the backend base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full registered-user collection.
    ///
    /// Returns the users exactly as the backend ordered them; ordering
    /// is significant and preserved downstream.
    pub async fn fetch_people(&self) -> Result<Vec<User>> {
        let url = format!("{}/api/people", self.base_url);
        let token = self.tokens.get(AUTH_TOKEN_KEY);
        debug!(url = %url, has_token = token.is_some(), "Fetching people");

        let mut request = self.http.get(&url);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                DirectoryClientError::ServerUnreachable(e.to_string())
            } else {
                DirectoryClientError::Request(e)
            }
        })?;

        let status = response.status();

        if status.is_success() {
            let body: PeopleResponse = response.json().await.map_err(|e| {
                DirectoryClientError::ParseError(format!(
                    "Failed to parse people response: {}",
                    e
                ))
            })?;

            if !body.success {
                warn!("Backend reported failure fetching people");
                return Err(DirectoryClientError::RequestRejected(
                    "backend reported failure".into(),
                ));
            }

            info!(users = body.users.len(), "Fetched people");
            Ok(body.users)
        } else if status.as_u16() == 401 || status.as_u16() == 403 {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "People fetch unauthorized");
            Err(DirectoryClientError::AuthFailed(
                "missing or invalid credential".into(),
            ))
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(DirectoryClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}

#[async_trait]
impl UserLoader for DirectoryClient {
    async fn load_users(&self) -> std::result::Result<Vec<User>, LoadError> {
        self.fetch_people().await.map_err(LoadError::from)
    }
}
