/// Core traits for Roster
use crate::error::Result;
use crate::types::User;
use async_trait::async_trait;
use std::collections::HashMap;

/// Key under which the bearer token is persisted in the token store.
pub const AUTH_TOKEN_KEY: &str = "token";

/// Read-only lookup of persisted credential strings.
///
/// The directory client reads the bearer token through this seam
/// instead of an ambient global, so the core stays testable without an
/// environment. Absence of a token is not an error here; the request
/// is attempted anyway and any authorization failure surfaces through
/// the loader's failure path.
pub trait TokenStore: Send + Sync {
    /// Look up a credential by key. Returns `None` when no value is
    /// stored.
    fn get(&self, key: &str) -> Option<String>;
}

/// In-memory token store, for tests and embedders without persistence.
#[derive(Debug, Default, Clone)]
pub struct MemoryTokenStore {
    values: HashMap<String, String>,
}

impl MemoryTokenStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding a bearer token under [`AUTH_TOKEN_KEY`].
    pub fn with_token(token: impl Into<String>) -> Self {
        let mut values = HashMap::new();
        values.insert(AUTH_TOKEN_KEY.to_string(), token.into());
        Self { values }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Source of the authoritative user collection.
///
/// The fetch is the only suspending operation in the directory; every
/// derived computation downstream is synchronous.
#[async_trait]
pub trait UserLoader: Send + Sync {
    /// Load the full user collection, in backend order.
    async fn load_users(&self) -> Result<Vec<User>>;
}
