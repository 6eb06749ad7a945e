//! Roster Directory Client
//!
//! HTTP client for the Roster people directory API.
//!
//! The client performs a single read-only operation: fetching the
//! registered-user collection from `GET /api/people`, authorized by a
//! bearer token read from a [`TokenStore`](roster_core::TokenStore).
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use roster_client::{ClientConfig, DirectoryClient};
//! use roster_core::MemoryTokenStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new("https://desk.example.com");
//!     let store = Arc::new(MemoryTokenStore::with_token("jwt..."));
//!     let client = DirectoryClient::new(config, store)?;
//!
//!     let users = client.fetch_people().await?;
//!     println!("{} registered users", users.len());
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::DirectoryClient;
pub use error::{DirectoryClientError, Result};
pub use types::{ClientConfig, PeopleResponse};
