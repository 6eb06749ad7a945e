//! Roster Core
//!
//! Core types, traits, and error handling for the Roster people
//! directory.
//!
//! This crate provides the building blocks shared by the HTTP client
//! and the view model:
//! - **Domain Types**: `User`, `Role`
//! - **Activity Classification**: `ActivityStatus`, `classify`, `relative_time`
//! - **Core Traits**: `UserLoader`, `TokenStore`
//! - **Error Handling**: `LoadError` and `Result`
//!
//! # Example
//!
//! ```rust
//! use roster_core::types::{Role, User};
//! use roster_core::activity::{classify, ActivityStatus};
//!
//! let user = User::new("u1", "Alice Admin", "alice@x.com", Role::Admin);
//! assert_eq!(classify(user.last_active, chrono::Utc::now()), ActivityStatus::Unknown);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod activity;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items
pub use activity::{classify, relative_time, ActivityStatus};
pub use error::{LoadError, Result};
pub use traits::{MemoryTokenStore, TokenStore, UserLoader, AUTH_TOKEN_KEY};
pub use types::{Role, User};
