//! Domain types for Roster

mod user;

pub use user::{Role, User};
