//! Roster People Directory view model.
//!
//! Owns the authoritative user collection fetched from the backend and
//! every piece of state derived from it: the search-filtered display
//! subset, role counts, per-user activity annotations, and the
//! tiles/list presentation toggle.
//!
//! Data flows one way: loader → authoritative collection → display
//! subset → aggregation/annotation. Derived state is recomputed
//! whenever an input changes, never patched incrementally.
//!
//! # Example
//!
//! ```ignore
//! use roster_view::PeopleDirectory;
//!
//! let mut directory = PeopleDirectory::new();
//! directory.load(&client).await;
//! directory.set_search_term("alice");
//!
//! for entry in directory.entries(chrono::Utc::now()) {
//!     println!("{} ({})", entry.user.name, entry.last_seen);
//! }
//! let counts = directory.stats();
//! println!("{} shown, {} admins", counts.total, counts.admins);
//! ```

mod directory;
mod filter;
mod stats;

pub use directory::{DirectoryEntry, DirectoryPhase, LoadTicket, PeopleDirectory, ViewMode};
pub use filter::filter_users;
pub use stats::{aggregate, RoleCounts};
