//! The people directory view model.

use crate::filter::filter_users;
use crate::stats::{aggregate, RoleCounts};
use chrono::{DateTime, Utc};
use roster_core::{classify, relative_time, ActivityStatus, LoadError, User, UserLoader};
use tracing::{debug, info, warn};

/// Presentation density toggle, orthogonal to data state.
///
/// Transitions only on explicit selection; not persisted across
/// sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Card grid
    #[default]
    Tiles,
    /// Compact rows
    List,
}

/// Where the directory is in its load lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryPhase {
    /// A fetch is in flight; the display subset is indeterminate
    Loading,
    /// The last load succeeded and the subset reflects it
    Ready,
    /// The last load failed; no user list is shown beside the error
    Failed(LoadError),
}

/// Handle for one initiated load.
///
/// Produced by [`PeopleDirectory::begin_load`] and redeemed by
/// [`PeopleDirectory::finish_load`]; a ticket that is no longer
/// current identifies a stale completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// A visible user annotated for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryEntry<'a> {
    /// The underlying user record
    pub user: &'a User,
    /// Activity recency classification
    pub status: ActivityStatus,
    /// Indicator color for the status
    pub indicator_color: &'static str,
    /// Human-readable relative time of last activity
    pub last_seen: String,
}

/// View model for the registered-users directory.
///
/// Holds the authoritative collection as last received from the
/// backend and derives the display subset from it and the current
/// search term. The collection is replaced wholesale on every
/// successful load, never patched in place; the subset is recomputed
/// on every input change.
///
/// Loading is split-phase so the caller drives the await point:
/// [`begin_load`](Self::begin_load) marks a fetch in flight and
/// [`finish_load`](Self::finish_load) applies its result — or discards
/// it, when a newer load was initiated in the meantime
/// (last-initiated-wins). [`load`](Self::load) composes the two for
/// the common case.
#[derive(Debug)]
pub struct PeopleDirectory {
    users: Vec<User>,
    term: String,
    visible: Vec<User>,
    phase: DirectoryPhase,
    view_mode: ViewMode,
    load_seq: u64,
}

impl Default for PeopleDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl PeopleDirectory {
    /// Create an empty directory, awaiting its first load.
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            term: String::new(),
            visible: Vec::new(),
            phase: DirectoryPhase::Loading,
            view_mode: ViewMode::default(),
            load_seq: 0,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> &DirectoryPhase {
        &self.phase
    }

    /// The authoritative collection as last received from the backend.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// The display subset: the filtered projection of the
    /// authoritative collection, in backend order.
    pub fn visible(&self) -> &[User] {
        &self.visible
    }

    /// Mark a new fetch in flight and return its ticket.
    ///
    /// Initiating a load supersedes any still-unresolved earlier load:
    /// only the most recently issued ticket can be redeemed.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.load_seq += 1;
        self.phase = DirectoryPhase::Loading;
        debug!(seq = self.load_seq, "Directory load initiated");
        LoadTicket(self.load_seq)
    }

    /// Apply the result of a fetch.
    ///
    /// Returns `false` (and changes nothing) when the ticket is stale,
    /// i.e. a newer load was initiated after this one. On success the
    /// authoritative collection is replaced wholesale and the subset
    /// recomputed; on failure both are cleared so no stale data can
    /// render beside the error.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<User>, LoadError>,
    ) -> bool {
        if ticket.0 != self.load_seq {
            debug!(
                seq = ticket.0,
                current = self.load_seq,
                "Discarding stale load completion"
            );
            return false;
        }

        match result {
            Ok(users) => {
                info!(users = users.len(), "Directory load complete");
                self.users = users;
                self.phase = DirectoryPhase::Ready;
            }
            Err(err) => {
                warn!(error = %err, "Directory load failed");
                self.users.clear();
                self.phase = DirectoryPhase::Failed(err);
            }
        }

        self.refresh();
        true
    }

    /// Fetch the user collection through the given loader and apply
    /// the result.
    pub async fn load(&mut self, loader: &dyn UserLoader) {
        let ticket = self.begin_load();
        let result = loader.load_users().await;
        self.finish_load(ticket, result);
    }

    /// Current search term.
    pub fn search_term(&self) -> &str {
        &self.term
    }

    /// Replace the search term and recompute the display subset.
    ///
    /// Invoked on every keystroke; there is no debounce.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
        self.refresh();
    }

    /// Whether a non-empty search term is active.
    pub fn is_filtered(&self) -> bool {
        !self.term.is_empty()
    }

    /// Whether an active search matched nothing.
    pub fn has_no_matches(&self) -> bool {
        self.is_filtered() && self.visible.is_empty()
    }

    /// Role counts over the current display subset.
    ///
    /// Recomputed on every call; never cached across filter passes.
    pub fn stats(&self) -> RoleCounts {
        aggregate(&self.visible)
    }

    /// The display subset annotated with activity status and
    /// relative-time phrasing, ready to render.
    pub fn entries(&self, now: DateTime<Utc>) -> Vec<DirectoryEntry<'_>> {
        self.visible
            .iter()
            .map(|user| {
                let status = classify(user.last_active, now);
                DirectoryEntry {
                    user,
                    status,
                    indicator_color: status.indicator_color(),
                    last_seen: relative_time(user.last_active, now),
                }
            })
            .collect()
    }

    /// Current presentation mode.
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Select a presentation mode.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    // Recompute the display subset from its two inputs. Called after
    // any mutation of the authoritative collection or the search term.
    fn refresh(&mut self) {
        self.visible = filter_users(&self.users, &self.term);
    }
}
