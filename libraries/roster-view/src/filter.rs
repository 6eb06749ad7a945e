//! Search filtering over the authoritative user collection.

use roster_core::User;

/// Derive the display subset for a search term.
///
/// A user is included iff the case-folded term is a substring of the
/// case-folded name or email. The empty term matches everyone. No
/// tokenization, no fuzzy matching, no trimming: the term is used
/// exactly as given. Pure function; relative order of the input is
/// preserved.
pub fn filter_users(users: &[User], term: &str) -> Vec<User> {
    if term.is_empty() {
        return users.to_vec();
    }

    let needle = term.to_lowercase();
    users
        .iter()
        .filter(|user| {
            user.name.to_lowercase().contains(&needle)
                || user.email.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
