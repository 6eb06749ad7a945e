//! Role aggregation over the display subset.

use roster_core::{Role, User};

/// Summary counts over the current display subset.
///
/// `total` counts every visible user; `admins` and `agents` count
/// exact role matches. Unrecognized roles contribute to `total` only,
/// so `admins + agents <= total` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoleCounts {
    /// Number of users in the display subset
    pub total: usize,
    /// Users with the admin role
    pub admins: usize,
    /// Users with the agent role
    pub agents: usize,
}

/// Compute role counts for the given display subset.
///
/// Always computed fresh from the subset passed in; callers must not
/// cache the result across filter passes.
pub fn aggregate(users: &[User]) -> RoleCounts {
    let mut counts = RoleCounts {
        total: users.len(),
        ..RoleCounts::default()
    };

    for user in users {
        match user.role {
            Role::Admin => counts.admins += 1,
            Role::Agent => counts.agents += 1,
            Role::Other => {}
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_subset() {
        assert_eq!(aggregate(&[]), RoleCounts::default());
    }

    #[test]
    fn counts_each_role() {
        let users = vec![
            User::new("u1", "Alice", "alice@x.com", Role::Admin),
            User::new("u2", "Bob", "bob@x.com", Role::Agent),
            User::new("u3", "Cara", "cara@x.com", Role::Agent),
        ];

        let counts = aggregate(&users);
        assert_eq!(counts.total, 3);
        assert_eq!(counts.admins, 1);
        assert_eq!(counts.agents, 2);
    }

    #[test]
    fn unknown_role_counts_toward_total_only() {
        let users = vec![
            User::new("u1", "Alice", "alice@x.com", Role::Admin),
            User::new("u2", "Mallory", "mallory@x.com", Role::Other),
        ];

        let counts = aggregate(&users);
        assert_eq!(counts.total, 2);
        assert_eq!(counts.admins, 1);
        assert_eq!(counts.agents, 0);
        assert!(counts.admins + counts.agents <= counts.total);
    }
}
