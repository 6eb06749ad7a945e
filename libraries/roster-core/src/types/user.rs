/// User domain types
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account role as reported by the backend.
///
/// The backend only issues `admin` and `agent`; anything else lands in
/// `Other` so an unexpected value can never break rendering. `Other`
/// users are counted in totals but in neither role bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Role {
    /// Administrator account
    Admin,
    /// Agent account
    Agent,
    /// Any role string this view does not recognize
    #[default]
    Other,
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            "admin" => Role::Admin,
            "agent" => Role::Agent,
            _ => Role::Other,
        }
    }
}

/// A registered user as returned by the directory backend.
///
/// This is a read-only projection; the view never mutates or writes
/// back user records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, stable across fetches
    pub id: String,

    /// Display name (empty when the backend omits it)
    #[serde(default)]
    pub name: String,

    /// Email address (empty when the backend omits it)
    #[serde(default)]
    pub email: String,

    /// Account role
    #[serde(default)]
    pub role: Role,

    /// Last activity timestamp, absent for users that never signed in
    #[serde(default)]
    pub last_active: Option<DateTime<Utc>>,

    /// Account creation timestamp (display-only)
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// Whether the account is suspended (display-only)
    #[serde(default)]
    pub suspended: bool,
}

impl User {
    /// Create a user with the given identity fields and no activity
    /// history.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
            last_active: None,
            created_at: None,
            suspended: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_known_values() {
        assert_eq!(Role::from("admin".to_string()), Role::Admin);
        assert_eq!(Role::from("agent".to_string()), Role::Agent);
    }

    #[test]
    fn role_falls_back_on_unknown_values() {
        assert_eq!(Role::from("manager".to_string()), Role::Other);
        assert_eq!(Role::from("".to_string()), Role::Other);
        // Matching is exact; the backend sends lowercase
        assert_eq!(Role::from("Admin".to_string()), Role::Other);
    }

    #[test]
    fn user_deserializes_with_missing_optional_fields() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": "u1",
            "role": "agent"
        }))
        .unwrap();

        assert_eq!(user.id, "u1");
        assert_eq!(user.name, "");
        assert_eq!(user.email, "");
        assert_eq!(user.role, Role::Agent);
        assert!(user.last_active.is_none());
        assert!(user.created_at.is_none());
        assert!(!user.suspended);
    }

    #[test]
    fn user_deserializes_unknown_role_without_error() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": "u2",
            "name": "Mallory Manager",
            "email": "mallory@x.com",
            "role": "manager"
        }))
        .unwrap();

        assert_eq!(user.role, Role::Other);
    }

    #[test]
    fn user_deserializes_timestamps() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": "u3",
            "name": "Alice",
            "email": "alice@x.com",
            "role": "admin",
            "last_active": "2024-03-01T12:00:00Z",
            "created_at": "2023-01-01T00:00:00Z",
            "suspended": true
        }))
        .unwrap();

        assert!(user.last_active.is_some());
        assert!(user.created_at.is_some());
        assert!(user.suspended);
    }
}
