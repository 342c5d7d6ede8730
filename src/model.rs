//! Directory data model

use serde::{Deserialize, Serialize};

/// A user known to the directory service.
///
/// The service may send additional fields (ids, emails, timestamps); they are
/// ignored on decode. Only `username` identifies a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
}

impl User {
    #[allow(unused)]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

/// Exact, case-sensitive membership check over the fetched directory.
pub fn is_known_user(users: &[User], username: &str) -> bool {
    users.iter().any(|user| user.username == username)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let json = r#"[
            {"username": "alice", "email": "alice@example.com", "public_id": "6f1c"},
            {"username": "bob"}
        ]"#;
        let users: Vec<User> = serde_json::from_str(json).unwrap();
        assert_eq!(users, vec![User::new("alice"), User::new("bob")]);
    }

    #[test]
    fn test_decode_rejects_missing_username() {
        let json = r#"[{"name": "alice"}]"#;
        assert!(serde_json::from_str::<Vec<User>>(json).is_err());
    }

    #[test]
    fn test_membership_is_exact_and_case_sensitive() {
        let users = vec![User::new("alice"), User::new("bob")];

        assert!(is_known_user(&users, "alice"));
        assert!(is_known_user(&users, "bob"));

        assert!(!is_known_user(&users, "Alice"));
        assert!(!is_known_user(&users, " alice"));
        assert!(!is_known_user(&users, "alice "));
        assert!(!is_known_user(&users, "ali"));
        assert!(!is_known_user(&users, ""));
    }

    #[test]
    fn test_membership_against_empty_directory() {
        assert!(!is_known_user(&[], "anyone"));
        assert!(!is_known_user(&[], ""));
    }

    #[test]
    fn test_empty_username_matches_only_an_empty_entry() {
        let users = vec![User::new("")];
        assert!(is_known_user(&users, ""));
        assert!(!is_known_user(&users, "x"));
    }
}
