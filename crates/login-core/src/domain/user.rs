//! The `User` entity.

use std::fmt;

use serde::Deserialize;

/// An immutable user record: a nickname and a password.
///
/// There is no identity field and no uniqueness rule; two users with the same
/// fields are indistinguishable.  Fields are private so a `User` cannot be
/// changed after construction.
///
/// `Deserialize` is derived so a real service adapter can decode users from a
/// response payload.  `Serialize` is intentionally absent: the password must
/// never flow back out through a DTO.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    nick: String,
    password: String,
}

impl User {
    /// Creates a user from raw fields.  No validation is performed.
    pub fn new(nick: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            nick: nick.into(),
            password: password.into(),
        }
    }

    /// The user's nickname.
    pub fn nick(&self) -> &str {
        &self.nick
    }

    /// The user's password, exactly as supplied.
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("nick", &self.nick)
            .field("password", &"<redacted>")
            .finish()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_fields_exactly() {
        let user = User::new("test", "123");
        assert_eq!(user.nick(), "test");
        assert_eq!(user.password(), "123");
    }

    #[test]
    fn test_new_accepts_empty_fields() {
        let user = User::new("", "");
        assert_eq!(user.nick(), "");
        assert_eq!(user.password(), "");
    }

    #[test]
    fn test_debug_output_redacts_password() {
        // Arrange
        let user = User::new("alice", "hunter2");

        // Act
        let rendered = format!("{user:?}");

        // Assert
        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("hunter2"), "password leaked: {rendered}");
    }

    #[test]
    fn test_users_with_same_fields_compare_equal() {
        assert_eq!(User::new("a", "b"), User::new("a", "b"));
        assert_ne!(User::new("a", "b"), User::new("a", "c"));
    }

    #[test]
    fn test_user_deserializes_from_service_payload() {
        // Arrange
        let payload = r#"{ "nick": "bob", "password": "pw" }"#;

        // Act
        let user: User = serde_json::from_str(payload).expect("valid payload");

        // Assert
        assert_eq!(user, User::new("bob", "pw"));
    }

    #[test]
    fn test_user_payload_missing_password_is_rejected() {
        let result: Result<User, _> = serde_json::from_str(r#"{ "nick": "bob" }"#);
        assert!(result.is_err());
    }
}
