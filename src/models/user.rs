//! User model
//!
//! A registered user of the tracker. Users are created on registration and
//! never mutated or deleted; the username is unique across the store.

use super::ids::UserId;

/// A registered user
///
/// The password is a cleartext credential used only for an exact-string
/// comparison at login. Hashing is deliberately out of scope here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Row id assigned by storage on registration
    pub id: UserId,

    /// Unique login name
    pub username: String,

    /// Cleartext credential, never displayed
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_construction() {
        let user = User {
            id: UserId::from_raw(1),
            username: "alice".into(),
            password: "pw1".into(),
        };
        assert_eq!(user.id.as_i64(), 1);
        assert_eq!(user.username, "alice");
    }
}
