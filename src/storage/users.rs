//! User persistence
//!
//! Row-level operations on the users table. The username uniqueness
//! invariant lives here, enforced by the UNIQUE constraint.

use rusqlite::{params, OptionalExtension};

use crate::error::{FinanceError, FinanceResult};
use crate::models::{User, UserId};

use super::Storage;

impl Storage {
    /// Insert a new user, returning the assigned id
    ///
    /// Fails with [`FinanceError::DuplicateUsername`] if the username is
    /// already present.
    pub fn insert_user(&self, username: &str, password: &str) -> FinanceResult<UserId> {
        let conn = self.open()?;

        let result = conn.execute(
            "INSERT INTO users (username, password) VALUES (?1, ?2)",
            params![username, password],
        );

        match result {
            Ok(_) => Ok(UserId::from(conn.last_insert_rowid())),
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                // The only constraint reachable from this insert is the
                // UNIQUE on username.
                Err(FinanceError::DuplicateUsername(username.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Find a user by exact username and password match
    ///
    /// Returns `None` when either field mismatches; the caller decides how
    /// to report that.
    pub fn find_user(&self, username: &str, password: &str) -> FinanceResult<Option<User>> {
        let conn = self.open()?;

        let user = conn
            .query_row(
                "SELECT id, username, password FROM users
                 WHERE username = ?1 AND password = ?2",
                params![username, password],
                |row| {
                    Ok(User {
                        id: UserId::from(row.get::<_, i64>(0)?),
                        username: row.get(1)?,
                        password: row.get(2)?,
                    })
                },
            )
            .optional()?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::create_test_storage;
    use crate::error::FinanceError;

    #[test]
    fn test_insert_and_find_user() {
        let (_temp_dir, storage) = create_test_storage();

        let id = storage.insert_user("alice", "pw1").unwrap();
        let user = storage.find_user("alice", "pw1").unwrap().unwrap();

        assert_eq!(user.id, id);
        assert_eq!(user.username, "alice");
    }

    #[test]
    fn test_duplicate_username_rejected() {
        let (_temp_dir, storage) = create_test_storage();

        storage.insert_user("alice", "pw1").unwrap();
        let err = storage.insert_user("alice", "other").unwrap_err();

        assert!(matches!(err, FinanceError::DuplicateUsername(name) if name == "alice"));
    }

    #[test]
    fn test_find_user_exact_match_only() {
        let (_temp_dir, storage) = create_test_storage();

        storage.insert_user("alice", "pw1").unwrap();

        assert!(storage.find_user("alice", "wrong").unwrap().is_none());
        assert!(storage.find_user("Alice", "pw1").unwrap().is_none());
        assert!(storage.find_user("bob", "pw1").unwrap().is_none());
    }

    #[test]
    fn test_user_id_is_stable() {
        let (_temp_dir, storage) = create_test_storage();

        let id = storage.insert_user("alice", "pw1").unwrap();
        let first = storage.find_user("alice", "pw1").unwrap().unwrap();
        let second = storage.find_user("alice", "pw1").unwrap().unwrap();

        assert_eq!(first.id, id);
        assert_eq!(second.id, id);
    }
}
