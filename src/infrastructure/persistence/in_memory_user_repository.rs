//! In-memory implementation of the credential store.

use async_trait::async_trait;
use std::collections::HashMap;
use tracing::debug;

use crate::domain::entities::UserRecord;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Fixed username → account table held in memory.
///
/// Built once at startup and never modified, so lookups need no locking.
pub struct InMemoryUserRepository {
    users: HashMap<String, UserRecord>,
}

impl InMemoryUserRepository {
    /// Creates a repository from the given records, keyed by username.
    ///
    /// If two records share a username, the later one wins.
    pub fn from_records(records: impl IntoIterator<Item = UserRecord>) -> Self {
        let users: HashMap<_, _> = records
            .into_iter()
            .map(|user| (user.username.clone(), user))
            .collect();

        debug!(count = users.len(), "Loaded in-memory user table");

        Self { users }
    }

    /// Creates the demo table with `testuser` (active) and `alice` (disabled).
    pub fn seeded() -> Self {
        Self::from_records(seed_users())
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Demo accounts. Must stay in sync with the seed rows in `migrations/`.
pub fn seed_users() -> Vec<UserRecord> {
    vec![
        UserRecord::new(
            "testuser",
            Some("johndoe@example.com".to_string()),
            Some("John Doe".to_string()),
            false,
            "fakehashedpassword",
        ),
        UserRecord::new(
            "alice",
            Some("alice@example.com".to_string()),
            Some("Alice Wonderson".to_string()),
            true,
            "fakehashedsecret2",
        ),
    ]
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, AppError> {
        Ok(self.users.get(username).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_users() {
        let repo = InMemoryUserRepository::seeded();

        assert_eq!(repo.len(), 2);

        let testuser = repo.find_by_username("testuser").await.unwrap().unwrap();
        assert!(!testuser.disabled);
        assert_eq!(testuser.full_name.as_deref(), Some("John Doe"));

        let alice = repo.find_by_username("alice").await.unwrap().unwrap();
        assert!(alice.disabled);
        assert_eq!(alice.hashed_password, "fakehashedsecret2");
    }

    #[tokio::test]
    async fn test_unknown_username_returns_none() {
        let repo = InMemoryUserRepository::seeded();

        assert!(repo.find_by_username("mallory").await.unwrap().is_none());
        assert!(repo.find_by_username("").await.unwrap().is_none());
        assert!(repo.find_by_username("TestUser").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_from_records_later_duplicate_wins() {
        let repo = InMemoryUserRepository::from_records(vec![
            UserRecord::new("bob", None, None, false, "first"),
            UserRecord::new("bob", None, None, true, "second"),
        ]);

        assert_eq!(repo.len(), 1);
        let bob = repo.find_by_username("bob").await.unwrap().unwrap();
        assert_eq!(bob.hashed_password, "second");
    }

    #[test]
    fn test_empty_repository() {
        let repo = InMemoryUserRepository::from_records(Vec::new());
        assert!(repo.is_empty());
    }
}
