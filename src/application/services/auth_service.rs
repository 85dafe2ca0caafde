//! Authentication service: credential checks, token issuance and validation.

use metrics::counter;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::entities::{SessionToken, UserRecord};
use crate::domain::repositories::{SessionStore, UserRepository};
use crate::error::AppError;
use crate::utils::password::verify_password;

/// Service implementing the login flow on top of a credential store and a
/// session store.
///
/// Both collaborators are injected, so the same service runs against the
/// in-memory demo table or PostgreSQL without changes.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    sessions: Arc<dyn SessionStore>,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `users` - credential store used for username lookup
    /// - `sessions` - token registry that issues and resolves bearer tokens
    pub fn new(users: Arc<dyn UserRepository>, sessions: Arc<dyn SessionStore>) -> Self {
        Self { users, sessions }
    }

    /// Checks a username/password pair against the credential store.
    ///
    /// The `disabled` flag is not consulted here; disabled accounts are
    /// rejected by [`Self::authorize_active`].
    ///
    /// # Errors
    ///
    /// - [`AppError::UnknownUser`] if the username does not exist
    /// - [`AppError::BadPassword`] if the password does not match
    /// - [`AppError::Internal`] on storage errors
    pub async fn check_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<UserRecord, AppError> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or(AppError::UnknownUser)?;

        if !verify_password(password, &user.hashed_password) {
            return Err(AppError::BadPassword);
        }

        Ok(user)
    }

    /// Checks credentials and, on success, issues a new bearer token.
    ///
    /// Every successful call yields a fresh token; earlier tokens for the same
    /// user stay valid.
    ///
    /// # Errors
    ///
    /// Same as [`Self::check_credentials`], plus [`AppError::Internal`] if the
    /// token cannot be issued.
    pub async fn login(&self, username: &str, password: &str) -> Result<SessionToken, AppError> {
        let user = match self.check_credentials(username, password).await {
            Ok(user) => user,
            Err(e) => {
                counter!("auth_login_attempts_total", "outcome" => e.code()).increment(1);
                warn!(username = %username, reason = %e, "Login rejected");
                return Err(e);
            }
        };

        let token = self.sessions.issue(user).await?;

        counter!("auth_login_attempts_total", "outcome" => "success").increment(1);
        info!(username = %username, "Login succeeded");

        Ok(token)
    }

    /// Resolves a presented token to the account it was issued for.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UnauthenticatedToken`] if the token was never issued.
    pub async fn authenticate(&self, token: &str) -> Result<UserRecord, AppError> {
        self.sessions
            .lookup(token)
            .await?
            .ok_or(AppError::UnauthenticatedToken)
    }

    /// Resolves a token and requires its account to be active.
    ///
    /// This is the gate in front of every protected page.
    ///
    /// # Errors
    ///
    /// - [`AppError::UnauthenticatedToken`] if the token was never issued
    /// - [`AppError::InactiveAccount`] if the account is disabled
    pub async fn authorize_active(&self, token: &str) -> Result<UserRecord, AppError> {
        let user = self.authenticate(token).await?;

        if !user.is_active() {
            return Err(AppError::InactiveAccount);
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockSessionStore, MockUserRepository};
    use crate::infrastructure::persistence::InMemoryUserRepository;
    use crate::infrastructure::session::InMemorySessionStore;

    fn testuser() -> UserRecord {
        UserRecord::new(
            "testuser",
            Some("johndoe@example.com".to_string()),
            Some("John Doe".to_string()),
            false,
            "fakehashedpassword",
        )
    }

    fn seeded_service() -> AuthService {
        AuthService::new(
            Arc::new(InMemoryUserRepository::seeded()),
            Arc::new(InMemorySessionStore::new()),
        )
    }

    #[tokio::test]
    async fn test_check_credentials_success() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .withf(|username| username == "testuser")
            .times(1)
            .returning(|_| Ok(Some(testuser())));

        let service = AuthService::new(Arc::new(users), Arc::new(MockSessionStore::new()));

        let user = service
            .check_credentials("testuser", "password")
            .await
            .unwrap();

        assert_eq!(user.username, "testuser");
        assert!(!user.disabled);
    }

    #[tokio::test]
    async fn test_check_credentials_unknown_user() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));

        let service = AuthService::new(Arc::new(users), Arc::new(MockSessionStore::new()));

        let result = service.check_credentials("nobody", "password").await;

        assert!(matches!(result, Err(AppError::UnknownUser)));
    }

    #[tokio::test]
    async fn test_check_credentials_bad_password() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(Some(testuser())));

        let service = AuthService::new(Arc::new(users), Arc::new(MockSessionStore::new()));

        let result = service.check_credentials("testuser", "wrong").await;

        assert!(matches!(result, Err(AppError::BadPassword)));
    }

    #[tokio::test]
    async fn test_check_credentials_propagates_storage_error() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .times(1)
            .returning(|_| Err(AppError::internal("connection reset")));

        let service = AuthService::new(Arc::new(users), Arc::new(MockSessionStore::new()));

        let result = service.check_credentials("testuser", "password").await;

        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn test_login_issues_token_for_checked_user() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .returning(|_| Ok(Some(testuser())));

        let mut sessions = MockSessionStore::new();
        sessions
            .expect_issue()
            .withf(|user| user.username == "testuser")
            .times(1)
            .returning(|_| Ok(SessionToken::new("issued-token")));

        let service = AuthService::new(Arc::new(users), Arc::new(sessions));

        let token = service.login("testuser", "password").await.unwrap();

        assert_eq!(token.as_str(), "issued-token");
    }

    #[tokio::test]
    async fn test_login_failure_issues_nothing() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .returning(|_| Ok(Some(testuser())));

        let mut sessions = MockSessionStore::new();
        sessions.expect_issue().times(0);

        let service = AuthService::new(Arc::new(users), Arc::new(sessions));

        let result = service.login("testuser", "nope").await;

        assert!(matches!(result, Err(AppError::BadPassword)));
    }

    #[tokio::test]
    async fn test_authenticate_unknown_token() {
        let mut sessions = MockSessionStore::new();
        sessions
            .expect_lookup()
            .withf(|token| token == "never-issued")
            .times(1)
            .returning(|_| Ok(None));

        let service = AuthService::new(Arc::new(MockUserRepository::new()), Arc::new(sessions));

        let result = service.authenticate("never-issued").await;

        assert!(matches!(result, Err(AppError::UnauthenticatedToken)));
    }

    #[tokio::test]
    async fn test_authorize_active_rejects_disabled_account() {
        let mut sessions = MockSessionStore::new();
        sessions.expect_lookup().returning(|_| {
            Ok(Some(UserRecord::new(
                "alice",
                None,
                None,
                true,
                "fakehashedsecret2",
            )))
        });

        let service = AuthService::new(Arc::new(MockUserRepository::new()), Arc::new(sessions));

        assert!(service.authenticate("alice-token").await.is_ok());
        assert!(matches!(
            service.authorize_active("alice-token").await,
            Err(AppError::InactiveAccount)
        ));
    }

    #[tokio::test]
    async fn test_authorize_active_uses_record_from_login() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_username().times(1).returning(|_| {
            Ok(Some(UserRecord::new(
                "bob",
                None,
                None,
                false,
                "fakehashedhunter2",
            )))
        });

        let service = AuthService::new(Arc::new(users), Arc::new(InMemorySessionStore::new()));

        let token = service.login("bob", "hunter2").await.unwrap();

        // The credential store is not consulted again: a later change to the
        // account does not reach tokens that were already issued.
        let user = service.authorize_active(token.as_str()).await.unwrap();
        assert_eq!(user.username, "bob");
        assert!(service.authorize_active(token.as_str()).await.is_ok());
    }

    #[tokio::test]
    async fn test_seeded_testuser_full_flow() {
        let service = seeded_service();

        let token = service.login("testuser", "password").await.unwrap();
        let user = service.authorize_active(token.as_str()).await.unwrap();

        assert_eq!(user.username, "testuser");
        assert!(!user.disabled);
    }

    #[tokio::test]
    async fn test_seeded_alice_logs_in_but_is_inactive() {
        let service = seeded_service();

        let token = service.login("alice", "secret2").await.unwrap();

        let user = service.authenticate(token.as_str()).await.unwrap();
        assert_eq!(user.username, "alice");
        assert!(matches!(
            service.authorize_active(token.as_str()).await,
            Err(AppError::InactiveAccount)
        ));
    }

    #[tokio::test]
    async fn test_two_logins_yield_two_valid_tokens() {
        let service = seeded_service();

        let first = service.login("testuser", "password").await.unwrap();
        let second = service.login("testuser", "password").await.unwrap();

        assert_ne!(first, second);
        assert!(service.authorize_active(first.as_str()).await.is_ok());
        assert!(service.authorize_active(second.as_str()).await.is_ok());
    }

    #[tokio::test]
    async fn test_unknown_usernames_are_rejected() {
        let service = seeded_service();

        for username in ["", "bob", "testuser ", "ALICE", "fakehashedpassword"] {
            let result = service.check_credentials(username, "password").await;
            assert!(
                matches!(result, Err(AppError::UnknownUser)),
                "expected UnknownUser for {username:?}"
            );
        }
    }

    #[tokio::test]
    async fn test_arbitrary_strings_are_not_tokens() {
        let service = seeded_service();
        service.login("testuser", "password").await.unwrap();

        for token in ["", "testuser", "Bearer", "00000000000000000000000000000000"] {
            assert!(matches!(
                service.authorize_active(token).await,
                Err(AppError::UnauthenticatedToken)
            ));
        }
    }
}
