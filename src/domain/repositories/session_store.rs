//! Session store trait (the token registry).

use crate::domain::entities::{SessionToken, UserRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Maps issued bearer tokens to the accounts they authenticate.
///
/// Callers only see `issue` and `lookup`, so an expiring or persistent store
/// can replace the in-memory one without touching handlers or services.
///
/// # Implementations
///
/// - [`crate::infrastructure::session::InMemorySessionStore`] - Process-wide map, never pruned
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Mints a fresh random token for `user` and records it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if no entropy is available or the
    /// backing store fails.
    async fn issue(&self, user: UserRecord) -> Result<SessionToken, AppError>;

    /// Returns the account a token was issued for, or `None` if the token
    /// was never issued.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn lookup(&self, token: &str) -> Result<Option<UserRecord>, AppError>;
}
