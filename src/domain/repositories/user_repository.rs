//! Repository trait for the credential store.

use crate::domain::entities::UserRecord;
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to known accounts.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryUserRepository`] - Fixed seed table
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds an account by its unique username.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(user))` if the username exists
    /// - `Ok(None)` otherwise
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, AppError>;
}
