//! User entity representing an account in the credential store.

use serde::Serialize;

/// An account known to the credential store.
///
/// Records are read-only once loaded: the web service never mutates or deletes
/// them. `hashed_password` holds the output of
/// [`crate::utils::password::fake_hash_password`], not a real password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub disabled: bool,
    #[serde(skip_serializing)]
    pub hashed_password: String,
}

impl UserRecord {
    /// Creates a new UserRecord instance.
    pub fn new(
        username: impl Into<String>,
        email: Option<String>,
        full_name: Option<String>,
        disabled: bool,
        hashed_password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email,
            full_name,
            disabled,
            hashed_password: hashed_password.into(),
        }
    }

    /// Returns true if the account may access protected pages.
    pub fn is_active(&self) -> bool {
        !self.disabled
    }
}

/// Input data for creating a user through the admin tool.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub hashed_password: String,
}
