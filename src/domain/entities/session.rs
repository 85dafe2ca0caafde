//! Session token and session entry types.

use chrono::{DateTime, Utc};
use std::fmt;

use super::user::UserRecord;

/// Opaque bearer token handed to a client after a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SessionToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// An issued session: the account it authenticates and when it was issued.
///
/// Sessions never expire; `issued_at` is informational only.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: UserRecord,
    pub issued_at: DateTime<Utc>,
}

impl Session {
    pub fn new(user: UserRecord) -> Self {
        Self {
            user,
            issued_at: Utc::now(),
        }
    }
}
