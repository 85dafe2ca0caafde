//! Process-wide in-memory token registry.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{Session, SessionToken, UserRecord};
use crate::domain::repositories::SessionStore;
use crate::error::AppError;
use crate::utils::token_generator::generate_token;

/// Token registry backed by a `HashMap` behind an async `RwLock`.
///
/// Entries are only ever inserted. Nothing expires and nothing is pruned, so
/// the map grows for the lifetime of the process and is lost on restart.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tokens issued since startup.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn issue(&self, user: UserRecord) -> Result<SessionToken, AppError> {
        let token = generate_token()?;
        let username = user.username.clone();

        let total = {
            let mut sessions = self.sessions.write().await;
            sessions.insert(token.as_str().to_string(), Session::new(user));
            sessions.len()
        };

        debug!(username = %username, total, "Session issued");

        Ok(token)
    }

    async fn lookup(&self, token: &str) -> Result<Option<UserRecord>, AppError> {
        let sessions = self.sessions.read().await;

        Ok(sessions.get(token).map(|session| {
            debug!(
                username = %session.user.username,
                issued_at = %session.issued_at,
                "Session resolved"
            );
            session.user.clone()
        }))
    }
}
