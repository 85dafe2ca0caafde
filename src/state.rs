//! Shared application state injected into handlers and middleware.

use std::sync::Arc;

use crate::application::services::AuthService;
use crate::domain::repositories::{SessionStore, UserRepository};

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    /// Wires the credential store and session store into the auth service.
    pub fn new(users: Arc<dyn UserRepository>, sessions: Arc<dyn SessionStore>) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(users, sessions)),
        }
    }
}
