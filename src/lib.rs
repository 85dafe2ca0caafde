//! # Token Login
//!
//! A small bearer-token login service built with Axum.
//!
//! A login form posts a username and password to `/token`. On success the
//! service mints a random opaque token, records it in a session store and
//! returns it both as an `Authorization: Bearer` header and as a `session`
//! cookie. Two pages, `/secret/` and `/test/`, are only served to holders of a
//! token whose account is not disabled.
//!
//! The password transform is a fixed string prefix, not a hash. This crate
//! demonstrates the token flow; it is not a template for real authentication.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - User records, session tokens and repository traits
//! - **Application Layer** ([`application`]) - The login flow ([`application::services::AuthService`])
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory and PostgreSQL stores
//! - **Web Layer** ([`web`]) - Handlers, templates and authentication middleware
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//! # open http://localhost:8000/ and log in as testuser / password
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::AuthService;
    pub use crate::domain::entities::{SessionToken, UserRecord};
    pub use crate::domain::repositories::{SessionStore, UserRepository};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryUserRepository;
    pub use crate::infrastructure::session::InMemorySessionStore;
    pub use crate::state::AppState;
}
