//! Domain layer containing the account and session model.
//!
//! - [`entities`] - User records and session tokens
//! - [`repositories`] - Credential store and session store trait definitions
//!
//! The domain layer has no dependencies on the web or infrastructure layers.
//! Login logic built on these traits lives in
//! [`crate::application::services::AuthService`].

pub mod entities;
pub mod repositories;
