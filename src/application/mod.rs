//! Application layer services implementing the login flow.
//!
//! Services consume repository traits and provide a small API for HTTP
//! handlers and middleware.
//!
//! # Available Services
//!
//! - [`services::auth_service::AuthService`] - Credential check, token issuance and validation

pub mod services;
