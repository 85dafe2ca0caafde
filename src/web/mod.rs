//! Browser-facing layer.
//!
//! Provides the login page, the token endpoint and the two protected pages.
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering and token issuance handlers
//! - [`middleware`] - Bearer/cookie authentication and request tracing
//! - [`routes`] - Public and protected route configuration

pub mod handlers;
pub mod middleware;
pub mod routes;
