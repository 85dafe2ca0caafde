//! HTTP middleware for authentication and observability.

pub mod bearer_auth;
pub mod tracing;
