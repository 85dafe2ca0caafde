//! Business logic services for the application layer.

pub mod auth_service;

pub use auth_service::AuthService;
