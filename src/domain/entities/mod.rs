//! Core domain entities.
//!
//! - [`UserRecord`] - An account in the credential store
//! - [`NewUser`] - Input for creating an account (admin tool only)
//! - [`SessionToken`] - Opaque bearer token issued at login
//! - [`Session`] - A token registry entry

pub mod session;
pub mod user;

pub use session::{Session, SessionToken};
pub use user::{NewUser, UserRecord};
