//! Repository trait definitions for the domain layer.
//!
//! These traits abstract the two pieces of state the login flow touches:
//! the credential store and the token registry. Concrete implementations live
//! in `crate::infrastructure`; mock implementations are generated via
//! `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - Account lookup by username
//! - [`SessionStore`] - Token issuance and lookup

pub mod session_store;
pub mod user_repository;

pub use session_store::SessionStore;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use session_store::MockSessionStore;
#[cfg(test)]
pub use user_repository::MockUserRepository;
