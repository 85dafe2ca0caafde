//! Credential store implementations.
//!
//! - [`InMemoryUserRepository`] - Fixed demo table, used when no database is configured
//! - [`PgUserRepository`] - PostgreSQL `users` table via SQLx

pub mod in_memory_user_repository;
pub mod pg_user_repository;

pub use in_memory_user_repository::{InMemoryUserRepository, seed_users};
pub use pg_user_repository::{PgUserRepository, StoredUser};
