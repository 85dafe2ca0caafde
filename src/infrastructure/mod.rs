//! Infrastructure layer implementing the domain repository traits.
//!
//! # Modules
//!
//! - [`persistence`] - Credential stores (in-memory and PostgreSQL)
//! - [`session`] - Token registry implementations

pub mod persistence;
pub mod session;
