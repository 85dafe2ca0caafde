//! Utility functions shared by services and the admin tool.
//!
//! - [`password`] - Demo password transform and comparison
//! - [`token_generator`] - Random session token generation
//! - [`bearer`] - `Authorization: Bearer` header parsing
//! - [`cookie`] - `Cookie` header parsing

pub mod bearer;
pub mod cookie;
pub mod password;
pub mod token_generator;
