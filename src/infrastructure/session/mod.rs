//! Session store implementations.
//!
//! - [`InMemorySessionStore`] - Process-wide map, never pruned

mod in_memory_session_store;

pub use in_memory_session_store::InMemorySessionStore;
