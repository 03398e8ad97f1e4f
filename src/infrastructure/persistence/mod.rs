//! Durable store implementations.
//!
//! - [`PgLinkStore`] - PostgreSQL storage via SQLx
//! - [`MemoryLinkStore`] - In-process storage for tests and local development

pub mod memory_link_store;
pub mod pg_link_store;

pub use memory_link_store::MemoryLinkStore;
pub use pg_link_store::PgLinkStore;
