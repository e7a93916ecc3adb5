//! Link storage implementations.
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] - PostgreSQL storage; uniqueness enforced by the
//!   `links_prefix_slug_key` constraint
//! - [`InMemoryLinkRepository`] - process-local storage for development and tests

pub mod memory_link_repository;
pub mod pg_link_repository;

pub use memory_link_repository::InMemoryLinkRepository;
pub use pg_link_repository::PgLinkRepository;
