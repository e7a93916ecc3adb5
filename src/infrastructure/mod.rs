//! Infrastructure layer for external integrations.
//!
//! This layer implements the contracts defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - Link storage (PostgreSQL and in-memory)
//! - [`rate_limit`] - Creation quota counters (Redis and in-memory)

pub mod persistence;
pub mod rate_limit;
