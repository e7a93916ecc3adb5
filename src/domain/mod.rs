//! Domain layer containing business entities and contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Link storage contract
//! - [`rate_limit`] - Creation quota contract
//! - [`settings`] - Prefix, public origin and reserved paths
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Traits define contracts implemented by the infrastructure layer
//! - Business rules live in services (see [`crate::application::services`])

pub mod entities;
pub mod rate_limit;
pub mod repositories;
pub mod settings;
