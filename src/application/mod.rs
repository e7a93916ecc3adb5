//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository and
//! rate limiter calls, validation, and business rules. Services consume
//! domain traits and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation and administration
//! - [`services::redirect_resolver::RedirectResolver`] - Request path to destination resolution
//! - [`services::access_policy::AccessPolicy`] - Permission decisions from credentials

pub mod services;
