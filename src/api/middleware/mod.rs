//! HTTP middleware for request processing.
//!
//! Provides short-link redirection and observability middleware.

pub mod redirect;
pub mod tracing;
