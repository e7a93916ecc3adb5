//! Utility functions shared across layers.
//!
//! - [`slug`] - Canonical slug normalization
//! - [`url_validator`] - Destination URL validation
//! - [`client_ip`] - Caller identity extraction from HTTP headers
//! - [`db_error`] - PostgreSQL error classification

pub mod client_ip;
pub mod db_error;
pub mod slug;
pub mod url_validator;
