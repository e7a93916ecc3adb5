//! Data Transfer Objects for API requests and responses.
//!
//! Request bodies accept both camelCase and snake_case field names.

pub mod health;
pub mod link;
