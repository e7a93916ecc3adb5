//! Core domain entities representing the business data model.
//!
//! - [`Link`] - A stored short link
//! - [`NewLink`] - Validated input for inserting a link
//! - [`LinkRequest`] - Raw caller input for creating a link
//! - [`Caller`] - Identity and permissions of the requesting party

pub mod caller;
pub mod link;

pub use caller::Caller;
pub use link::{Link, LinkRequest, NewLink};
