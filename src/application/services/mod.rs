//! Business logic services for the application layer.

pub mod access_policy;
pub mod link_service;
pub mod redirect_resolver;

pub use access_policy::AccessPolicy;
pub use link_service::{CreatedLink, LinkService};
pub use redirect_resolver::{RedirectResolver, Resolution};
