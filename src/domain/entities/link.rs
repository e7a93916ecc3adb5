//! Link entity representing a short path mapped to a destination URL.

use chrono::{DateTime, Utc};
use validator::Validate;

/// A stored short link.
///
/// Links are immutable once created. The `(prefix, slug)` pair is unique
/// among all stored links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub prefix: String,
    pub slug: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        prefix: String,
        slug: String,
        long_url: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            prefix,
            slug,
            long_url,
            created_at,
        }
    }

    /// Path component of the short URL, without a leading slash.
    pub fn short_path(&self) -> String {
        format!("{}/{}", self.prefix, self.slug)
    }
}

/// Input data for inserting a link into storage.
///
/// All fields are already validated and normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub prefix: String,
    pub slug: String,
    pub long_url: String,
}

/// Raw creation request as supplied by a caller, before normalization.
#[derive(Debug, Clone, Validate)]
pub struct LinkRequest {
    #[validate(length(min = 1, message = "URL to shorten is required"))]
    pub long_url: String,

    #[validate(length(min = 1, max = 256, message = "Custom URL must be 1-256 characters"))]
    pub custom_url: String,
}

impl LinkRequest {
    pub fn new(long_url: impl Into<String>, custom_url: impl Into<String>) -> Self {
        Self {
            long_url: long_url.into(),
            custom_url: custom_url.into(),
        }
    }
}
