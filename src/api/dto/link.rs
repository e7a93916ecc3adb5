//! DTOs for link endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::entities::{Link, LinkRequest};

/// Body of `POST /api/links`.
///
/// Absent fields deserialize as empty strings so the service reports them
/// with its own validation errors.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkRequest {
    #[serde(default, alias = "long_url")]
    pub long_url: String,

    #[serde(default, alias = "custom_url")]
    pub custom_url: String,
}

impl From<CreateLinkRequest> for LinkRequest {
    fn from(r: CreateLinkRequest) -> Self {
        LinkRequest::new(r.long_url, r.custom_url)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkResponse {
    pub short_url: String,
}

/// A stored link as returned by the admin listing.
#[serde_as]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    #[serde_as(as = "DisplayFromStr")]
    pub id: i64,
    pub prefix: String,
    pub slug: String,
    pub long_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
}

impl LinkResponse {
    pub fn new(link: Link, short_url: String) -> Self {
        Self {
            id: link.id,
            prefix: link.prefix,
            slug: link.slug,
            long_url: link.long_url,
            short_url,
            created_at: link.created_at,
        }
    }
}
