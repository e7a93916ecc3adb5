//! Short path resolution for inbound requests.

use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::repositories::LinkRepository;
use crate::domain::settings::PathExclusion;
use crate::utils::slug::normalize;

/// Status code used for every short-link redirect.
pub const PERMANENT_REDIRECT: u16 = 301;

/// Outcome of resolving a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Send the visitor to `location`.
    Redirect { location: String, status: u16 },
    /// Not a short link; normal request handling continues.
    PassThrough,
}

/// Maps `/{prefix}/{slug}` paths onto stored destinations.
pub struct RedirectResolver {
    link_repository: Arc<dyn LinkRepository>,
    exclusion: PathExclusion,
}

impl RedirectResolver {
    pub fn new(link_repository: Arc<dyn LinkRepository>, exclusion: PathExclusion) -> Self {
        Self {
            link_repository,
            exclusion,
        }
    }

    /// Resolves a raw request path.
    ///
    /// Never fails. Reserved paths, malformed paths, unknown keys and
    /// storage errors all yield [`Resolution::PassThrough`]. A path is
    /// reserved if its first segment matches before or after decoding, or
    /// once normalized.
    pub async fn resolve(&self, path: &str) -> Resolution {
        if self.exclusion.is_excluded(path)
            || self.exclusion.is_excluded(&decode_segment(path))
        {
            return Resolution::PassThrough;
        }

        let Some((prefix, slug)) = parse_short_path(path) else {
            return Resolution::PassThrough;
        };
        if self.exclusion.is_excluded(&prefix) {
            return Resolution::PassThrough;
        }

        match self.link_repository.find_by_key(&prefix, &slug).await {
            Ok(Some(link)) => {
                debug!(prefix = %prefix, slug = %slug, "Short link resolved");
                metrics::counter!("webcut_redirects_total").increment(1);
                Resolution::Redirect {
                    location: link.long_url,
                    status: PERMANENT_REDIRECT,
                }
            }
            Ok(None) => Resolution::PassThrough,
            Err(e) => {
                error!(prefix = %prefix, slug = %slug, error = %e, "Short link lookup failed");
                Resolution::PassThrough
            }
        }
    }
}

/// Extracts the canonical `(prefix, slug)` pair from a path.
///
/// Only the first two segments count. Anything after a second `/` is
/// ignored.
fn parse_short_path(path: &str) -> Option<(String, String)> {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        return None;
    }

    let mut segments = trimmed.splitn(3, '/');
    let prefix = normalize(&decode_segment(segments.next()?));
    let slug = normalize(&decode_segment(segments.next()?));

    if prefix.is_empty() || slug.is_empty() {
        return None;
    }

    Some((prefix, slug))
}

fn decode_segment(segment: &str) -> String {
    String::from_utf8_lossy(&urlencoding::decode_binary(segment.as_bytes())).into_owned()
}
