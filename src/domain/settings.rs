//! Routing settings shared by link creation and redirect resolution.

use crate::utils::slug::normalize;

/// Prefix used when none is configured or the configured one is unusable.
pub const DEFAULT_PREFIX: &str = "go";

/// First path segments reserved for the service itself.
pub const DEFAULT_RESERVED_PATHS: &[&str] = &["api", "admin", "health", "static", "assets"];

/// Where short links live and how their public URL is formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSettings {
    base_url: String,
    prefix: String,
}

impl LinkSettings {
    /// Builds settings from a public origin and a raw prefix.
    ///
    /// The prefix goes through slug normalization. If nothing is left,
    /// [`DEFAULT_PREFIX`] is used instead.
    pub fn new(base_url: impl Into<String>, prefix: &str) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            base_url,
            prefix: resolve_prefix(prefix),
        }
    }

    /// Origin the short URLs are built on, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Canonical active prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Fully-qualified short URL for `prefix` and `slug`.
    pub fn short_url(&self, prefix: &str, slug: &str) -> String {
        format!("{}/{}/{}", self.base_url, prefix, slug)
    }
}

/// Normalizes a raw prefix, falling back to [`DEFAULT_PREFIX`].
pub fn resolve_prefix(raw: &str) -> String {
    let prefix = normalize(raw);
    if prefix.is_empty() {
        DEFAULT_PREFIX.to_string()
    } else {
        prefix
    }
}

/// Paths the redirect resolver must leave alone.
///
/// A path is excluded when its first segment matches one of the reserved
/// names, compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathExclusion {
    reserved: Vec<String>,
}

impl PathExclusion {
    pub fn new<I, S>(reserved: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            reserved: reserved
                .into_iter()
                .map(|s| s.as_ref().trim().trim_matches('/').to_ascii_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    /// Returns true if `path` belongs to the service's own routes.
    pub fn is_excluded(&self, path: &str) -> bool {
        let first = path
            .trim_start_matches('/')
            .split('/')
            .next()
            .unwrap_or_default();

        self.reserved
            .iter()
            .any(|reserved| reserved.eq_ignore_ascii_case(first))
    }

    pub fn reserved(&self) -> &[String] {
        &self.reserved
    }
}

impl Default for PathExclusion {
    fn default() -> Self {
        Self::new(DEFAULT_RESERVED_PATHS)
    }
}
