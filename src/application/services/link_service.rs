//! Link creation and administration service.

use std::sync::Arc;

use serde_json::json;
use tracing::{info, warn};
use validator::Validate;

use crate::domain::entities::{Caller, Link, LinkRequest, NewLink};
use crate::domain::rate_limit::RateLimiter;
use crate::domain::repositories::LinkRepository;
use crate::domain::settings::LinkSettings;
use crate::error::AppError;
use crate::utils::slug::normalize;
use crate::utils::url_validator::validate_long_url;

/// Longest slug that fits the storage column.
pub const MAX_SLUG_LENGTH: usize = 100;

/// A freshly created link together with its public URL.
#[derive(Debug, Clone)]
pub struct CreatedLink {
    pub link: Link,
    pub short_url: String,
}

/// Service for creating and administering short links.
///
/// The only component holding business rules. Creation runs its checks in a
/// fixed order: permission, rate limit, input validation, slug
/// normalization, then the atomic insert.
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
    rate_limiter: Arc<dyn RateLimiter>,
    settings: LinkSettings,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        rate_limiter: Arc<dyn RateLimiter>,
        settings: LinkSettings,
    ) -> Self {
        Self {
            link_repository,
            rate_limiter,
            settings,
        }
    }

    /// Creates a short link under the active prefix.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    ///
    /// 1. [`AppError::Forbidden`] if the caller may not create links
    /// 2. [`AppError::RateLimited`] if the caller's quota is exhausted
    /// 3. [`AppError::InvalidInput`] if a field is missing or the URL is not an
    ///    absolute HTTP(S) URL
    /// 4. [`AppError::InvalidInput`] if the custom URL normalizes to nothing or
    ///    exceeds [`MAX_SLUG_LENGTH`]
    /// 5. [`AppError::Conflict`] if the short path is already taken
    ///
    /// [`AppError::Storage`] may surface from the rate limiter or the store.
    pub async fn create_short_link(
        &self,
        caller: &Caller,
        request: LinkRequest,
    ) -> Result<CreatedLink, AppError> {
        if !caller.can_create {
            warn!(identity = %caller.identity, "Link creation refused: not permitted");
            return Err(AppError::forbidden(
                "You are not allowed to create short links",
                json!({}),
            ));
        }

        if !self
            .rate_limiter
            .check_and_consume(&caller.identity)
            .await?
        {
            warn!(identity = %caller.identity, "Link creation refused: rate limited");
            metrics::counter!("webcut_rate_limited_total").increment(1);
            return Err(AppError::rate_limited(
                "Too many short links created, try again later",
                json!({}),
            ));
        }

        request.validate()?;

        let long_url = validate_long_url(&request.long_url).map_err(|e| {
            AppError::invalid_input("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        let slug = normalize(&request.custom_url);
        if slug.is_empty() {
            return Err(AppError::invalid_input(
                "Custom URL must contain at least one letter or digit",
                json!({ "custom_url": request.custom_url }),
            ));
        }
        if slug.len() > MAX_SLUG_LENGTH {
            return Err(AppError::invalid_input(
                format!("Custom URL must be at most {MAX_SLUG_LENGTH} characters"),
                json!({ "provided_length": slug.len() }),
            ));
        }

        let new_link = NewLink {
            prefix: self.settings.prefix().to_string(),
            slug,
            long_url,
        };

        let link = self.link_repository.create(new_link).await.map_err(|e| {
            if let AppError::Conflict { .. } = e {
                info!(identity = %caller.identity, "Custom URL already exists");
                return AppError::conflict(
                    "Custom URL already exists",
                    json!({ "prefix": self.settings.prefix() }),
                );
            }
            e
        })?;

        metrics::counter!("webcut_links_created_total").increment(1);
        info!(
            id = link.id,
            prefix = %link.prefix,
            slug = %link.slug,
            identity = %caller.identity,
            "Short link created"
        );

        let short_url = self.short_url(&link);
        Ok(CreatedLink { link, short_url })
    }

    /// Lists every stored link, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] unless the caller is an admin.
    pub async fn list_links(&self, caller: &Caller) -> Result<Vec<Link>, AppError> {
        require_admin(caller)?;
        self.link_repository.list_all().await
    }

    /// Deletes a link by id.
    ///
    /// Returns `Ok(false)` if no link has that id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] unless the caller is an admin.
    pub async fn delete_link(&self, caller: &Caller, id: i64) -> Result<bool, AppError> {
        require_admin(caller)?;

        let deleted = self.link_repository.delete(id).await?;
        if deleted {
            info!(id, identity = %caller.identity, "Short link deleted");
        }
        Ok(deleted)
    }

    /// Public URL of a stored link.
    pub fn short_url(&self, link: &Link) -> String {
        self.settings.short_url(&link.prefix, &link.slug)
    }

    pub async fn storage_healthy(&self) -> bool {
        self.link_repository.health_check().await
    }

    pub async fn rate_limiter_healthy(&self) -> bool {
        self.rate_limiter.health_check().await
    }
}

fn require_admin(caller: &Caller) -> Result<(), AppError> {
    if caller.is_admin {
        return Ok(());
    }

    warn!(identity = %caller.identity, "Admin operation refused");
    Err(AppError::forbidden(
        "Administrator access required",
        json!({}),
    ))
}
