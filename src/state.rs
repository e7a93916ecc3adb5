//! Shared application state injected into handlers and middleware.

use std::sync::Arc;

use crate::application::services::{AccessPolicy, LinkService, RedirectResolver};
use crate::domain::rate_limit::RateLimiter;
use crate::domain::repositories::LinkRepository;
use crate::domain::settings::{LinkSettings, PathExclusion};

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub redirect_resolver: Arc<RedirectResolver>,
    pub access_policy: Arc<AccessPolicy>,
    /// Read client identity from forwarding headers instead of the peer address.
    pub behind_proxy: bool,
}

impl AppState {
    /// Wires the services around one link store and one rate limiter.
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        rate_limiter: Arc<dyn RateLimiter>,
        settings: LinkSettings,
        exclusion: PathExclusion,
        access_policy: AccessPolicy,
        behind_proxy: bool,
    ) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(
                link_repository.clone(),
                rate_limiter,
                settings,
            )),
            redirect_resolver: Arc::new(RedirectResolver::new(link_repository, exclusion)),
            access_policy: Arc::new(access_policy),
            behind_proxy,
        }
    }
}
