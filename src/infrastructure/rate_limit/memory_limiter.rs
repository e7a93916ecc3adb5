//! Process-local fixed-window rate limiter.

use async_trait::async_trait;
use dashmap::DashMap;
use tokio::time::Instant;

use crate::domain::rate_limit::{RateLimitPolicy, RateLimiter};
use crate::error::AppError;

#[derive(Debug, Clone, Copy)]
struct Window {
    count: u32,
    expires_at: Instant,
}

/// Fixed-window counters kept in a [`DashMap`].
///
/// The entry guard for an identity is held across the expiry check, the
/// ceiling check and the increment, which makes the whole step atomic per
/// identity. Expired windows are replaced lazily on the next call.
#[derive(Debug)]
pub struct InMemoryRateLimiter {
    policy: RateLimitPolicy,
    windows: DashMap<String, Window>,
}

impl InMemoryRateLimiter {
    pub fn new(policy: RateLimitPolicy) -> Self {
        Self {
            policy,
            windows: DashMap::new(),
        }
    }

    fn consume(&self, identity: &str) -> bool {
        let now = Instant::now();

        let mut window = self
            .windows
            .entry(identity.to_owned())
            .or_insert(Window {
                count: 0,
                expires_at: now,
            });

        if window.expires_at <= now {
            *window = Window {
                count: 1,
                expires_at: now + self.policy.window,
            };
            return true;
        }

        if window.count >= self.policy.max_requests {
            return false;
        }

        window.count += 1;
        true
    }
}

#[async_trait]
impl RateLimiter for InMemoryRateLimiter {
    async fn check_and_consume(&self, identity: &str) -> Result<bool, AppError> {
        Ok(self.consume(identity))
    }

    async fn health_check(&self) -> bool {
        true
    }
}
