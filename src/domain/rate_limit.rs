//! Rate limiting contract for link creation.

use async_trait::async_trait;
use std::time::Duration;

use crate::error::AppError;

/// Fixed-window quota applied per caller identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitPolicy {
    /// Admissions allowed per window.
    pub max_requests: u32,
    /// Window length, starting at the first admission.
    pub window: Duration,
}

impl RateLimitPolicy {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
        }
    }
}

impl Default for RateLimitPolicy {
    fn default() -> Self {
        Self {
            max_requests: 5,
            window: Duration::from_secs(5 * 60),
        }
    }
}

/// Per-identity admission counter.
///
/// A window opens on the first admission and lasts [`RateLimitPolicy::window`].
/// Within it, at most [`RateLimitPolicy::max_requests`] calls are admitted;
/// later calls are refused without being counted. Once the window has
/// elapsed the next call opens a fresh one.
///
/// # Implementations
///
/// - [`crate::infrastructure::rate_limit::InMemoryRateLimiter`] - process-local counters
/// - [`crate::infrastructure::rate_limit::RedisRateLimiter`] - shared counters in Redis
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RateLimiter: Send + Sync {
    /// Admits or refuses one call for `identity`.
    ///
    /// The check and the increment happen as one atomic step per identity,
    /// so concurrent calls can never be over-admitted.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the call is admitted
    /// - `Ok(false)` if the quota is exhausted
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the backing store is unreachable.
    async fn check_and_consume(&self, identity: &str) -> Result<bool, AppError>;

    /// Reports whether the backing store is reachable.
    async fn health_check(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = RateLimitPolicy::default();
        assert_eq!(policy.max_requests, 5);
        assert_eq!(policy.window, Duration::from_secs(300));
    }
}
