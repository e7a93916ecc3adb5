//! Redis-backed fixed-window rate limiter.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, Script, aio::ConnectionManager};
use serde_json::json;
use tracing::{debug, error, info};

use crate::domain::rate_limit::{RateLimitPolicy, RateLimiter};
use crate::error::AppError;

/// Refuses without counting once the ceiling is reached; otherwise counts
/// and, on the first admission, starts the window by setting the key's TTL.
///
/// KEYS[1] = counter key, ARGV[1] = ceiling, ARGV[2] = window in milliseconds.
const CHECK_AND_CONSUME: &str = r#"
local current = tonumber(redis.call('GET', KEYS[1]) or '0')
if current >= tonumber(ARGV[1]) then
    return 0
end
current = redis.call('INCR', KEYS[1])
if current == 1 then
    redis.call('PEXPIRE', KEYS[1], ARGV[2])
end
return 1
"#;

/// Rate limiter sharing its counters through Redis.
///
/// Each identity maps to one counter key whose TTL is the window. The whole
/// check-and-increment runs as a single Lua script, which Redis executes
/// atomically, so concurrent requests from several service instances are
/// counted correctly. Expiry is handled by Redis itself.
pub struct RedisRateLimiter {
    client: ConnectionManager,
    script: Script,
    policy: RateLimitPolicy,
    key_prefix: String,
}

impl RedisRateLimiter {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the URL is invalid, the connection
    /// cannot be established, or the PING health check fails.
    pub async fn connect(redis_url: &str, policy: RateLimitPolicy) -> Result<Self, AppError> {
        info!("Connecting to Redis rate limiter");

        let client = Client::open(redis_url).map_err(|e| {
            AppError::storage(
                "Failed to create Redis client",
                json!({ "reason": e.to_string() }),
            )
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            AppError::storage(
                "Failed to connect to Redis",
                json!({ "reason": e.to_string() }),
            )
        })?;

        let mut test_conn = manager.clone();
        test_conn.ping::<()>().await.map_err(|e| {
            AppError::storage("Redis PING failed", json!({ "reason": e.to_string() }))
        })?;

        info!("Connected to Redis rate limiter");

        Ok(Self {
            client: manager,
            script: Script::new(CHECK_AND_CONSUME),
            policy,
            key_prefix: "webcut:ratelimit:".to_string(),
        })
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, identity: &str) -> String {
        format!("{}{}", self.key_prefix, identity)
    }

    fn window_millis(&self) -> u64 {
        u64::try_from(self.policy.window.as_millis())
            .unwrap_or(u64::MAX)
            .max(1)
    }
}

#[async_trait]
impl RateLimiter for RedisRateLimiter {
    async fn check_and_consume(&self, identity: &str) -> Result<bool, AppError> {
        let key = self.build_key(identity);
        let mut conn = self.client.clone();

        let admitted: i64 = self
            .script
            .key(&key)
            .arg(self.policy.max_requests)
            .arg(self.window_millis())
            .invoke_async(&mut conn)
            .await
            .map_err(|e| {
                error!("Redis rate limit script failed for {}: {}", key, e);
                AppError::storage(
                    "Rate limiter unavailable",
                    json!({ "reason": e.to_string() }),
                )
            })?;

        debug!(identity, admitted, "Rate limit check");

        Ok(admitted == 1)
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
