//! Creation quota counters.
//!
//! Provides two [`crate::domain::rate_limit::RateLimiter`] implementations:
//! - [`RedisRateLimiter`] - counters shared by every instance through Redis
//! - [`InMemoryRateLimiter`] - counters local to one process

mod memory_limiter;
mod redis_limiter;

pub use memory_limiter::InMemoryRateLimiter;
pub use redis_limiter::RedisRateLimiter;
