//! Redis rate limiter tests.
//!
//! Run with `REDIS_URL` pointing at a disposable server:
//! `cargo test --test rate_limit_redis -- --ignored`

use std::sync::Arc;
use std::time::Duration;
use webcut::domain::rate_limit::{RateLimitPolicy, RateLimiter};
use webcut::infrastructure::rate_limit::RedisRateLimiter;

fn redis_url() -> String {
    std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string())
}

/// Identity unique to one test run, so parallel tests never share a counter.
fn identity(name: &str) -> String {
    format!("test-{}-{}", name, rand::random::<u64>())
}

fn counter_key(identity: &str) -> String {
    format!("webcut:ratelimit:{identity}")
}

async fn limiter(max: u32, window: Duration) -> RedisRateLimiter {
    RedisRateLimiter::connect(&redis_url(), RateLimitPolicy::new(max, window))
        .await
        .unwrap()
}

async fn pttl(identity: &str) -> i64 {
    let client = redis::Client::open(redis_url()).unwrap();
    let mut conn = client.get_multiplexed_async_connection().await.unwrap();
    redis::cmd("PTTL")
        .arg(counter_key(identity))
        .query_async::<i64>(&mut conn)
        .await
        .unwrap()
}

#[tokio::test]
#[ignore = "requires Redis"]
async fn test_admits_up_to_ceiling() {
    let limiter = limiter(5, Duration::from_secs(300)).await;
    let id = identity("ceiling");

    for _ in 0..5 {
        assert!(limiter.check_and_consume(&id).await.unwrap());
    }
    assert!(!limiter.check_and_consume(&id).await.unwrap());
    assert!(!limiter.check_and_consume(&id).await.unwrap());
}

#[tokio::test]
#[ignore = "requires Redis"]
async fn test_window_set_on_first_admission() {
    let limiter = limiter(3, Duration::from_secs(60)).await;
    let id = identity("ttl");

    assert_eq!(pttl(&id).await, -2);

    assert!(limiter.check_and_consume(&id).await.unwrap());
    let ttl = pttl(&id).await;
    assert!(ttl > 0 && ttl <= 60_000, "unexpected ttl {ttl}");
}

#[tokio::test]
#[ignore = "requires Redis"]
async fn test_refusals_do_not_extend_window() {
    let limiter = limiter(1, Duration::from_secs(2)).await;
    let id = identity("refusals");

    assert!(limiter.check_and_consume(&id).await.unwrap());
    tokio::time::sleep(Duration::from_millis(500)).await;

    for _ in 0..5 {
        assert!(!limiter.check_and_consume(&id).await.unwrap());
    }

    let ttl = pttl(&id).await;
    assert!(ttl > 0 && ttl <= 1_600, "window was extended, ttl {ttl}");
}

#[tokio::test]
#[ignore = "requires Redis"]
async fn test_window_resets_after_expiry() {
    let limiter = limiter(2, Duration::from_millis(300)).await;
    let id = identity("expiry");

    assert!(limiter.check_and_consume(&id).await.unwrap());
    assert!(limiter.check_and_consume(&id).await.unwrap());
    assert!(!limiter.check_and_consume(&id).await.unwrap());

    tokio::time::sleep(Duration::from_millis(400)).await;

    assert!(limiter.check_and_consume(&id).await.unwrap());
    assert!(limiter.check_and_consume(&id).await.unwrap());
    assert!(!limiter.check_and_consume(&id).await.unwrap());
}

#[tokio::test]
#[ignore = "requires Redis"]
async fn test_identities_are_independent() {
    let limiter = limiter(1, Duration::from_secs(60)).await;
    let a = identity("a");
    let b = identity("b");

    assert!(limiter.check_and_consume(&a).await.unwrap());
    assert!(!limiter.check_and_consume(&a).await.unwrap());
    assert!(limiter.check_and_consume(&b).await.unwrap());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[ignore = "requires Redis"]
async fn test_concurrent_calls_never_over_admit() {
    let limiter = Arc::new(limiter(5, Duration::from_secs(300)).await);
    let id = Arc::new(identity("shared"));

    let handles: Vec<_> = (0..64)
        .map(|_| {
            let limiter = limiter.clone();
            let id = id.clone();
            tokio::spawn(async move { limiter.check_and_consume(&id).await.unwrap() })
        })
        .collect();

    let mut admitted = 0;
    for handle in handles {
        if handle.await.unwrap() {
            admitted += 1;
        }
    }

    assert_eq!(admitted, 5);
}

#[tokio::test]
#[ignore = "requires Redis"]
async fn test_health_check() {
    let limiter = limiter(1, Duration::from_secs(60)).await;
    assert!(limiter.health_check().await);
}
