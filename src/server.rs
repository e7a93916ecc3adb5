//! HTTP server initialization and runtime setup.
//!
//! Handles storage and rate limiter selection, migrations, and the Axum server
//! lifecycle.

use crate::application::services::AccessPolicy;
use crate::config::Config;
use crate::domain::rate_limit::RateLimiter;
use crate::domain::repositories::LinkRepository;
use crate::infrastructure::persistence::{InMemoryLinkRepository, PgLinkRepository};
use crate::infrastructure::rate_limit::{InMemoryRateLimiter, RedisRateLimiter};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

/// Connection attempts made before giving up on the database.
const DB_CONNECT_ATTEMPTS: usize = 5;

/// Opens the PostgreSQL pool described by `config`, retrying with backoff.
///
/// # Errors
///
/// Returns an error if no database is configured or every attempt fails.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL must be set")?;

    let options = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime));

    let strategy = ExponentialBackoff::from_millis(100)
        .max_delay(Duration::from_secs(5))
        .map(jitter)
        .take(DB_CONNECT_ATTEMPTS - 1);

    let pool = Retry::spawn(strategy, || {
        let options = options.clone();
        async move {
            options.connect(database_url).await.inspect_err(|e| {
                tracing::warn!(error = %e, "Database connection attempt failed");
            })
        }
    })
    .await
    .context("Failed to connect to database")?;

    Ok(pool)
}

/// Selects the link store: PostgreSQL when configured, memory otherwise.
async fn link_repository(config: &Config) -> Result<Arc<dyn LinkRepository>> {
    if !config.is_persistent() {
        tracing::warn!("DATABASE_URL not set, links will be lost on restart");
        return Ok(Arc::new(InMemoryLinkRepository::new()));
    }

    let pool = connect_pool(config).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    Ok(Arc::new(PgLinkRepository::new(Arc::new(pool))))
}

/// Selects the rate limiter: Redis when configured and reachable, memory otherwise.
async fn rate_limiter(config: &Config) -> Arc<dyn RateLimiter> {
    let policy = config.rate_limit_policy();

    if let Some(redis_url) = &config.redis_url {
        match RedisRateLimiter::connect(redis_url, policy).await {
            Ok(limiter) => {
                tracing::info!("Rate limiter enabled (Redis)");
                return Arc::new(limiter);
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to connect to Redis: {}. Using in-memory rate limiter.",
                    e
                );
            }
        }
    } else {
        tracing::info!("Rate limiter enabled (in-memory)");
    }

    Arc::new(InMemoryRateLimiter::new(policy))
}

/// Builds the application state from configuration.
///
/// # Errors
///
/// Returns an error if the database is configured but unusable, or the
/// access policy key cannot be generated.
pub async fn build_state(config: &Config) -> Result<AppState> {
    let links = link_repository(config).await?;
    let limiter = rate_limiter(config).await;

    let access_policy = AccessPolicy::new(config.public_create, config.admin_token.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to initialize access policy: {e}"))?;
    if config.admin_token.is_none() {
        tracing::info!("ADMIN_TOKEN not set, admin endpoints are disabled");
    }

    Ok(AppState::new(
        links,
        limiter,
        config.link_settings(),
        config.path_exclusion(),
        access_policy,
        config.behind_proxy,
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Link store (PostgreSQL with migrations, or in-memory)
/// - Rate limiter (Redis, or in-memory)
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config).await?;

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::warn!(
            "Failed to listen for Ctrl+C: {}. Proceeding with shutdown anyway.",
            e
        ),
    }
}
