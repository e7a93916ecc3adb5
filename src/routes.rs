//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{prefix}/{slug}` - Short link redirect (middleware, public)
//! - `GET  /health`          - Health check: storage, rate limiter (public)
//! - `/api/*`                - REST API
//!
//! # Middleware
//!
//! - **Redirect** - Resolves short paths before any routing
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{redirect, tracing};
use crate::error::AppError;
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Application routes with redirect and tracing middleware applied.
///
/// Requests the redirect middleware passes through and no route matches end
/// in a JSON `404`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .fallback(not_found_handler)
        .layer(middleware::from_fn_with_state(state.clone(), redirect::layer))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the served application, with trailing slashes trimmed before
/// routing.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

async fn not_found_handler() -> AppError {
    AppError::not_found("Not found", serde_json::json!({}))
}
