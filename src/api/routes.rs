//! API route configuration.
//!
//! Permissions are decided per request by the [`crate::domain::entities::Caller`]
//! extractor, so no authentication layer sits in front of these routes.

use crate::api::handlers::{create_link_handler, delete_link_handler, list_links_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get},
};

/// All API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST   /links`       - Create a short link
/// - `GET    /links`       - List all links (admin)
/// - `DELETE /links/{id}`  - Delete a link (admin)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route("/links/{id}", delete(delete_link_handler))
}
