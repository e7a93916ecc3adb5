//! Handlers for link endpoints (create, list, delete).

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use serde_json::json;
use tracing::debug;

use crate::api::dto::link::{CreateLinkRequest, CreateLinkResponse, LinkResponse};
use crate::domain::entities::{Caller, LinkRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link under the active prefix.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// {
///   "longUrl": "https://example.com/page",
///   "customUrl": "My Slug!"
/// }
/// ```
///
/// # Response
///
/// `201 Created` with `{ "shortUrl": "https://s.example.com/go/my-slug" }`.
///
/// # Errors
///
/// - 403 if the caller may not create links
/// - 429 if the caller's quota is exhausted
/// - 400 if a field is missing, the URL is invalid or the custom URL
///   normalizes to nothing
/// - 409 if the short path already exists
/// - 500 if storage or the rate limiter fails
///
/// An unreadable body is treated as one with both fields missing, so the
/// permission and quota checks still come first.
pub async fn create_link_handler(
    State(state): State<AppState>,
    caller: Caller,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateLinkResponse>), AppError> {
    let request = match payload {
        Ok(Json(payload)) => LinkRequest::from(payload),
        Err(rejection) => {
            debug!(reason = %rejection.body_text(), "Unreadable link creation body");
            LinkRequest::new("", "")
        }
    };

    let created = state
        .link_service
        .create_short_link(&caller, request)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateLinkResponse {
            short_url: created.short_url,
        }),
    ))
}

/// Lists every stored link, newest first.
///
/// # Endpoint
///
/// `GET /api/links` (admin token required)
pub async fn list_links_handler(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list_links(&caller).await?;

    let items = links
        .into_iter()
        .map(|link| {
            let short_url = state.link_service.short_url(&link);
            LinkResponse::new(link, short_url)
        })
        .collect();

    Ok(Json(items))
}

/// Deletes a link by id. The short path becomes available again.
///
/// # Endpoint
///
/// `DELETE /api/links/{id}` (admin token required)
///
/// # Errors
///
/// Returns 404 Not Found if no link has this id.
pub async fn delete_link_handler(
    State(state): State<AppState>,
    caller: Caller,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id.map_err(|rejection| {
        AppError::invalid_input(
            "Link id must be an integer",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    if !state.link_service.delete_link(&caller, id).await? {
        return Err(AppError::not_found("Link not found", json!({ "id": id })));
    }

    Ok(StatusCode::NO_CONTENT)
}
