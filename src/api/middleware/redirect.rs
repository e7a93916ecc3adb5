//! Short-link redirect middleware.

use axum::{
    extract::{Request, State},
    http::{HeaderValue, Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::application::services::Resolution;
use crate::state::AppState;

/// Answers `GET`/`HEAD /{prefix}/{slug}` with a redirect when the short link
/// exists and hands every other request to the router.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/health", get(health_handler))
///     .layer(middleware::from_fn_with_state(state.clone(), redirect::layer));
/// ```
pub async fn layer(State(state): State<AppState>, req: Request, next: Next) -> Response {
    if req.method() != Method::GET && req.method() != Method::HEAD {
        return next.run(req).await;
    }

    let Resolution::Redirect { location, status } =
        state.redirect_resolver.resolve(req.uri().path()).await
    else {
        return next.run(req).await;
    };

    let (Ok(location_value), Ok(status)) = (
        HeaderValue::from_str(&location),
        StatusCode::from_u16(status),
    ) else {
        warn!(location = %location, "Stored destination is not a valid Location header");
        return next.run(req).await;
    };

    (status, [(header::LOCATION, location_value)]).into_response()
}
