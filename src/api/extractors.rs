//! Request extractors shared by API handlers.

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;
use axum_auth::AuthBearer;

use crate::domain::entities::Caller;
use crate::state::AppState;
use crate::utils::client_ip::client_identity;

/// Resolves the calling party from the request.
///
/// The client IP becomes the identity and the optional
/// `Authorization: Bearer <token>` header is checked by the access policy.
/// Extraction never rejects: a missing or wrong token yields a caller
/// without admin rights.
impl FromRequestParts<AppState> for Caller {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);
        let identity = client_identity(&parts.headers, peer, state.behind_proxy);

        let token = AuthBearer::from_request_parts(parts, state)
            .await
            .ok()
            .map(|AuthBearer(token)| token);

        Ok(state.access_policy.authorize(identity, token.as_deref()))
    }
}
