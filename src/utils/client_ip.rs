//! Caller identity extraction from HTTP requests.

use axum::http::HeaderMap;
use std::net::{IpAddr, SocketAddr};

/// Identity used when nothing better is known about the caller.
pub const UNKNOWN_CLIENT: &str = "unknown";

const X_FORWARDED_FOR: &str = "x-forwarded-for";
const X_REAL_IP: &str = "x-real-ip";

/// Determines the client IP address.
///
/// When `behind_proxy` is set, the first address in `X-Forwarded-For` wins,
/// then `X-Real-IP`. Otherwise, or when the headers carry nothing parseable,
/// the socket peer address is used.
pub fn client_ip(
    headers: &HeaderMap,
    peer: Option<SocketAddr>,
    behind_proxy: bool,
) -> Option<IpAddr> {
    if behind_proxy {
        let forwarded = headers
            .get(X_FORWARDED_FOR)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .and_then(|v| v.trim().parse::<IpAddr>().ok());

        if let Some(ip) = forwarded {
            return Some(ip);
        }

        let real_ip = headers
            .get(X_REAL_IP)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<IpAddr>().ok());

        if let Some(ip) = real_ip {
            return Some(ip);
        }
    }

    peer.map(|addr| addr.ip())
}

/// Rate-limit identity for a request: the client IP as text.
pub fn client_identity(
    headers: &HeaderMap,
    peer: Option<SocketAddr>,
    behind_proxy: bool,
) -> String {
    client_ip(headers, peer, behind_proxy)
        .map(|ip| ip.to_string())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}
