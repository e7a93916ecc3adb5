//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response with component status.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

/// Health status for each backing component.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub storage: CheckStatus,
    pub rate_limiter: CheckStatus,
}

/// Individual component health status.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckStatus {
    pub fn from_check(healthy: bool, ok: &str, failed: &str) -> Self {
        let (status, message) = if healthy { ("ok", ok) } else { ("error", failed) };
        Self {
            status: status.to_string(),
            message: Some(message.to_string()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
