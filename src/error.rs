//! Application error taxonomy and its HTTP mapping.
//!
//! Every fallible operation in the service returns [`AppError`]. Domain errors
//! carry a user-readable message plus structured details; storage errors are
//! logged and rendered as a generic failure.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::utils::db_error::is_unique_violation_on_key;

/// Response body of every failed request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub error_kind: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed URL, missing field, or a slug that normalizes to nothing.
    #[error("{message}")]
    InvalidInput { message: String, details: Value },

    /// The caller is not permitted to perform the operation.
    #[error("{message}")]
    Forbidden { message: String, details: Value },

    /// The caller exhausted its creation quota for the current window.
    #[error("{message}")]
    RateLimited { message: String, details: Value },

    /// A link with the same prefix and slug already exists.
    #[error("{message}")]
    Conflict { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// Unexpected persistence or backend failure.
    #[error("{message}")]
    Storage { message: String, details: Value },
}

impl AppError {
    pub fn invalid_input(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidInput {
            message: message.into(),
            details,
        }
    }

    pub fn forbidden(message: impl Into<String>, details: Value) -> Self {
        Self::Forbidden {
            message: message.into(),
            details,
        }
    }

    pub fn rate_limited(message: impl Into<String>, details: Value) -> Self {
        Self::RateLimited {
            message: message.into(),
            details,
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn storage(message: impl Into<String>, details: Value) -> Self {
        Self::Storage {
            message: message.into(),
            details,
        }
    }

    /// Stable machine-readable name of the error category.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "InvalidInput",
            Self::Forbidden { .. } => "Forbidden",
            Self::RateLimited { .. } => "RateLimited",
            Self::Conflict { .. } => "Conflict",
            Self::NotFound { .. } => "NotFound",
            Self::Storage { .. } => "StorageError",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into its public body.
    ///
    /// Storage errors lose their message and details here; callers are expected
    /// to have logged them already.
    pub fn to_body(&self) -> ErrorBody {
        match self {
            Self::Storage { .. } => ErrorBody {
                error_kind: self.kind(),
                message: "Internal storage error".to_string(),
                details: json!({}),
            },
            Self::InvalidInput { message, details }
            | Self::Forbidden { message, details }
            | Self::RateLimited { message, details }
            | Self::Conflict { message, details }
            | Self::NotFound { message, details } => ErrorBody {
                error_kind: self.kind(),
                message: message.clone(),
                details: details.clone(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Self::Storage { message, details } = &self {
            tracing::error!(%details, "{}", message);
        }

        (self.status_code(), Json(self.to_body())).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if is_unique_violation_on_key(&e) {
            return AppError::conflict(
                "Short link already exists",
                json!({ "constraint": "links_prefix_slug_key" }),
            );
        }

        AppError::storage("Database error", json!({ "reason": e.to_string() }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let fields: serde_json::Map<String, Value> = e
            .field_errors()
            .into_iter()
            .map(|(field, errors)| {
                let messages: Vec<String> = errors
                    .iter()
                    .map(|err| {
                        err.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| err.code.to_string())
                    })
                    .collect();
                (field.to_string(), json!(messages))
            })
            .collect();

        AppError::invalid_input("Validation failed", json!({ "fields": fields }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::invalid_input("x", json!({})).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::forbidden("x", json!({})).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::rate_limited("x", json!({})).status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            AppError::conflict("x", json!({})).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::storage("x", json!({})).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_storage_body_hides_details() {
        let err = AppError::storage(
            "Database error",
            json!({ "reason": "connection refused at 10.0.0.5" }),
        );
        let body = err.to_body();

        assert_eq!(body.error_kind, "StorageError");
        assert_eq!(body.message, "Internal storage error");
        assert_eq!(body.details, json!({}));
    }

    #[test]
    fn test_domain_body_keeps_message() {
        let err = AppError::conflict("Short link already exists", json!({ "slug": "promo" }));
        let body = err.to_body();

        assert_eq!(body.error_kind, "Conflict");
        assert_eq!(body.message, "Short link already exists");
        assert_eq!(body.details["slug"], "promo");
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::rate_limited("Too many links created", json!({}));
        assert_eq!(err.to_string(), "Too many links created");
    }
}
