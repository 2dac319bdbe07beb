//! Uniform response envelope.
//!
//! Every response body, success or failure, is a [`ResponseEnvelope`]:
//! `is_success` and `official_email` are always present, then either
//! `data` or `error`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::error::ApiError;

/// Error object carried in a failure envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    /// Numeric HTTP status code.
    pub code: u16,
    /// Human-readable error message.
    pub message: String,
    /// Request path that produced the error.
    pub path: String,
    /// Structured validation details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Standard response envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseEnvelope<T: Serialize> {
    pub is_success: bool,
    pub official_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

impl ResponseEnvelope<()> {
    /// Success envelope without data, used by the health check.
    pub fn bare(official_email: &str) -> Self {
        ResponseEnvelope {
            is_success: true,
            official_email: official_email.to_string(),
            data: None,
            error: None,
        }
    }

    /// Failure envelope for `err` raised while serving `path`.
    pub fn failure(official_email: &str, err: &ApiError, path: &str) -> Self {
        ResponseEnvelope {
            is_success: false,
            official_email: official_email.to_string(),
            data: None,
            error: Some(ErrorBody {
                code: err.status().as_u16(),
                message: err.to_string(),
                path: path.to_string(),
                details: err.details().cloned(),
            }),
        }
    }
}

impl<T: Serialize> ResponseEnvelope<T> {
    pub fn success(official_email: &str, data: T) -> Self {
        ResponseEnvelope {
            is_success: true,
            official_email: official_email.to_string(),
            data: Some(data),
            error: None,
        }
    }
}

/// Builds a full HTTP response (status + envelope) from a handler result.
pub fn respond<T: Serialize>(
    official_email: &str,
    path: &str,
    result: Result<T, ApiError>,
) -> Response {
    match result {
        Ok(data) => (StatusCode::OK, Json(ResponseEnvelope::success(official_email, data)))
            .into_response(),
        Err(err) => error_response(official_email, &err, path),
    }
}

/// Builds the HTTP response for a failure.
pub fn error_response(official_email: &str, err: &ApiError, path: &str) -> Response {
    if let ApiError::Internal(cause) = err {
        tracing::error!(path, "internal error: {}", cause);
    }
    (
        err.status(),
        Json(ResponseEnvelope::failure(official_email, err, path)),
    )
        .into_response()
}
