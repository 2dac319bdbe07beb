//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all endpoints. It knows its
//! status code and its client-facing message; the envelope builder in
//! [`crate::schema::envelope`] turns it into the JSON error object.

use axum::http::StatusCode;
use bfhl_core::CoreError;

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A core failure (validation or AI resolver).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The body could not be decoded into a compute request (400).
    #[error("Request validation failed")]
    ValidationFailed(serde_json::Value),

    /// No route for the path (404).
    #[error("Not Found")]
    NotFound,

    /// Route exists, method does not (405).
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// Anything unanticipated (500). The cause is logged, never returned.
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Core(CoreError::InvalidInput { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Core(CoreError::ProviderNotConfigured) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Core(err) if err.is_upstream() => StatusCode::BAD_GATEWAY,
            ApiError::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Structured validation details, when there are any.
    pub fn details(&self) -> Option<&serde_json::Value> {
        match self {
            ApiError::ValidationFailed(details) => Some(details),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_map_to_status_codes() {
        let cases = [
            (CoreError::invalid("x"), StatusCode::BAD_REQUEST),
            (CoreError::ProviderNotConfigured, StatusCode::INTERNAL_SERVER_ERROR),
            (
                CoreError::ProviderUnreachable {
                    reason: "timeout".into(),
                },
                StatusCode::BAD_GATEWAY,
            ),
            (CoreError::ProviderError { status: 500 }, StatusCode::BAD_GATEWAY),
            (
                CoreError::ResponseParseFailed {
                    reason: "eof".into(),
                },
                StatusCode::BAD_GATEWAY,
            ),
            (CoreError::EmptyAnswer, StatusCode::BAD_GATEWAY),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err.clone()).status(), status, "{:?}", err);
        }
    }

    #[test]
    fn messages_hide_diagnostic_detail() {
        let err = ApiError::from(CoreError::ProviderUnreachable {
            reason: "dns error for generativelanguage".into(),
        });
        assert_eq!(err.to_string(), "AI provider unreachable");
        assert_eq!(
            ApiError::Internal("stack overflow".into()).to_string(),
            "Internal server error"
        );
    }
}
