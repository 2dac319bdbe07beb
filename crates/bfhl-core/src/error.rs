//! Core error types for bfhl-core.
//!
//! Uses `thiserror` for structured, matchable error variants covering every
//! failure a compute request can end in. The `Display` text of each variant
//! is the client-facing message; diagnostic detail lives in fields so the
//! server can log it without echoing it back.

use thiserror::Error;

/// Errors produced while validating or evaluating a compute request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Malformed, missing, or out-of-range payload, or a request that does
    /// not carry exactly one functional key.
    #[error("{message}")]
    InvalidInput { message: String },

    /// The AI key was used but no provider is configured and the question
    /// has no known answer.
    #[error("AI provider key not configured")]
    ProviderNotConfigured,

    /// The provider could not be reached (connect failure, timeout, broken body).
    #[error("AI provider unreachable")]
    ProviderUnreachable { reason: String },

    /// The provider answered with a non-success status.
    #[error("AI provider error")]
    ProviderError { status: u16 },

    /// The provider body did not have the expected shape.
    #[error("AI response parsing failed")]
    ResponseParseFailed { reason: String },

    /// The provider text held no word and the question has no known answer.
    #[error("AI yielded empty answer")]
    EmptyAnswer,
}

impl CoreError {
    /// Shorthand for an [`CoreError::InvalidInput`] with the given message.
    pub fn invalid(message: impl Into<String>) -> Self {
        CoreError::InvalidInput {
            message: message.into(),
        }
    }

    /// True for failures that came from a live provider call.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            CoreError::ProviderUnreachable { .. }
                | CoreError::ProviderError { .. }
                | CoreError::ResponseParseFailed { .. }
                | CoreError::EmptyAnswer
        )
    }
}
