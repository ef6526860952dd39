//! LLM error types

use std::time::Duration;
use thiserror::Error;

/// Errors from the AI bridge
#[derive(Debug, Error)]
pub enum LlmError {
    /// Client misconfiguration caught before any network call
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited { retry_after: Duration },

    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LlmError {
    /// Check if this failure happened before a request was sent
    pub fn is_configuration(&self) -> bool {
        matches!(self, LlmError::Configuration(_))
    }

    /// Check if this is a rate limit error
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, LlmError::RateLimited { .. })
    }

    /// Classify whether a caller-driven retry could help
    ///
    /// The bridge itself never retries; this is advisory for the caller.
    pub fn is_retryable(&self) -> bool {
        match self {
            LlmError::Configuration(_) => false,
            LlmError::RateLimited { .. } => true,
            LlmError::ApiError { status, .. } => *status >= 500,
            LlmError::Network(_) => true,
            LlmError::InvalidResponse(_) => false,
            LlmError::Json(_) => false,
        }
    }

    /// Get the wait the server asked for, if rate limited
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            LlmError::RateLimited { retry_after } => Some(*retry_after),
            _ => None,
        }
    }
}
