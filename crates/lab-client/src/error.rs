//! Client error types.

use thiserror::Error;

/// Errors that can occur when talking to the labs service.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The addressed resource is gone or does not accept the method
    /// (404 / 405). Usually a stale draft id.
    #[error("target not found (HTTP {status})")]
    MissingTarget {
        /// HTTP status code returned by the service.
        status: u16,
    },

    /// The service returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// The service returned any other non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Failed to parse a response body.
    #[error("parse error: {0}")]
    Parse(String),

    /// The configured base URL cannot be used.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl ClientError {
    /// Whether this failure means the target resource no longer exists.
    #[must_use]
    pub const fn is_missing_target(&self) -> bool {
        matches!(self, Self::MissingTarget { .. })
    }

    /// HTTP status attached to the failure, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::MissingTarget { status } | Self::Api { status, .. } => Some(*status),
            Self::RateLimited { .. } => Some(429),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::Parse(_) | Self::InvalidBaseUrl(_) => None,
        }
    }
}
