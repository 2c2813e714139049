//! Client errors
//!
//! Error types for Iron Wallet client operations, with mapping from HTTP
//! statuses and backend error bodies.

use ironwallet_types::ErrorBody;
use reqwest::StatusCode;
use thiserror::Error;

use crate::store::StoreError;

/// Client errors for Iron Wallet operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The backend rejected the credential (HTTP 401). Registered
    /// unauthorized listeners have already been notified.
    #[error("authentication required: {0}")]
    Unauthorized(String),

    /// Business-rule or validation rejection (4xx other than 401/404).
    #[error("request rejected ({status}): {message}")]
    Rejected {
        /// HTTP status
        status: StatusCode,
        /// Backend detail, or the status reason
        message: String,
    },

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Server-side error (5xx).
    #[error("server error ({status}): {message}")]
    Server {
        /// HTTP status
        status: StatusCode,
        /// Backend detail, or the status reason
        message: String,
    },

    /// Connection error - the request never reached the backend.
    #[error("connection error: {message}")]
    Connection {
        /// Error message
        message: String,
        /// Whether the error is transient
        retryable: bool,
    },

    /// Request timeout.
    #[error("request timeout after {0:?}")]
    Timeout(std::time::Duration),

    /// Response body could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Credential store error.
    #[error("credential store error: {0}")]
    Store(#[from] StoreError),
}

impl ClientError {
    /// Map a non-success response to an error.
    ///
    /// `body` is the raw response text; a JSON `detail` is preferred over the
    /// status reason when present.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let message = ErrorBody::parse(body)
            .and_then(|parsed| parsed.message())
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_string()
            });

        match status {
            StatusCode::UNAUTHORIZED => Self::Unauthorized(message),
            StatusCode::NOT_FOUND => Self::NotFound(message),
            s if s.is_server_error() => Self::Server { status, message },
            _ => Self::Rejected { status, message },
        }
    }

    /// Create a connection error.
    pub fn connection(message: impl Into<String>, retryable: bool) -> Self {
        Self::Connection {
            message: message.into(),
            retryable,
        }
    }

    /// Returns true for HTTP 401.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    /// Returns true if this error is transient.
    ///
    /// Informational only: the client never retries on its own.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Connection { retryable, .. } => *retryable,
            Self::Timeout(_) => true,
            Self::Server { status, .. } => *status == StatusCode::SERVICE_UNAVAILABLE,
            _ => false,
        }
    }

    /// HTTP status, if the error came from a response.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Unauthorized(_) => Some(StatusCode::UNAUTHORIZED),
            Self::NotFound(_) => Some(StatusCode::NOT_FOUND),
            Self::Rejected { status, .. } | Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text to show the user.
    ///
    /// Backend rejections are surfaced verbatim; transport and internal
    /// failures collapse to `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected { message, .. }
            | Self::Server { message, .. }
            | Self::NotFound(message)
            | Self::Unauthorized(message) => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            // reqwest does not report the limit; the gateway fills it in
            return Self::Timeout(std::time::Duration::ZERO);
        }
        if err.is_decode() {
            return Self::Decode(err.to_string());
        }
        Self::Connection {
            message: err.to_string(),
            retryable: err.is_connect() || err.is_request(),
        }
    }
}
