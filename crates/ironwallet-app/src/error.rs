//! Error types for the app layer.

use ironwallet_client::{ClientError, StoreError};
use ironwallet_types::ValidationError;

/// App-level errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Input rejected before any request was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Backend call failed.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Credentials could not be persisted.
    #[error("failed to store session: {0}")]
    Store(#[from] StoreError),

    /// Plan ID not present in the catalog.
    #[error("unknown investment plan: {0}")]
    UnknownPlan(String),
}

impl AppError {
    /// Text to show the user for this error.
    ///
    /// Validation messages and backend details are shown verbatim; anything
    /// else becomes `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::Client(e) => e.user_message(fallback),
            Self::Store(_) | Self::UnknownPlan(_) => fallback.to_string(),
        }
    }

    /// Check if the error came from an HTTP 401.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Client(e) if e.is_unauthorized())
    }
}
