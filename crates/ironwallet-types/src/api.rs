//! API request/response envelopes

use serde::{Deserialize, Serialize};

/// Acknowledgement returned by mutating endpoints.
///
/// The backend's exact shape varies per endpoint; only `message` is read,
/// everything else is kept for callers that want it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Confirmation {
    /// Optional human-readable message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Remaining fields
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Error body returned by the backend on non-2xx responses
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Either a message or a list of field errors
    #[serde(default)]
    pub detail: Option<ErrorDetail>,
}

/// The `detail` field of an error body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    /// Plain message
    Message(String),
    /// Structured validation errors
    Items(Vec<DetailItem>),
}

/// One structured validation error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailItem {
    /// Message text
    pub msg: String,
    /// Offending field path
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub loc: Vec<serde_json::Value>,
}

impl ErrorBody {
    /// Parse an error body, returning `None` for bodies that are not JSON
    /// or carry no detail.
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str::<Self>(body)
            .ok()
            .filter(|parsed| parsed.detail.is_some())
    }

    /// User-facing message: the detail string, or the item messages joined
    /// with `", "`.
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            ErrorDetail::Message(msg) => Some(msg.clone()),
            ErrorDetail::Items(items) if items.is_empty() => None,
            ErrorDetail::Items(items) => Some(
                items
                    .iter()
                    .map(|item| item.msg.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
        }
    }
}
