//! Error types for the employee API client.
//!
//! # Design
//! `NotFound` gets its own variant because callers distinguish "the employee
//! is gone" from other failures, though both are shown to the user the same
//! way. Every backend failure keeps the optional `{"error": ...}` message so
//! notifications can quote it.

use serde::Deserialize;

/// Shown when neither the backend nor the error itself has anything to say.
pub const FALLBACK_MESSAGE: &str = "Something went wrong";

/// Errors returned by `RecordClient` parse methods and by transports.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server returned 404: the targeted employee does not exist.
    #[error("request failed with status code 404")]
    NotFound { message: Option<String> },

    /// The server returned a non-2xx status other than 404.
    #[error("request failed with status code {status}")]
    Backend {
        status: u16,
        message: Option<String>,
        body: String,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The host could not complete the round-trip.
    #[error("{0}")]
    Transport(String),
}

impl ApiError {
    /// The human-readable message the backend attached, if any.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::NotFound { message } | ApiError::Backend { message, .. } => {
                message.as_deref()
            }
            _ => None,
        }
    }

    /// Most specific message available: backend message, then the error's
    /// own text, then [`FALLBACK_MESSAGE`].
    pub fn user_message(&self) -> String {
        if let Some(message) = self.backend_message() {
            return message.to_string();
        }
        let text = self.to_string();
        if text.trim().is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            text
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Extract `error` from a `{"error": "..."}` body. Anything else yields `None`.
pub(crate) fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|parsed| parsed.error)
        .filter(|message| !message.trim().is_empty())
}
