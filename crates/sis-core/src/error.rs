//! Client Error Taxonomy
//!
//! - Transport: the request never got an HTTP answer
//! - Server: the API answered with a non-success status
//! - Decode: the answer did not have the expected shape
//! - Validation / Forbidden: resolved locally, no request was sent

use serde::Deserialize;
use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Transport(String),

    #[error("server responded with status {status}")]
    Server { status: u16, message: Option<String> },

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Forbidden(String),
}

impl ClientError {
    /// Build a server error from a status and the raw response body
    pub fn server(status: u16, body: &str) -> Self {
        ClientError::Server {
            status,
            message: ServerErrorBody::parse(body).and_then(|b| b.text()),
        }
    }

    /// Text shown inline next to the failing form or list.
    ///
    /// `context` is the generic fallback, e.g. "Failed to create student".
    /// Server-provided text wins when present.
    pub fn user_message(&self, context: &str) -> String {
        match self {
            ClientError::Validation(msg) | ClientError::Forbidden(msg) => msg.clone(),
            ClientError::Server { message: Some(msg), .. } => format!("{}: {}", context, msg),
            other => format!("{}: {}", context, other),
        }
    }
}

/// Error body shape used by the API: `{"error": "...", "details": "..."}`
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ServerErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

impl ServerErrorBody {
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    /// The `error` field, or `details` when that is all there is
    pub fn text(&self) -> Option<String> {
        self.error
            .as_deref()
            .or(self.details.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }
}

/// Failures of the persisted session store
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,

    #[error("storage write failed: {0}")]
    Write(String),
}
