//! Error types for the words API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers usually want to tell
//! "that category is gone" apart from "the server returned something odd."
//! All other non-2xx responses land in `HttpError` with the raw status code
//! and body. Transport failures keep the underlying `reqwest::Error`, except
//! timeouts, which are surfaced as their own variant.

use thiserror::Error;

/// Errors returned by `WordsApi` parse methods and `ApiClient` calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request did not complete within the configured timeout.
    #[error("request timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },

    /// Connection refused, reset, DNS failure and the like.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

impl ApiError {
    /// Classify a `reqwest` failure, given the timeout the client runs with.
    pub(crate) fn from_reqwest(err: reqwest::Error, timeout_ms: u64) -> Self {
        if err.is_timeout() {
            ApiError::Timeout { timeout_ms }
        } else {
            ApiError::Transport(err)
        }
    }

    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound => Some(404),
            ApiError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }
}
