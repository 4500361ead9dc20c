//! Error types for the car catalog client.
//!
//! # Design
//! `NotFound` and `BadRequest` get dedicated variants because callers act on
//! them: a missing listing is removed from the view, a rejected form shows the
//! server's message next to the offending field. Every other non-2xx response
//! lands in `HttpError` with the raw status and body.

use thiserror::Error;

/// Errors returned by `CarClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404: the car does not exist.
    #[error("car not found")]
    NotFound,

    /// The server returned 400 with the given `{error}` message.
    #[error("request rejected: {0}")]
    BadRequest(String),

    /// The server returned some other unexpected status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}
