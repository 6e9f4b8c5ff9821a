//! Error types for the todo API client.
//!
//! # Design
//! The client treats every failure the same way in the UI, so no variant
//! carries meaning beyond diagnostics: all non-2xx statuses land in `Status`
//! with the raw code, transport-level failures (unreachable backend, broken
//! connection) land in `Transport`, and JSON problems keep the serde message
//! for the log line. `TodoState` collapses all of these into one fixed
//! per-operation message before the user sees anything.

use std::fmt;

/// Errors produced while building requests, executing them, or parsing
/// responses.
#[derive(Debug)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    Status(u16),

    /// The request never produced a response (connection refused, DNS
    /// failure, broken stream).
    Transport(String),

    /// A success response body could not be deserialized into the expected
    /// type.
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Status(status) => write!(f, "HTTP {status}"),
            ApiError::Transport(msg) => write!(f, "transport error: {msg}"),
            ApiError::Deserialization(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::Serialization(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
