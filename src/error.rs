// src/error.rs
use serde::Deserialize;
use thiserror::Error;

/// Error body returned by the PowerDNS API on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
    /// Additional per-field messages, when the server provides them.
    #[serde(default)]
    pub errors: Vec<String>,
}

/// Everything a client call can fail with.
///
/// The variants are deliberately coarse so callers can branch on kind:
/// the request never produced a response (`Transport`), the server
/// answered and said no (`Api`), or the server answered 2xx with a body
/// this crate could not make sense of (`Decode`). The client never
/// retries; that policy belongs to the caller.
#[derive(Debug, Error)]
pub enum Error {
    /// DNS resolution, connect, TLS, or timeout failure before a response
    /// status was available.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server responded with a non-success status.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The response body did not match the expected JSON shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl Error {
    /// HTTP status of an `Api` error, if that is what this is.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
