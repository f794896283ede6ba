//! Error types for the Unsplash API client.
//!
//! # Design
//! Construction errors (`InvalidUrl`, `Config`) are raised before any network
//! attempt. `Decode` carries the JSON path of the offending field. Status
//! failures keep the server's own message. `Transport` is only ever produced
//! by `UnsplashClient::send` when the host's executor fails.

use thiserror::Error;

/// Result type alias for client operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Base location, path or query could not form an absolute URL.
    #[error("invalid request URL `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Client configuration is unusable.
    #[error("configuration error: {0}")]
    Config(String),

    /// A required field was missing, null or of the wrong type.
    #[error("failed to decode `{path}`: {message}")]
    Decode { path: String, message: String },

    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned 401; the credentials were missing or rejected.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Any other non-success status.
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    /// The host's executor failed before a response was available.
    #[error("transport failed: {0}")]
    Transport(String),
}

impl ApiError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn invalid_url(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn decode(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Caller-input errors surfaced before a request leaves the process.
    #[must_use]
    pub fn is_construction_error(&self) -> bool {
        matches!(self, Self::InvalidUrl { .. } | Self::Config(_))
    }

    #[must_use]
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::NotFound | Self::Unauthorized(_) => true,
            Self::HttpError { status, .. } => (400..500).contains(status),
            _ => false,
        }
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::HttpError { status, .. } if *status >= 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification() {
        assert!(ApiError::invalid_url("nope", "relative URL without a base").is_construction_error());
        assert!(ApiError::config("empty access key").is_construction_error());
        assert!(ApiError::decode("user.name", "missing field").is_decode_error());
        assert!(ApiError::NotFound.is_client_error());
        assert!(ApiError::HttpError { status: 403, message: String::new() }.is_client_error());
        assert!(ApiError::HttpError { status: 503, message: String::new() }.is_server_error());
        assert!(!ApiError::Transport("reset".into()).is_client_error());
    }

    #[test]
    fn decode_message_names_the_field() {
        let err = ApiError::decode("user.username", "invalid type: null, expected a string");
        assert_eq!(
            err.to_string(),
            "failed to decode `user.username`: invalid type: null, expected a string"
        );
    }
}
