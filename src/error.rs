//! Error types for the admin event client

use thiserror::Error;

/// Result type for fallible internal client steps
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the admin event service
///
/// Public operation methods never return these directly; they are folded into
/// [`ApiResponse::Failure`](crate::ApiResponse) at the client boundary.
#[derive(Error, Debug)]
pub enum Error {
    /// Missing required configuration
    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    Env(String),

    /// Non-2xx response from the service
    #[error("HTTP {status}: {status_text}")]
    Api { status: u16, status_text: String },

    /// Transport error (connection refused, DNS, timeout, bad URL)
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Bearer token cannot be sent as a header value
    #[error("Invalid authorization header: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message() {
        let err = Error::Api {
            status: 401,
            status_text: "Unauthorized".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 401: Unauthorized");
    }

    #[test]
    fn test_json_error_is_transparent() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let text = parse_err.to_string();
        let err = Error::from(parse_err);
        assert_eq!(err.to_string(), text);
    }
}
