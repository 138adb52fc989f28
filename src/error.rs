//! Error types for the Deezer catalog client.

use thiserror::Error;

/// Main error type for all client operations.
#[derive(Debug, Error)]
pub enum DeezerError {
    /// Object type or relation does not name a known resource kind.
    #[error("{0} is not a valid object type")]
    InvalidObjectType(String),

    /// Identifier rejected before any request was made.
    #[error("Invalid identifier: {0}")]
    InvalidId(i64),

    /// Too many requests - rate limited.
    #[error("Quota exceeded: too many requests")]
    QuotaExceeded,

    /// The API answered with "no data" for the requested object.
    #[error("No data from API: {0}")]
    NoDataApi(String),

    /// HTTP request failed.
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    /// JSON was neither an object nor an array where a record was expected.
    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),

    /// Configured origin cannot be turned into a request URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Configured header value cannot be sent.
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// Error payload returned by the API.
    #[error("API error ({kind}): {message}")]
    ApiError {
        /// Exception type reported by the API, e.g. `DataException`.
        kind: String,
        /// Human-readable message.
        message: String,
        /// Numeric error code, when present.
        code: Option<i64>,
    },
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, DeezerError>;
