//! Ward API client error types.

/// Errors from ward backend calls.
#[derive(Debug, thiserror::Error)]
pub enum WardApiError {
    /// HTTP transport error.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The backend returned a non-2xx status.
    #[error("ward API {endpoint} returned {status}: {body}")]
    ApiError {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// Response deserialization failed.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: reqwest::Error,
    },
    /// An update matched no row.
    #[error("{endpoint} matched no row")]
    NotFound { endpoint: String },
    /// A write succeeded but the backend returned no row representation.
    #[error("{endpoint} returned no row representation")]
    MissingRepresentation { endpoint: String },
    /// The request URL could not be built from the configured base URL.
    #[error("invalid request URL for {endpoint}: {reason}")]
    InvalidUrl { endpoint: String, reason: String },
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] super::config::ConfigError),
}
