use thiserror::Error;

/// Errors from [`crate::provider::ConditionsProvider::conditions`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConditionsError {
    /// The location was blank.
    #[error("a location is required")]
    EmptyLocation,
    /// Geocoding found no match for the location.
    #[error("no match found for location '{location}'")]
    LocationNotFound {
        /// The location that was searched for.
        location: String,
    },
    /// None of the configured upstream services produced data.
    #[error("no conditions data available for '{location}'")]
    NoData {
        /// The location that was requested.
        location: String,
    },
    /// The request did not complete before the timeout.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Requested URL with secrets removed.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The service answered with a non-success status.
    #[error("request to {url} failed with HTTP {status}: {message}")]
    Http {
        /// Requested URL with secrets removed.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error detail.
        message: String,
    },
    /// The request could not be sent or the connection failed.
    #[error("network error contacting {url}: {message}")]
    Network {
        /// Requested URL with secrets removed.
        url: String,
        /// Error detail.
        message: String,
    },
    /// The response body could not be decoded.
    #[error("failed to parse response: {message}")]
    Parse {
        /// Error detail.
        message: String,
    },
}
