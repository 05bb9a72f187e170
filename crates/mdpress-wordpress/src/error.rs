//! Error types for the WordPress integration.

/// Error from WordPress API operations.
#[derive(Debug, thiserror::Error)]
pub enum WordPressError {
    /// HTTP request failed (network error, broken connection, etc).
    #[error("HTTP request failed")]
    HttpRequest(#[from] ureq::Error),

    /// HTTP response error (server returned error status).
    #[error("HTTP error: {status} - {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    /// Expected field absent from a success response.
    #[error("response missing field \"{0}\"")]
    MissingField(&'static str),
}
