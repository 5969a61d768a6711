//! Error types for the API client.

/// Errors that can occur when calling the job-board API.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The backend rejected the request, or no response was received.
    ///
    /// `message` is the normalized human-readable failure string; `status`
    /// is the HTTP status when a response arrived, `None` for transport
    /// failures (connection refused, DNS, etc.).
    #[error("{message}")]
    Api {
        status: Option<u16>,
        message: String,
    },
    /// A request URL could not be constructed from the base URL and path.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
    /// An endpoint that requires authentication was called without a token.
    #[error("This endpoint requires authentication; call with_token first")]
    MissingToken,
    /// JSON serialization of a request payload failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// HTTP status of the failed response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => *status,
            _ => None,
        }
    }
}
