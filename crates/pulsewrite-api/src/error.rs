use pulsewrite_core::ValidationError;
use thiserror::Error;

/// Substrings that mark a backend failure as a missing or rejected credential.
const CREDENTIAL_MARKERS: &[&str] = &["api key", "authentication", "unauthorized"];

/// Errors returned by the backend client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("backend returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The campaign form failed validation before any request was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ApiError {
    /// `true` when the backend rejected the request for its credentials:
    /// a 401/403 status, or an error message from the backend mentioning an
    /// API key, authentication or an unauthorized request. Transport,
    /// decoding and validation failures never count.
    #[must_use]
    pub fn is_credential_error(&self) -> bool {
        match self {
            ApiError::Status { status, message } => {
                if *status == 401 || *status == 403 {
                    return true;
                }
                let message = message.to_lowercase();
                CREDENTIAL_MARKERS.iter().any(|m| message.contains(m))
            }
            ApiError::Http(_)
            | ApiError::Deserialize { .. }
            | ApiError::InvalidBaseUrl { .. }
            | ApiError::Validation(_) => false,
        }
    }
}
