//! Error types for the listings client.

use thiserror::Error;

/// Result type for listings client operations.
pub type Result<T> = std::result::Result<T, ListingsError>;

/// Listings client errors.
#[derive(Debug, Error)]
pub enum ListingsError {
    /// The request never produced a response (connection refused, DNS, reset)
    #[error("Network error: {0}")]
    Network(String),

    /// The listing store answered with a non-2xx status
    #[error("API error ({status}): {message}")]
    Status { status: u16, message: String },

    /// The response body was not the expected JSON
    #[error("Decode error: {0}")]
    Decode(String),
}

impl ListingsError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ListingsError::Status { status: 404, .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ListingsError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ListingsError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ListingsError::Decode(err.to_string())
        } else {
            ListingsError::Network(err.to_string())
        }
    }
}
