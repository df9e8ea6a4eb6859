//! Error types for the repodeck client

use thiserror::Error;

use crate::transport::TransportError;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the GitHub API
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network, DNS or TLS failure below HTTP
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Create or update answered with an unexpected status
    #[error("API error (status {status}) for {url}: {body}")]
    Api {
        /// Request URL
        url: String,
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// A listing page answered with something other than 200
    #[error("Listing failed (status {status}) for {url}: {body}")]
    Pagination {
        /// URL of the page that failed
        url: String,
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Response body was not the expected JSON
    #[error("Failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },

    /// Request could not be built
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Response decoded but its content is unusable
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// Create an API error from the request URL, status code and body
    pub fn api_error(url: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            url: url.into(),
            status,
            body: body.into(),
        }
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::Pagination { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self.status(), Some(status) if (400..500).contains(&status))
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(status) if status >= 500)
    }
}
