//! Repodeck HTTP Client
//!
//! A blocking client for the repository endpoints of the GitHub REST API:
//! listing (with `Link` header pagination), creating, updating and deleting
//! repositories.
//!
//! # Example
//!
//! ```no_run
//! use repodeck_client::GithubClient;
//! use repodeck_core::domain::credential::Credential;
//! use repodeck_core::domain::repository::OwnerScope;
//!
//! fn main() -> repodeck_client::Result<()> {
//!     let client = GithubClient::new(Credential::new("ghp_..."));
//!
//!     for repo in client.list(&OwnerScope::AuthenticatedUser) {
//!         println!("{}", repo?.name);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod instructions;
pub mod pagination;
mod repos;
pub mod testing;
pub mod transport;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use pagination::{RepoPages, next_page_url};
pub use repos::embed_owner;
pub use transport::{ApiRequest, ApiResponse, ReqwestTransport, Transport, TransportError};

use std::fmt;
use std::sync::Arc;

use repodeck_core::domain::credential::Credential;
use reqwest::Method;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Public GitHub API endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// REST API version the client is written against
pub const API_VERSION: &str = "2022-11-28";

const CLIENT_USER_AGENT: &str = concat!("repodeck/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the GitHub repository endpoints
///
/// Holds nothing mutable besides the transport, so a client can be cloned
/// and shared across threads freely.
#[derive(Clone)]
pub struct GithubClient {
    /// Base URL of the API (e.g., "https://api.github.com")
    base_url: String,
    credential: Credential,
    transport: Arc<dyn Transport>,
}

impl GithubClient {
    /// Create a client for the public GitHub API
    pub fn new(credential: Credential) -> Self {
        Self::with_base_url(DEFAULT_API_URL, credential)
    }

    /// Create a client for another API endpoint (e.g., GitHub Enterprise)
    pub fn with_base_url(base_url: impl Into<String>, credential: Credential) -> Self {
        Self::with_transport(base_url, credential, Arc::new(ReqwestTransport::new()))
    }

    /// Create a client with a custom transport
    ///
    /// # Example
    /// ```
    /// use std::sync::Arc;
    /// use repodeck_client::GithubClient;
    /// use repodeck_client::testing::MockTransport;
    /// use repodeck_core::domain::credential::Credential;
    ///
    /// let transport = Arc::new(MockTransport::new());
    /// let client = GithubClient::with_transport(
    ///     "https://api.github.com",
    ///     Credential::new("token"),
    ///     transport,
    /// );
    /// ```
    pub fn with_transport(
        base_url: impl Into<String>,
        credential: Credential,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            credential,
            transport,
        }
    }

    /// Get the base URL of the API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // =============================================================================
    // Request Plumbing
    // =============================================================================

    fn build_request<B: Serialize>(
        &self,
        method: Method,
        url: String,
        body: Option<&B>,
    ) -> Result<ApiRequest> {
        let mut authorization = HeaderValue::from_str(&self.credential.bearer())
            .map_err(|_| ClientError::InvalidRequest("token is not a valid header value".into()))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("x-github-api-version", HeaderValue::from_static(API_VERSION));
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));

        let body = body
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| ClientError::InvalidRequest(format!("Failed to encode body: {}", e)))?;

        Ok(ApiRequest {
            method,
            url,
            headers,
            body,
        })
    }

    /// Send one request; any status is returned as-is
    fn send<B: Serialize>(
        &self,
        method: Method,
        url: String,
        body: Option<&B>,
    ) -> Result<ApiResponse> {
        let request = self.build_request(method, url, body)?;
        debug!(method = %request.method, url = %request.url, "sending request");

        let response = self.transport.send(request)?;
        debug!(url = %response.url, status = response.status, "received response");

        Ok(response)
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Check the status code and deserialize the JSON body
    fn handle_response<T: DeserializeOwned>(response: ApiResponse, expected: u16) -> Result<T> {
        if response.status != expected {
            return Err(ClientError::api_error(
                response.url,
                response.status,
                response.body,
            ));
        }

        decode(&response)
    }
}

impl fmt::Debug for GithubClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GithubClient")
            .field("base_url", &self.base_url)
            .field("credential", &self.credential)
            .finish_non_exhaustive()
    }
}

/// Decode a JSON body, attributing failures to the response URL
pub(crate) fn decode<T: DeserializeOwned>(response: &ApiResponse) -> Result<T> {
    response.json().map_err(|e| ClientError::Decode {
        url: response.url.clone(),
        message: e.to_string(),
    })
}
