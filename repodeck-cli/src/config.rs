//! Configuration module
//!
//! Holds the API endpoint and credential gathered from flags and environment.

use anyhow::{Result, bail};
use repodeck_client::GithubClient;
use repodeck_core::domain::credential::Credential;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the GitHub API
    pub api_url: String,
    /// Bearer token from `--token` or `GITHUB_TOKEN`
    pub credential: Credential,
}

impl Config {
    pub fn new(api_url: String, token: Option<String>) -> Result<Self> {
        let credential = match token {
            Some(token) => Credential::new(token),
            None => bail!("GITHUB_TOKEN is not set; export it or pass --token"),
        };
        if credential.is_empty() {
            bail!("GITHUB_TOKEN is empty");
        }

        Ok(Self {
            api_url,
            credential,
        })
    }

    /// Build an API client for this configuration
    pub fn client(&self) -> GithubClient {
        GithubClient::with_base_url(&self.api_url, self.credential.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_is_rejected() {
        let err = Config::new("https://api.github.com".to_string(), None).unwrap_err();
        assert!(err.to_string().contains("GITHUB_TOKEN"));
    }

    #[test]
    fn test_blank_token_is_rejected() {
        assert!(Config::new("https://api.github.com".to_string(), Some("  ".to_string())).is_err());
    }

    #[test]
    fn test_client_uses_api_url() {
        let config = Config::new(
            "https://ghe.example.com/api/v3/".to_string(),
            Some("t0ken".to_string()),
        )
        .unwrap();
        assert_eq!(config.client().base_url(), "https://ghe.example.com/api/v3");
    }
}
