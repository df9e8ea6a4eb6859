//! Repository DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Owner object nested in repository responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawOwner {
    pub login: String,
}

/// One entry of a repository listing
///
/// Only the keys repodeck reads; the rest of the payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRepository {
    pub name: String,
    pub private: bool,
    pub size: u64,
    pub owner: RawOwner,
    pub html_url: String,
    pub clone_url: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub pushed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Subset of the repository object returned by create and update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryLinks {
    pub name: String,
    pub html_url: String,
    pub clone_url: String,
    pub owner: RawOwner,
}

/// Request body to create a repository
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRepository {
    pub name: String,
    pub description: Option<String>,
    pub private: bool,
}

/// Request body to update a repository
///
/// A missing description is left out of the PATCH body so GitHub keeps the
/// current one; sending `null` would clear it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRepository {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub private: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_payload_keeps_null_description() {
        let body = serde_json::to_value(CreateRepository {
            name: "demo".to_string(),
            description: None,
            private: true,
        })
        .unwrap();

        assert_eq!(
            body,
            serde_json::json!({ "name": "demo", "description": null, "private": true })
        );
    }

    #[test]
    fn test_update_payload_omits_missing_description() {
        let body = serde_json::to_value(UpdateRepository {
            name: "demo".to_string(),
            description: None,
            private: false,
        })
        .unwrap();

        assert_eq!(body, serde_json::json!({ "name": "demo", "private": false }));
    }

    #[test]
    fn test_raw_repository_missing_optionals() {
        let raw: RawRepository = serde_json::from_value(serde_json::json!({
            "name": "empty",
            "private": false,
            "size": 0,
            "owner": { "login": "octo" },
            "html_url": "https://github.com/octo/empty",
            "clone_url": "https://github.com/octo/empty.git",
            "created_at": "2024-07-28T10:13:36Z"
        }))
        .unwrap();

        assert_eq!(raw.pushed_at, None);
        assert_eq!(raw.description, None);
    }
}
