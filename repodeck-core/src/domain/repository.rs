//! Repository domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dto::repository::RawRepository;

/// Whose repositories a listing or creation targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnerScope {
    /// The account the credential belongs to
    AuthenticatedUser,
    /// A named organization
    Organization(String),
}

impl OwnerScope {
    /// Build a scope from an optional organization name
    pub fn from_org(org: Option<String>) -> Self {
        match org {
            Some(org) => Self::Organization(org),
            None => Self::AuthenticatedUser,
        }
    }

    /// API path used both to list and to create repositories in this scope
    pub fn repos_path(&self) -> String {
        match self {
            Self::AuthenticatedUser => "/user/repos".to_string(),
            Self::Organization(org) => format!("/orgs/{}/repos", org),
        }
    }
}

/// A repository as shown to users
///
/// Built from one listing entry and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub name: String,
    pub is_private: bool,
    pub size_kb: u64,
    pub owner_login: String,
    pub html_url: String,
    pub clone_url: String,
    pub created_at: DateTime<Utc>,
    pub pushed_at: Option<DateTime<Utc>>,
    pub description: Option<String>,
}

impl From<RawRepository> for RepositoryRecord {
    fn from(raw: RawRepository) -> Self {
        Self {
            name: raw.name,
            is_private: raw.private,
            size_kb: raw.size,
            owner_login: raw.owner.login,
            html_url: raw.html_url,
            clone_url: raw.clone_url,
            created_at: raw.created_at,
            pushed_at: raw.pushed_at,
            description: raw.description,
        }
    }
}

/// Outcome of creating a repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedRepository {
    pub name: String,
    pub html_url: String,
    /// Clone URL carrying the owner login as user-info
    pub clone_url: String,
    /// Shell commands that turn the current directory into a clone of the new repository
    pub instructions: String,
}

/// Outcome of updating a repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatedRepository {
    /// Clone URL carrying the owner login as user-info
    pub clone_url: String,
    /// Reminder to repoint existing local remotes
    pub instructions: String,
}

/// Outcome of a delete request
///
/// GitHub answers 204 when the repository is gone; any other status means
/// nothing was deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub deleted: bool,
    pub status: u16,
}

impl DeleteOutcome {
    pub fn from_status(status: u16) -> Self {
        Self {
            deleted: status == 204,
            status,
        }
    }
}
