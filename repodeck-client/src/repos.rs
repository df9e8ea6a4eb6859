//! Repository endpoints

use repodeck_core::domain::repository::{
    CreatedRepository, DeleteOutcome, OwnerScope, UpdatedRepository,
};
use repodeck_core::dto::repository::{
    CreateRepository, RawRepository, RepositoryLinks, UpdateRepository,
};
use reqwest::Method;
use tracing::{info, warn};
use url::Url;

use crate::GithubClient;
use crate::error::{ClientError, Result};
use crate::instructions::{bootstrap_instructions, remote_update_instructions};
use crate::pagination::RepoPages;

/// Put `owner` into the user-info part of a clone URL
///
/// `https://github.com/octo/demo.git` becomes
/// `https://octo@github.com/octo/demo.git`, so git authenticates as that
/// owner when pushing.
pub fn embed_owner(owner: &str, clone_url: &str) -> Result<String> {
    let mut url = Url::parse(clone_url)
        .map_err(|e| ClientError::InvalidResponse(format!("bad clone URL {}: {}", clone_url, e)))?;
    url.set_username(owner).map_err(|_| {
        ClientError::InvalidResponse(format!("clone URL {} cannot carry a user", clone_url))
    })?;
    Ok(url.to_string())
}

impl GithubClient {
    // =============================================================================
    // Repository Management
    // =============================================================================

    /// List repositories of the authenticated user or of an organization
    ///
    /// Pages are fetched lazily while the returned iterator is consumed.
    ///
    /// # Example
    /// ```no_run
    /// # use repodeck_client::GithubClient;
    /// # use repodeck_core::domain::credential::Credential;
    /// # use repodeck_core::domain::repository::OwnerScope;
    /// # fn example() -> repodeck_client::Result<()> {
    /// let client = GithubClient::new(Credential::new("ghp_..."));
    /// let scope = OwnerScope::Organization("rust-lang".to_string());
    /// for repo in client.list(&scope).take(10) {
    ///     println!("{}", repo?.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn list(&self, scope: &OwnerScope) -> RepoPages {
        RepoPages::new(self.clone(), self.url(&scope.repos_path()))
    }

    /// List every repository, stopping at the first failed page
    pub fn list_all(&self, scope: &OwnerScope) -> Result<Vec<RawRepository>> {
        self.list(scope).collect()
    }

    /// Create a repository
    ///
    /// # Arguments
    /// * `scope` - The user or organization that will own the repository
    /// * `name` - Repository name
    /// * `description` - Optional description, sent as `null` when absent
    /// * `private` - Whether the repository is private
    ///
    /// # Returns
    /// The owner-embedded clone URL plus bootstrap instructions
    pub fn create(
        &self,
        scope: &OwnerScope,
        name: &str,
        description: Option<&str>,
        private: bool,
    ) -> Result<CreatedRepository> {
        let url = self.url(&scope.repos_path());
        let req = CreateRepository {
            name: name.to_string(),
            description: description.map(str::to_string),
            private,
        };
        let response = self.send(Method::POST, url, Some(&req))?;
        let created: RepositoryLinks = Self::handle_response(response, 201)?;

        let clone_url = embed_owner(&created.owner.login, &created.clone_url)?;
        info!(repo = %created.name, owner = %created.owner.login, "repository created");

        Ok(CreatedRepository {
            instructions: bootstrap_instructions(&created.name, &created.html_url, &clone_url),
            name: created.name,
            html_url: created.html_url,
            clone_url,
        })
    }

    /// Rename a repository and change its description and visibility
    ///
    /// # Arguments
    /// * `owner` - Current owner login
    /// * `repo` - Current repository name
    /// * `new_description` - Replacement description; `None` keeps the current one
    pub fn update(
        &self,
        owner: &str,
        repo: &str,
        new_name: &str,
        new_description: Option<&str>,
        new_private: bool,
    ) -> Result<UpdatedRepository> {
        let url = self.url(&format!("/repos/{}/{}", owner, repo));
        let req = UpdateRepository {
            name: new_name.to_string(),
            description: new_description.map(str::to_string),
            private: new_private,
        };
        let response = self.send(Method::PATCH, url, Some(&req))?;
        let updated: RepositoryLinks = Self::handle_response(response, 200)?;

        let clone_url = embed_owner(owner, &updated.clone_url)?;
        info!(repo = %updated.name, owner = %owner, "repository updated");

        Ok(UpdatedRepository {
            instructions: remote_update_instructions(&clone_url),
            clone_url,
        })
    }

    /// Delete a repository
    ///
    /// Only transport failures are errors. Any answer other than 204 comes
    /// back as an outcome with `deleted == false` and the status GitHub sent.
    pub fn delete(&self, owner: &str, repo: &str) -> Result<DeleteOutcome> {
        let url = self.url(&format!("/repos/{}/{}", owner, repo));
        let response = self.send::<()>(Method::DELETE, url, None)?;

        let outcome = DeleteOutcome::from_status(response.status);
        if outcome.deleted {
            info!(owner = %owner, repo = %repo, "repository deleted");
        } else {
            warn!(
                owner = %owner,
                repo = %repo,
                status = response.status,
                body = %response.body,
                "repository not deleted"
            );
        }
        Ok(outcome)
    }
}
