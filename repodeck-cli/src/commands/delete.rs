//! Delete command handler

use anyhow::{Result, bail};
use clap::Args;
use colored::*;
use repodeck_client::GithubClient;

/// Arguments for deleting a repository
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Owner login of the repository
    pub owner: String,

    /// Repository name
    pub repo: String,
}

/// Delete a repository; exits non-zero when GitHub did not delete it
pub fn delete_repository(client: &GithubClient, args: DeleteArgs) -> Result<()> {
    let outcome = client.delete(&args.owner, &args.repo)?;

    if !outcome.deleted {
        bail!(
            "GitHub repository '{}/{}' was not deleted (status {})",
            args.owner,
            args.repo,
            outcome.status
        );
    }

    println!(
        "{}",
        format!("✓ GitHub repository '{}/{}' deleted.", args.owner, args.repo)
            .green()
            .bold()
    );
    Ok(())
}
