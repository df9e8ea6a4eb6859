//! Update command handler

use anyhow::{Context, Result};
use clap::Args;
use repodeck_client::GithubClient;

use super::Visibility;

/// Arguments for updating a repository
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Owner login of the repository
    pub owner: String,

    /// Current repository name
    pub repo: String,

    /// New repository name (defaults to the current one)
    #[arg(short, long)]
    pub name: Option<String>,

    /// New description (keeps the current one when omitted)
    #[arg(short, long)]
    pub description: Option<String>,

    /// New visibility
    #[arg(long, value_enum)]
    pub visibility: Visibility,
}

/// Update a repository and print the remote update command
pub fn update_repository(client: &GithubClient, args: UpdateArgs) -> Result<()> {
    let new_name = args.name.as_deref().unwrap_or(&args.repo);

    let updated = client
        .update(
            &args.owner,
            &args.repo,
            new_name,
            args.description.as_deref(),
            args.visibility.is_private(),
        )
        .with_context(|| format!("Could not update repository '{}/{}'", args.owner, args.repo))?;

    println!("{}", updated.instructions);
    Ok(())
}
