//! Create command handler

use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use repodeck_client::GithubClient;
use repodeck_core::domain::repository::OwnerScope;

/// Arguments for creating a repository
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Name of the repository to create
    #[arg(required = true)]
    pub name: Option<String>,

    /// Repository description
    pub description: Option<String>,

    /// Create the repository in this organization instead of your account
    #[arg(long)]
    pub org: Option<String>,

    /// Make the repository public (repositories are private by default)
    #[arg(long)]
    pub public: bool,
}

/// Create a repository and print the bootstrap commands
pub fn create_repository(client: &GithubClient, args: CreateArgs) -> Result<()> {
    let name = args.name.context("Repository name required")?;
    let scope = OwnerScope::from_org(args.org);

    let created = client
        .create(&scope, &name, args.description.as_deref(), !args.public)
        .with_context(|| format!("Could not create GitHub repository '{}'", name))?;

    println!("{}", created.instructions.green());
    Ok(())
}
