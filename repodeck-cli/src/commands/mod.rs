//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod create;
mod delete;
mod list;
mod update;

pub use create::CreateArgs;

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use tracing::debug;

use crate::config::Config;

/// Subcommands; without one, the positional arguments create a repository
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List repositories of the authenticated user or an organization
    List(list::ListArgs),
    /// Rename a repository or change its description and visibility
    Update(update::UpdateArgs),
    /// Delete a repository
    Delete(delete::DeleteArgs),
}

/// Repository visibility as given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    pub fn is_private(self) -> bool {
        self == Visibility::Private
    }
}

/// Handle a CLI invocation
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The subcommand, if any
/// * `create` - Positional create arguments, used when there is no subcommand
/// * `config` - The CLI configuration
pub fn handle_command(
    command: Option<Commands>,
    create: CreateArgs,
    config: &Config,
) -> Result<()> {
    let client = config.client();
    debug!(api_url = %config.api_url, "client ready");

    match command {
        Some(Commands::List(args)) => list::list_repositories(&client, args),
        Some(Commands::Update(args)) => update::update_repository(&client, args),
        Some(Commands::Delete(args)) => delete::delete_repository(&client, args),
        None => create::create_repository(&client, create),
    }
}
