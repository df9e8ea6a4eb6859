//! Repodeck CLI
//!
//! Command-line interface for managing GitHub repositories.
//!
//! `repodeck <NAME> [DESCRIPTION]` creates a repository and prints the
//! commands that publish the current directory to it. Subcommands list,
//! update and delete repositories.

mod commands;
mod config;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use commands::{Commands, CreateArgs, handle_command};
use config::Config;
use repodeck_client::DEFAULT_API_URL;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "repodeck")]
#[command(about = "Create, list, update and delete GitHub repositories", long_about = None)]
#[command(subcommand_negates_reqs = true)]
#[command(
    override_usage = "repodeck [OPTIONS] <NAME> [DESCRIPTION]\n       repodeck [OPTIONS] <COMMAND>"
)]
struct Cli {
    /// GitHub token used as bearer credential
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true, global = true)]
    token: Option<String>,

    /// GitHub API URL
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL, global = true)]
    api_url: String,

    #[command(flatten)]
    create: CreateArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    /// Parse arguments, rejecting a repository name combined with a subcommand
    fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = Self::try_parse_from(args)?;
        if let (Some(name), Some(_)) = (&cli.create.name, &cli.command) {
            return Err(Self::command().error(
                ErrorKind::ArgumentConflict,
                format!("repository name '{}' cannot be combined with a subcommand", name),
            ));
        }
        Ok(cli)
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "repodeck=warn,repodeck_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::try_parse_args(std::env::args_os()).unwrap_or_else(|e| e.exit());
    let config = Config::new(cli.api_url, cli.token)?;

    handle_command(cli.command, cli.create, &config)
}
