//! CLI command definitions.

pub mod authors;
pub mod posts;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the tinyblog upstream posts API.
#[derive(Debug, Parser)]
#[command(name = "tinyblog-client")]
#[command(about = "CLI client for the tinyblog posts API", long_about = None)]
pub struct Cli {
    /// Upstream API base URL.
    #[arg(long, env = "API_URL")]
    pub api_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Post listing, lookup and submission.
    Posts(posts::PostsCommand),
    /// Author lookup.
    Authors(authors::AuthorsCommand),
}
