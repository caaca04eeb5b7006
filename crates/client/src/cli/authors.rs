//! Author CLI commands.

use clap::{Parser, Subcommand};

/// Author commands.
#[derive(Debug, Parser)]
pub struct AuthorsCommand {
    #[command(subcommand)]
    pub action: AuthorsAction,
}

/// Available author actions.
#[derive(Debug, Subcommand)]
pub enum AuthorsAction {
    /// Get an author by user ID.
    Get {
        /// User ID.
        id: u64,
    },
    /// List an author's posts.
    Posts {
        /// User ID.
        id: u64,
    },
}
