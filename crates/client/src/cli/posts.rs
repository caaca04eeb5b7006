//! Post CLI commands.

use clap::{Parser, Subcommand};

/// Post commands.
#[derive(Debug, Parser)]
pub struct PostsCommand {
    #[command(subcommand)]
    pub action: PostsAction,
}

/// Available post actions.
#[derive(Debug, Subcommand)]
pub enum PostsAction {
    /// List all posts with their authors.
    List,
    /// Get a post by ID.
    Get {
        /// Post ID.
        id: String,
    },
    /// List the most recent posts.
    Recent {
        /// How many posts to show.
        #[arg(long, default_value = "6")]
        count: String,
    },
    /// Search posts by title.
    Search {
        /// Substring to look for in titles.
        query: String,
    },
    /// Show one page of posts (without authors).
    Page {
        /// 1-based page number.
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Posts per page.
        #[arg(long, default_value_t = 10)]
        page_size: u32,
    },
    /// Count all posts.
    Count,
    /// Submit a new post.
    Create {
        /// Post title.
        #[arg(long)]
        title: String,
        /// Post body.
        #[arg(long)]
        body: String,
    },
}
