//! tinyblog-client CLI entry point.

use anyhow::Result;
use clap::Parser;
use tinyblog_client::cli::{Cli, Commands, OutputFormat};
use tinyblog_client::output::{format_json, pretty};
use tinyblog_client::{BlogClient, ClientConfig};
use tinyblog_core::blog::NewPost;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tinyblog_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // A missing or malformed API_URL ends the process here.
    let client = BlogClient::new(ClientConfig::new(&cli.api_url)?)?;

    match cli.command {
        Commands::Posts(posts_cmd) => {
            use tinyblog_client::cli::posts::PostsAction;
            match posts_cmd.action {
                PostsAction::List => {
                    let posts = client.fetch_all_posts().await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_json(&posts)),
                        OutputFormat::Pretty => println!("{}", pretty::format_posts(&posts)),
                    }
                }
                PostsAction::Get { id } => {
                    let post = client.fetch_post_by_id(Some(&id)).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_json(&post)),
                        OutputFormat::Pretty => println!("{}", pretty::format_post(&post)),
                    }
                }
                PostsAction::Recent { count } => {
                    let posts = client.fetch_recent_posts(Some(&count)).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_json(&posts)),
                        OutputFormat::Pretty => println!("{}", pretty::format_posts(&posts)),
                    }
                }
                PostsAction::Search { query } => {
                    let posts = client.fetch_posts_by_search(&query).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_json(&posts)),
                        OutputFormat::Pretty => println!("{}", pretty::format_posts(&posts)),
                    }
                }
                PostsAction::Page { page, page_size } => {
                    let posts = client.fetch_posts_paginated(page, page_size).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_json(&posts)),
                        OutputFormat::Pretty => {
                            println!("Page {page} ({page_size} per page)");
                            println!("{}", pretty::format_raw_posts(&posts))
                        }
                    }
                }
                PostsAction::Count => {
                    let count = client.count_posts().await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_json(&count)),
                        OutputFormat::Pretty => println!("{count} posts"),
                    }
                }
                PostsAction::Create { title, body } => {
                    let created = client.create_post(&NewPost::new(title, body)).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_json(&created)),
                        OutputFormat::Pretty => {
                            println!("Created:\n{}", pretty::format_created_post(&created))
                        }
                    }
                }
            }
        }
        Commands::Authors(authors_cmd) => {
            use tinyblog_client::cli::authors::AuthorsAction;
            match authors_cmd.action {
                AuthorsAction::Get { id } => {
                    let author = client.resolve_author(id).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_json(&author)),
                        OutputFormat::Pretty => println!("{}", pretty::format_author(&author)),
                    }
                }
                AuthorsAction::Posts { id } => {
                    let author_posts = client
                        .fetch_posts_by_author(Some(&id.to_string()))
                        .await?;
                    match cli.format {
                        OutputFormat::Json => {
                            println!("{}", format_json(&author_posts))
                        }
                        OutputFormat::Pretty => {
                            println!("{}", pretty::format_author_posts(&author_posts))
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
