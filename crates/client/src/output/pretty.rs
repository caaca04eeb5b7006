//! Pretty output formatting.

use tinyblog_core::blog::{Author, AuthorPosts, CreatedPost, Post, RawPost};
use tinyblog_core::format::TextCase;

/// Format an author for display.
pub fn format_author(author: &Author) -> String {
    format!("{}\n  ID: {}\n  Email: {}", author.name, author.id, author.email)
}

/// Format an enriched post for display.
pub fn format_post(post: &Post) -> String {
    let mut output = format!(
        "{}\n  ID: {}\n  Author: {} <{}>",
        TextCase::Title.apply(&post.title),
        post.id,
        post.author.name,
        post.author.email
    );
    if let Some(desc) = &post.description {
        output.push_str(&format!("\n  Description: {}", desc));
    }
    output.push_str(&format!("\n  {}", post.body.replace('\n', "\n  ")));
    output
}

/// Format enriched posts for display.
pub fn format_posts(posts: &[Post]) -> String {
    format_list("POSTS", posts, format_post)
}

/// Format a raw post (no author) for display.
pub fn format_raw_post(post: &RawPost) -> String {
    format!(
        "{}\n  ID: {}\n  User: {}",
        TextCase::Title.apply(&post.title),
        post.id,
        post.user_id
    )
}

/// Format raw posts for display.
pub fn format_raw_posts(posts: &[RawPost]) -> String {
    format_list("POSTS", posts, format_raw_post)
}

/// Format an author and their posts for display.
pub fn format_author_posts(author_posts: &AuthorPosts) -> String {
    let mut output = format!(
        "{}'s posts ({})\n",
        author_posts.author.name,
        author_posts.posts.len()
    );
    output.push_str(&"-".repeat(40));
    for post in &author_posts.posts {
        output.push_str(&format!(
            "\n{}\n  ID: {}\n",
            TextCase::Title.apply(&post.title),
            post.id
        ));
    }
    output
}

/// Format a created post for display.
pub fn format_created_post(post: &CreatedPost) -> String {
    format!("{}\n  ID: {}", post.title, post.id)
}

fn format_list<T>(heading: &str, items: &[T], format_item: fn(&T) -> String) -> String {
    if items.is_empty() {
        return format!("No {} found.", heading.to_lowercase());
    }
    let mut output = format!("{} ({})\n", heading, items.len());
    output.push_str(&"-".repeat(40));
    for item in items {
        output.push_str(&format!("\n{}", format_item(item)));
        output.push('\n');
    }
    output
}
