//! Author enrichment: joining resolved authors onto raw posts.

use super::error::{FieldIssue, IssueKind, ValidationError};
use super::types::{Author, Post, RawPost};

/// Attaches `author` to `post`, checking that the author is the one the post
/// references through `userId`.
pub fn enrich_post(post: RawPost, author: Author) -> Result<Post, ValidationError> {
    if author.id != post.user_id {
        return Err(ValidationError::new(
            "post",
            vec![FieldIssue::new(
                "author.id",
                IssueKind::AuthorMismatch {
                    user_id: post.user_id,
                    author_id: author.id,
                },
            )],
        ));
    }
    Ok(post.with_author(author))
}

/// Pairs each post with the author resolved at the same index.
///
/// Output order equals the input post order. Every post must receive a
/// matching author; all mismatches are reported together.
pub fn enrich_posts(posts: Vec<RawPost>, authors: Vec<Author>) -> Result<Vec<Post>, ValidationError> {
    let mut issues = Vec::new();
    let mut authors = authors.into_iter();
    let mut merged = Vec::with_capacity(posts.len());

    for (index, post) in posts.into_iter().enumerate() {
        match authors.next() {
            Some(author) if author.id == post.user_id => merged.push(post.with_author(author)),
            Some(author) => issues.push(FieldIssue::new(
                format!("[{index}].author.id"),
                IssueKind::AuthorMismatch {
                    user_id: post.user_id,
                    author_id: author.id,
                },
            )),
            None => issues.push(FieldIssue::new(
                format!("[{index}].author"),
                IssueKind::UnresolvedAuthor {
                    user_id: post.user_id,
                },
            )),
        }
    }

    if issues.is_empty() {
        Ok(merged)
    } else {
        Err(ValidationError::new("post list", issues))
    }
}
