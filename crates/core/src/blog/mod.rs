mod error;
mod merge;
mod types;
mod validation;

pub use error::{FieldIssue, IssueKind, ValidationError};
pub use merge::{enrich_post, enrich_posts};
pub use types::{Author, AuthorPost, AuthorPosts, CreatedPost, NewPost, Post, RawPost};
pub use validation::{
    validate_author, validate_author_posts, validate_created_post, validate_new_post, validate_post,
    validate_posts, validate_raw_post, validate_raw_posts,
};
