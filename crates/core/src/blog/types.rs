use serde::{Deserialize, Serialize};

/// The author of one or more posts, as served by `GET /users/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: u64,
    pub name: String,
    /// Always a syntactically valid address once validated.
    pub email: String,
}

/// A post exactly as the upstream API returns it, before enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPost {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub body: String,
}

impl RawPost {
    /// Attaches `author` to this post without checking that the ids agree.
    ///
    /// Use [`enrich_post`](super::enrich_post) when the pairing comes from the network.
    pub fn with_author(self, author: Author) -> Post {
        Post {
            id: self.id,
            user_id: self.user_id,
            author,
            title: self.title,
            description: self.description,
            body: self.body,
        }
    }
}

/// A post enriched with its resolved author.
///
/// Invariant: `author.id == user_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub user_id: u64,
    pub author: Author,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub body: String,
}

/// Minimal post listed under an author (`GET /users/{id}/posts`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorPost {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub body: String,
}

/// An author together with all of their posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorPosts {
    pub author: Author,
    pub posts: Vec<AuthorPost>,
}

/// Payload for submitting a new post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub body: String,
}

impl NewPost {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// The upstream echo of a freshly created post.
///
/// JSONPlaceholder-style APIs return the submitted fields plus an assigned
/// `id`; `userId` is only present when the request carried one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedPost {
    pub id: u64,
    pub title: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
}
