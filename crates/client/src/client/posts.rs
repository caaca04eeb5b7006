//! Post API operations.

use futures_util::future::try_join_all;
use tinyblog_core::blog::{
    enrich_post, enrich_posts, validate_author_posts, validate_created_post, validate_new_post,
    validate_post, validate_posts, validate_raw_post, validate_raw_posts, AuthorPosts, CreatedPost,
    NewPost, Post, RawPost,
};
use tinyblog_core::params::{parse_count, parse_required};

use super::BlogClient;
use crate::error::{ClientError, Result};

impl BlogClient {
    /// Fetch every post, each enriched with its author.
    ///
    /// Author lookups run concurrently; the first failure fails the whole
    /// call. Output order equals the upstream list order.
    pub async fn fetch_all_posts(&self) -> Result<Vec<Post>> {
        let posts = self.fetch_raw_posts(&[]).await?;
        self.enrich(posts).await
    }

    /// Fetch a single post by ID, enriched with its author.
    ///
    /// `id` is the raw route parameter; a missing or non-numeric value fails
    /// with [`ClientError::InvalidArgument`] before any request is sent.
    pub async fn fetch_post_by_id(&self, id: Option<&str>) -> Result<Post> {
        let id: u64 = parse_required("id", id, "post id")?;

        let value = self.get_json(&format!("/posts/{id}"), &[]).await?;
        let post = validate_raw_post(&value)?;
        let author = self.resolve_author(post.user_id).await?;
        let merged = enrich_post(post, author)?;

        Ok(validate_post(&serde_json::to_value(&merged)?)?)
    }

    /// Fetch an author together with their posts.
    ///
    /// The single resolved author stands for every listed post; posts are not
    /// enriched individually.
    pub async fn fetch_posts_by_author(&self, author_id: Option<&str>) -> Result<AuthorPosts> {
        let author_id: u64 = parse_required("id", author_id, "author id")?;

        let author = self.resolve_author(author_id).await?;
        let value = self
            .get_json(&format!("/users/{author_id}/posts"), &[])
            .await?;
        let posts = validate_author_posts(&value)?;

        Ok(AuthorPosts { author, posts })
    }

    /// Fetch the first `count` enriched posts in upstream list order.
    ///
    /// The upstream list is taken to be most-recent-first; no sorting happens
    /// here. A `count` larger than the number of posts returns all of them.
    pub async fn fetch_recent_posts(&self, count: Option<&str>) -> Result<Vec<Post>> {
        let count = parse_count("count", count)?;

        let mut posts = self.fetch_all_posts().await?;
        posts.truncate(count);
        Ok(posts)
    }

    /// Fetch enriched posts whose title contains `query`.
    ///
    /// Matching is delegated to the upstream `title_like` filter.
    pub async fn fetch_posts_by_search(&self, query: &str) -> Result<Vec<Post>> {
        let posts = self
            .fetch_raw_posts(&[("title_like", query.to_string())])
            .await?;
        self.enrich(posts).await
    }

    /// Fetch one page of raw posts. Pages are 1-based upstream.
    pub async fn fetch_posts_paginated(&self, page: u32, page_size: u32) -> Result<Vec<RawPost>> {
        if page == 0 || page_size == 0 {
            return Err(ClientError::InvalidArgument(
                "page and page size must be at least 1".to_string(),
            ));
        }
        self.fetch_raw_posts(&[("_page", page.to_string()), ("_limit", page_size.to_string())])
            .await
    }

    /// Number of posts the upstream currently lists.
    pub async fn count_posts(&self) -> Result<usize> {
        Ok(self.fetch_raw_posts(&[]).await?.len())
    }

    /// IDs of every upstream post, in list order.
    pub async fn post_ids(&self) -> Result<Vec<u64>> {
        Ok(self
            .fetch_raw_posts(&[])
            .await?
            .into_iter()
            .map(|post| post.id)
            .collect())
    }

    /// Submit a new post.
    ///
    /// Empty titles or bodies are rejected before any request is sent.
    pub async fn create_post(&self, post: &NewPost) -> Result<CreatedPost> {
        validate_new_post(post).map_err(|e| ClientError::InvalidArgument(e.to_string()))?;

        let value = self.post_json("/posts", post).await?;
        let created = validate_created_post(&value)?;
        tracing::info!(id = created.id, "created post");
        Ok(created)
    }

    async fn fetch_raw_posts(&self, query: &[(&str, String)]) -> Result<Vec<RawPost>> {
        let value = self.get_json("/posts", query).await?;
        Ok(validate_raw_posts(&value)?)
    }

    /// Resolve every post's author concurrently, merge, and validate the result.
    async fn enrich(&self, posts: Vec<RawPost>) -> Result<Vec<Post>> {
        let authors =
            try_join_all(posts.iter().map(|post| self.resolve_author(post.user_id))).await?;
        let merged = enrich_posts(posts, authors)?;

        Ok(validate_posts(&serde_json::to_value(&merged)?)?)
    }
}
