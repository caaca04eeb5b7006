//! Page-data handlers.
//!
//! Build-time pages go through [`with_page_data`]: upstream failures degrade to
//! a `null` prop with `revalidate: 0` and a 200. Request-time pages go through
//! [`with_request_page_data`] and answer failures with an error status.

use std::num::NonZeroU32;

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use tinyblog_core::{
    blog::{AuthorPosts, Post, RawPost},
    params::{parse_required, ParamError},
};
use tinyblog_pages::{
    with_page_data, with_request_page_data, with_static_paths, PageContext, PathParams,
    ServerSideProps, StaticPaths, StaticProps,
};

use crate::{handlers::AppError, state::AppState};

/// Number of posts on the recent-posts page.
const RECENT_POSTS: &str = "6";

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_PAGE_SIZE: u32 = 10;

/// `Cache-Control` value for a build-time page.
pub fn cache_control(revalidate: Option<u32>) -> String {
    match revalidate {
        Some(0) => "no-store".to_string(),
        Some(secs) => format!("public, s-maxage={secs}, stale-while-revalidate"),
        None => "public, immutable".to_string(),
    }
}

fn static_page<T: Serialize>(props: StaticProps<T>) -> Response {
    (
        [(header::CACHE_CONTROL, cache_control(props.revalidate))],
        Json(props),
    )
        .into_response()
}

// ============================================================================
// Build-time pages
// ============================================================================

/// GET /api/pages/index
pub async fn index_page(State(state): State<AppState>) -> Response {
    let client = state.client.clone();
    let loader = with_page_data(
        move |_id: Option<String>| {
            let client = client.clone();
            async move { client.fetch_all_posts().await }
        },
        "posts",
        state.revalidate,
    );

    static_page::<Vec<Post>>(loader.load(&PageContext::new()).await)
}

/// GET /api/pages/posts/recent
pub async fn recent_posts_page(State(state): State<AppState>) -> Response {
    let client = state.client.clone();
    let loader = with_page_data(
        move |_id: Option<String>| {
            let client = client.clone();
            async move { client.fetch_recent_posts(Some(RECENT_POSTS)).await }
        },
        "recentPosts",
        state.revalidate,
    );

    static_page::<Vec<Post>>(loader.load(&PageContext::new()).await)
}

/// GET /api/pages/posts/{id}
pub async fn post_page(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let client = state.client.clone();
    let loader = with_page_data(
        move |id: Option<String>| {
            let client = client.clone();
            async move { client.fetch_post_by_id(id.as_deref()).await }
        },
        "post",
        state.revalidate,
    );

    static_page::<Post>(loader.load(&PageContext::with_id(id)).await)
}

// ============================================================================
// Request-time pages
// ============================================================================

/// GET /api/pages/author/{id}
pub async fn author_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ServerSideProps<AuthorPosts>>, AppError> {
    let client = state.client.clone();
    let loader = with_request_page_data(
        move |id: Option<String>| {
            let client = client.clone();
            async move { client.fetch_posts_by_author(id.as_deref()).await }
        },
        "authorPosts",
    );

    Ok(Json(loader.load(&PageContext::with_id(id)).await?))
}

/// Query parameters for the paginated posts page.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationQuery {
    pub page: Option<String>,
    pub page_size: Option<String>,
}

impl PaginationQuery {
    /// Page and page size, falling back to defaults for absent values.
    fn resolve(&self) -> Result<(u32, u32), ParamError> {
        let page = number_or("page", self.page.as_deref(), DEFAULT_PAGE)?;
        let page_size = number_or("pageSize", self.page_size.as_deref(), DEFAULT_PAGE_SIZE)?;
        Ok((page, page_size))
    }
}

fn number_or(name: &'static str, value: Option<&str>, default: u32) -> Result<u32, ParamError> {
    match value {
        None => Ok(default),
        Some(v) => parse_required::<NonZeroU32>(name, Some(v), "positive integer").map(NonZeroU32::get),
    }
}

/// GET /api/pages/posts/paginated?page=&pageSize=
pub async fn paginated_posts_page(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> Result<Json<ServerSideProps<Vec<RawPost>>>, AppError> {
    let (page, page_size) = query.resolve()?;

    let client = state.client.clone();
    let loader = with_request_page_data(
        move |_id: Option<String>| {
            let client = client.clone();
            async move { client.fetch_posts_paginated(page, page_size).await }
        },
        "posts",
    );

    Ok(Json(loader.load(&PageContext::new()).await?))
}

/// Query parameters for the search page.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// GET /api/pages/posts/search?q=
pub async fn search_posts_page(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ServerSideProps<Vec<Post>>>, AppError> {
    let client = state.client.clone();
    let loader = with_request_page_data(
        move |_id: Option<String>| {
            let client = client.clone();
            let q = query.q.clone();
            async move { client.fetch_posts_by_search(&q).await }
        },
        "posts",
    );

    Ok(Json(loader.load(&PageContext::new()).await?))
}

// ============================================================================
// Static paths
// ============================================================================

/// GET /api/paths/posts
pub async fn post_paths(State(state): State<AppState>) -> Result<Json<StaticPaths>, AppError> {
    let client = state.client.clone();
    let loader = with_static_paths(
        move || {
            let client = client.clone();
            async move {
                let ids = client.post_ids().await?;
                Ok::<_, tinyblog_client::ClientError>(
                    ids.into_iter()
                        .map(|id| PathParams::new("id", id.to_string()))
                        .collect::<Vec<_>>(),
                )
            }
        },
        false,
    );

    Ok(Json(loader.load().await?))
}
