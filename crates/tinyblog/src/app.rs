use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::health,
        pages::{
            author_page, index_page, paginated_posts_page, post_page, post_paths,
            recent_posts_page, search_posts_page,
        },
        posts::create_post,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    // Static segments win over `{id}` in axum's router
    let page_routes = Router::new()
        .route("/index", get(index_page))
        .route("/posts/recent", get(recent_posts_page))
        .route("/posts/paginated", get(paginated_posts_page))
        .route("/posts/search", get(search_posts_page))
        .route("/posts/{id}", get(post_page))
        .route("/author/{id}", get(author_page));

    let api_routes = Router::new()
        .nest("/pages", page_routes)
        .route("/paths/posts", get(post_paths))
        .route("/posts", post(create_post))
        .layer(cors);

    Router::new()
        .route("/health", get(health))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, response::Response};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tinyblog_client::client::stub::{RunningStub, StubApi};
    use tower::ServiceExt;

    fn seeded() -> StubApi {
        StubApi::new()
            .post(json!({ "id": 1, "userId": 1, "title": "first post", "body": "hello" }))
            .post(json!({ "id": 2, "userId": 2, "title": "second post", "body": "world" }))
            .user(json!({ "id": 1, "name": "Leanne Graham", "email": "leanne@example.com" }))
            .user(json!({ "id": 2, "name": "Ervin Howell", "email": "ervin@example.com" }))
    }

    fn app_for(stub: &RunningStub) -> Router {
        create_app(AppState::new(stub.client(), Some(60)))
    }

    async fn get_uri(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    fn cache_header(response: &Response) -> &str {
        response
            .headers()
            .get(header::CACHE_CONTROL)
            .unwrap()
            .to_str()
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let stub = StubApi::new().start().await;
        let response = get_uri(app_for(&stub), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_index_page_serves_enriched_posts() {
        let stub = seeded().start().await;
        let response = get_uri(app_for(&stub), "/api/pages/index").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            cache_header(&response),
            "public, s-maxage=60, stale-while-revalidate"
        );

        let json = json_body(response).await;
        assert_eq!(json["revalidate"], 60);
        let posts = json["props"]["posts"]["data"].as_array().unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0]["author"]["name"], "Leanne Graham");
        assert_eq!(posts[1]["author"]["email"], "ervin@example.com");
        assert!(json["props"]["posts"]["revalidateAt"].is_string());
    }

    #[tokio::test]
    async fn test_index_page_degrades_on_upstream_failure() {
        let stub = seeded().posts_status(StatusCode::INTERNAL_SERVER_ERROR).start().await;
        let response = get_uri(app_for(&stub), "/api/pages/index").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(cache_header(&response), "no-store");
        assert_eq!(
            json_body(response).await,
            json!({ "props": { "posts": null }, "revalidate": 0 })
        );
    }

    #[tokio::test]
    async fn test_post_page_with_unknown_id_is_empty() {
        let stub = seeded().start().await;
        let response = get_uri(app_for(&stub), "/api/pages/posts/99").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({ "props": { "post": null }, "revalidate": 0 })
        );
    }

    #[tokio::test]
    async fn test_post_page() {
        let stub = seeded().start().await;
        let response = get_uri(app_for(&stub), "/api/pages/posts/2").await;

        let json = json_body(response).await;
        assert_eq!(json["props"]["post"]["data"]["title"], "second post");
        assert_eq!(json["props"]["post"]["data"]["author"]["id"], 2);
    }

    #[tokio::test]
    async fn test_recent_posts_page() {
        let stub = seeded().start().await;
        let response = get_uri(app_for(&stub), "/api/pages/posts/recent").await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["props"]["recentPosts"]["data"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_author_page() {
        let stub = seeded().start().await;
        let response = get_uri(app_for(&stub), "/api/pages/author/1").await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert!(json.get("revalidate").is_none());
        assert_eq!(json["props"]["authorPosts"]["author"]["name"], "Leanne Graham");
        assert_eq!(json["props"]["authorPosts"]["posts"][0]["title"], "first post");
    }

    #[tokio::test]
    async fn test_author_page_propagates_not_found() {
        let stub = seeded().start().await;
        let response = get_uri(app_for(&stub), "/api/pages/author/7").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(json_body(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn test_author_page_rejects_non_numeric_id() {
        let stub = seeded().start().await;
        let response = get_uri(app_for(&stub), "/api/pages/author/abc").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(stub.hits(), 0);
    }

    #[tokio::test]
    async fn test_paginated_page() {
        let stub = seeded().start().await;
        let response = get_uri(app_for(&stub), "/api/pages/posts/paginated?page=2&pageSize=1").await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        let posts = json["props"]["posts"].as_array().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0]["id"], 2);
    }

    #[tokio::test]
    async fn test_paginated_page_rejects_bad_page_size() {
        let stub = seeded().start().await;
        let response =
            get_uri(app_for(&stub), "/api/pages/posts/paginated?pageSize=ten").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(stub.hits(), 0);
    }

    #[tokio::test]
    async fn test_paginated_page_rejects_page_zero() {
        let stub = seeded().start().await;
        let response = get_uri(app_for(&stub), "/api/pages/posts/paginated?page=0&pageSize=2").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(stub.hits(), 0);
    }

    #[tokio::test]
    async fn test_search_page_propagates_upstream_failure() {
        let stub = seeded().posts_status(StatusCode::SERVICE_UNAVAILABLE).start().await;
        let response = get_uri(app_for(&stub), "/api/pages/posts/search?q=first").await;

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_search_page() {
        let stub = seeded().start().await;
        let response = get_uri(app_for(&stub), "/api/pages/posts/search?q=second").await;

        let json = json_body(response).await;
        let posts = json["props"]["posts"].as_array().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0]["author"]["name"], "Ervin Howell");
    }

    #[tokio::test]
    async fn test_post_paths() {
        let stub = seeded().start().await;
        let response = get_uri(app_for(&stub), "/api/paths/posts").await;

        assert_eq!(
            json_body(response).await,
            json!({
                "paths": [{ "params": { "id": "1" } }, { "params": { "id": "2" } }],
                "fallback": false
            })
        );
    }

    #[tokio::test]
    async fn test_create_post() {
        let stub = seeded().start().await;
        let response = app_for(&stub)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/posts")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"title":"third","body":"again"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let json = json_body(response).await;
        assert_eq!(json["id"], 3);
        assert_eq!(json["title"], "third");
    }

    #[tokio::test]
    async fn test_create_post_rejects_blank_title() {
        let stub = seeded().start().await;
        let response = app_for(&stub)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/posts")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"title":"  ","body":"again"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(stub.hits(), 0);
    }
}
