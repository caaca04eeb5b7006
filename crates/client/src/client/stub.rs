//! In-process stand-in for the upstream posts API, for tests.
//!
//! Enabled for this crate's own tests and, through the `stub` feature, for
//! downstream crates that need a fake upstream.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use crate::{BlogClient, ClientConfig};

#[derive(Default)]
struct StubState {
    posts: Vec<Value>,
    users: HashMap<u64, Value>,
    author_delays: HashMap<u64, Duration>,
    posts_status: Option<StatusCode>,
    users_status: Option<StatusCode>,
    hits: AtomicUsize,
}

/// Builder for a stub upstream served on an ephemeral local port.
#[derive(Default)]
pub struct StubApi {
    state: StubState,
}

/// A running stub upstream.
pub struct RunningStub {
    pub base_url: String,
    state: Arc<StubState>,
}

impl RunningStub {
    /// A client pointed at this stub.
    pub fn client(&self) -> BlogClient {
        BlogClient::new(ClientConfig::new(&self.base_url).unwrap()).unwrap()
    }

    /// Number of requests the stub has served.
    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }
}

impl StubApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post(mut self, post: Value) -> Self {
        self.state.posts.push(post);
        self
    }

    pub fn user(mut self, user: Value) -> Self {
        let id = user["id"].as_u64().expect("stub user needs an id");
        self.state.users.insert(id, user);
        self
    }

    /// Delays `/users/{id}` so author lookups complete out of order.
    pub fn author_delay(mut self, id: u64, delay: Duration) -> Self {
        self.state.author_delays.insert(id, delay);
        self
    }

    /// Makes every `/posts` list request answer with `status`.
    pub fn posts_status(mut self, status: StatusCode) -> Self {
        self.state.posts_status = Some(status);
        self
    }

    /// Makes every `/users/{id}` request answer with `status`.
    pub fn users_status(mut self, status: StatusCode) -> Self {
        self.state.users_status = Some(status);
        self
    }

    pub async fn start(self) -> RunningStub {
        let state = Arc::new(self.state);
        let app = Router::new()
            .route("/posts", get(list_posts).post(create_post))
            .route("/posts/{id}", get(get_post))
            .route("/users/{id}", get(get_user))
            .route("/users/{id}/posts", get(get_user_posts))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        RunningStub {
            base_url: format!("http://{addr}"),
            state,
        }
    }
}

fn post_id(post: &Value) -> Option<u64> {
    post["id"].as_u64()
}

async fn list_posts(
    State(state): State<Arc<StubState>>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    if let Some(status) = state.posts_status {
        return (status, "upstream failure").into_response();
    }

    let mut posts: Vec<Value> = state.posts.clone();
    if let Some(needle) = query.get("title_like") {
        posts.retain(|p| p["title"].as_str().is_some_and(|t| t.contains(needle.as_str())));
    }
    if let (Some(page), Some(limit)) = (query.get("_page"), query.get("_limit")) {
        let page = page.parse::<usize>().unwrap_or(1).max(1);
        let limit = limit.parse::<usize>().unwrap_or(10);
        posts = posts.into_iter().skip((page - 1) * limit).take(limit).collect();
    }
    Json(Value::Array(posts)).into_response()
}

async fn get_post(State(state): State<Arc<StubState>>, Path(id): Path<u64>) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    match state.posts.iter().find(|p| post_id(p) == Some(id)) {
        Some(post) => Json(post.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({}))).into_response(),
    }
}

async fn create_post(State(state): State<Arc<StubState>>, Json(body): Json<Value>) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    let mut created = body;
    created["id"] = json!(state.posts.len() + 1);
    (StatusCode::CREATED, Json(created)).into_response()
}

async fn get_user(State(state): State<Arc<StubState>>, Path(id): Path<u64>) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    if let Some(delay) = state.author_delays.get(&id) {
        tokio::time::sleep(*delay).await;
    }
    if let Some(status) = state.users_status {
        return (status, "upstream failure").into_response();
    }
    match state.users.get(&id) {
        Some(user) => Json(user.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({}))).into_response(),
    }
}

async fn get_user_posts(State(state): State<Arc<StubState>>, Path(id): Path<u64>) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    let posts: Vec<Value> = state
        .posts
        .iter()
        .filter(|p| p["userId"].as_u64() == Some(id))
        .map(|p| {
            json!({
                "userId": p["userId"],
                "id": p["id"],
                "title": p["title"],
                "body": p["body"],
            })
        })
        .collect();
    Json(Value::Array(posts)).into_response()
}
