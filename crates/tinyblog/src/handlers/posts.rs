//! Post submission.

use axum::{extract::State, http::StatusCode, Json};

use tinyblog_core::blog::{CreatedPost, NewPost};

use crate::{handlers::AppError, state::AppState};

/// Create a post (POST /api/posts).
pub async fn create_post(
    State(state): State<AppState>,
    Json(post): Json<NewPost>,
) -> Result<(StatusCode, Json<CreatedPost>), AppError> {
    let created = state.client.create_post(&post).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
