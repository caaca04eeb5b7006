use axum::http::StatusCode;

/// GET /health - Basic liveness probe.
pub async fn health() -> StatusCode {
    StatusCode::OK
}
