use axum::Json;
use axum::response::IntoResponse;

/// GET / — liveness probe.
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({"message": "OK"}))
}
