use axum::Json;
use axum::response::{IntoResponse, Response};
use glot_translate::protocol::deepl::StatusEnvelope;
use http::StatusCode;

/// Handle `GET /`
pub async fn banner() -> Response {
    Json(StatusEnvelope::new(
        200,
        "Glot translation gateway. Go to /translate with POST.",
    ))
    .into_response()
}

/// JSON catch-all for unknown paths
pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(StatusEnvelope::new(404, "Path not found"))).into_response()
}
