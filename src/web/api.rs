use axum::response::IntoResponse;

/// Health check endpoint
#[axum::debug_handler]
pub async fn health() -> impl IntoResponse {
    "OK"
}
