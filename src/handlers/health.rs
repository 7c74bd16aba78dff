use axum::http::StatusCode;
use axum::response::IntoResponse;

pub async fn get_health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
