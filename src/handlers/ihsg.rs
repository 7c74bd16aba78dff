use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::state::AppState;

/// The fixed localized failure message; any upstream problem (network,
/// malformed payload, length mismatch) renders this and nothing partial.
pub const FETCH_ERROR: &str = "Gagal memuat data";

pub async fn get_ihsg(State(state): State<AppState>) -> impl IntoResponse {
    match state.ihsg().fetch_monthly().await {
        Ok(snapshot) => (StatusCode::OK, Json(snapshot)).into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "failed to fetch IHSG data");
            (StatusCode::BAD_GATEWAY, FETCH_ERROR).into_response()
        }
    }
}
