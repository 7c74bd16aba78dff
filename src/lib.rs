pub mod handlers;
pub mod models;
pub mod services;
pub mod state;
pub mod tasks;

use axum::{
    routing::{get, get_service, post},
    Router,
};
use state::AppState;
use tower_http::services::ServeDir;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::page::index))
        .route("/health", get(handlers::health::get_health))
        .route("/api/chat", post(handlers::chat::post_chat))
        .route("/api/chat/history", get(handlers::chat::get_history))
        .route("/api/chat/suggestions", get(handlers::chat::get_suggestions))
        .route("/api/quick", post(handlers::chat::post_quick))
        .route("/api/series/{symbol}", get(handlers::series::get_series))
        .route(
            "/api/indicators/{symbol}",
            get(handlers::series::get_indicators),
        )
        .route("/api/sparkline", get(handlers::series::get_sparkline))
        .route(
            "/api/analysis/{symbol}",
            get(handlers::analysis::get_market_analysis),
        )
        .route(
            "/api/analysis/{symbol}/point",
            get(handlers::analysis::get_point_analysis),
        )
        .route(
            "/api/analysis/{symbol}/detail",
            get(handlers::analysis::get_detailed_analysis),
        )
        .route("/api/quotes", get(handlers::quotes::get_quotes))
        .route("/api/summary", get(handlers::quotes::get_summary))
        .route("/api/status", get(handlers::quotes::get_status))
        .route("/api/ihsg", get(handlers::ihsg::get_ihsg))
        .route("/ws/quotes", get(handlers::ws::ws_quotes))
        .nest_service("/static", get_service(ServeDir::new("static")))
        .with_state(state)
}
