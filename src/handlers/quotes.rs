use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::models::quote::{MarketStatus, MarketSummary, Quote};
use crate::state::AppState;

pub async fn get_quotes(State(state): State<AppState>) -> Json<Vec<Quote>> {
    Json(state.quotes().await)
}

pub async fn get_summary(State(state): State<AppState>) -> Json<MarketSummary> {
    Json(state.summary().await)
}

#[derive(Debug, Serialize)]
pub struct StatusReply {
    pub status: MarketStatus,
    pub label: &'static str,
}

pub async fn get_status(State(state): State<AppState>) -> Json<StatusReply> {
    let status = state.status().await;
    Json(StatusReply {
        status,
        label: status.label(),
    })
}
