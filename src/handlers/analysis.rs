use axum::extract::{Path, Query};
use axum::Json;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::models::quote::now_ms;
use crate::services::{dispatcher, markdown, profiles, synthesizer};

#[derive(Debug, Serialize)]
pub struct AnalysisReply {
    pub symbol: String,
    pub text: String,
    pub html: String,
    pub ts_ms: i64,
}

/// Canned market commentary for the chart sidebar.
pub async fn get_market_analysis(Path(symbol): Path<String>) -> Json<AnalysisReply> {
    let symbol = symbol.to_uppercase();
    let text = dispatcher::market_analysis(&symbol);
    let html = markdown::render(&text);
    Json(AnalysisReply {
        symbol,
        text,
        html,
        ts_ms: now_ms(),
    })
}

/// Long-form randomized breakdown (technical, fundamental, risk) for
/// the "Analisis Mendalam" panel.
pub async fn get_detailed_analysis(Path(symbol): Path<String>) -> Json<AnalysisReply> {
    let symbol = symbol.to_uppercase();
    let profile = profiles::profile_or_default(&symbol);
    let mut rng = StdRng::from_entropy();
    let text = synthesizer::detailed_analysis(profile, &symbol, &mut rng);
    let html = markdown::render(&text);
    Json(AnalysisReply {
        symbol,
        text,
        html,
        ts_ms: now_ms(),
    })
}

#[derive(Debug, Deserialize)]
pub struct PointQuery {
    pub label: String,
    pub value: f64,
}

/// Commentary for a clicked chart point.
pub async fn get_point_analysis(
    Path(symbol): Path<String>,
    Query(PointQuery { label, value }): Query<PointQuery>,
) -> Json<AnalysisReply> {
    let symbol = symbol.to_uppercase();
    let profile = profiles::profile_or_default(&symbol);
    let mut rng = StdRng::from_entropy();
    let text = synthesizer::point_analysis(profile, &symbol, &label, value, &mut rng);
    let html = markdown::render(&text);
    Json(AnalysisReply {
        symbol,
        text,
        html,
        ts_ms: now_ms(),
    })
}
