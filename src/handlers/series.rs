use axum::extract::{Path, Query};
use axum::Json;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;

use crate::models::quote::wib_now;
use crate::models::series::{ChartSeries, IndicatorReading, Sparkline, TimeRange};
use crate::services::{profiles, synthesizer};

#[derive(Debug, Deserialize)]
pub struct SeriesQuery {
    pub range: Option<String>,
}

/// Chart payload for one symbol. Unknown symbols and ranges fall back to
/// defaults instead of erroring.
pub async fn get_series(
    Path(symbol): Path<String>,
    Query(SeriesQuery { range }): Query<SeriesQuery>,
) -> Json<ChartSeries> {
    let profile = profiles::profile_or_default(&symbol);
    let range = range
        .as_deref()
        .and_then(TimeRange::parse)
        .unwrap_or(TimeRange::Month);

    let mut rng = StdRng::from_entropy();
    Json(synthesizer::generate_series(
        profile,
        range,
        wib_now(),
        &mut rng,
    ))
}

pub async fn get_indicators(Path(symbol): Path<String>) -> Json<Vec<IndicatorReading>> {
    let profile = profiles::profile_or_default(&symbol);
    let mut rng = StdRng::from_entropy();
    Json(synthesizer::generate_indicators(profile, &mut rng))
}

pub async fn get_sparkline() -> Json<Sparkline> {
    let mut rng = StdRng::from_entropy();
    Json(synthesizer::generate_sparkline(&mut rng))
}
