//! Upstream feed for the one real data path: daily IHSG (`^JKSE`)
//! closes from the Yahoo Finance chart API.

use std::time::Duration;

use anyhow::{bail, Context};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::ihsg::IhsgSnapshot;
use crate::models::quote::wib;

#[derive(Clone)]
pub struct IhsgService {
    client: reqwest::Client,
    base_url: String,
}

impl Default for IhsgService {
    fn default() -> Self {
        Self::new()
    }
}

impl IhsgService {
    pub fn new() -> Self {
        Self::with_base_url("https://query1.finance.yahoo.com")
    }

    /// For tests / custom endpoints.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// One month of daily closes. Fails hard on empty data and on a
    /// dates/prices length mismatch; the caller renders a fixed error
    /// string instead of a partial chart.
    pub async fn fetch_monthly(&self) -> anyhow::Result<IhsgSnapshot> {
        let url = format!(
            "{}/v8/finance/chart/%5EJKSE?range=1mo&interval=1d",
            self.base_url
        );

        let resp = self
            .client
            .get(url)
            .timeout(Duration::from_secs(5))
            .header(
                reqwest::header::USER_AGENT,
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
            )
            .send()
            .await?
            .error_for_status()?;

        let parsed: ChartResponse = resp.json().await.context("invalid IHSG chart payload")?;

        let Some(result) = parsed
            .chart
            .and_then(|c| c.result)
            .and_then(|mut r| r.pop())
        else {
            bail!("Data kosong");
        };

        let timestamps = result.timestamp.unwrap_or_default();
        let closes = result
            .indicators
            .and_then(|i| i.quote)
            .and_then(|mut q| q.pop())
            .map(|q| q.close)
            .unwrap_or_default();

        let tz = wib();
        let dates: Vec<String> = timestamps
            .iter()
            .filter_map(|ts| DateTime::<Utc>::from_timestamp(*ts, 0))
            .map(|dt| dt.with_timezone(&tz).format("%Y-%m-%d").to_string())
            .collect();
        let prices: Vec<f64> = closes.into_iter().flatten().map(round2).collect();

        if prices.len() < 2 {
            bail!("Data kosong");
        }
        if dates.len() != prices.len() {
            bail!(
                "Data tidak konsisten: jumlah dates ({}) != prices ({})",
                dates.len(),
                prices.len()
            );
        }

        let last_price = prices[prices.len() - 1];
        let change = round2(last_price - prices[prices.len() - 2]);

        Ok(IhsgSnapshot {
            dates,
            prices,
            last_price,
            change,
        })
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Option<Chart>,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: Option<Indicators>,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Option<Vec<QuoteBlock>>,
}

#[derive(Debug, Deserialize, Default)]
struct QuoteBlock {
    #[serde(default)]
    close: Vec<Option<f64>>,
}
