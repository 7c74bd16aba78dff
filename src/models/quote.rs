use chrono::{DateTime, Datelike, FixedOffset, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Quote {
    pub code: String,
    pub price: f64,
    /// Percent change against the previously displayed price.
    pub change_pct: f64,
    /// Unix timestamp (ms)
    pub ts_ms: i64,
}

/// The aggregate index line shown at the top of the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketSummary {
    pub index: f64,
    pub change_pct: f64,
    pub ts_ms: i64,
}

/// Broadcast payload for the live ticker: either a single stock quote or
/// the refreshed index summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BoardUpdate {
    Quote(Quote),
    Summary(MarketSummary),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketStatus {
    Open,
    Closed,
}

impl MarketStatus {
    pub fn label(self) -> &'static str {
        match self {
            MarketStatus::Open => "Pasar Terbuka",
            MarketStatus::Closed => "Pasar Tutup",
        }
    }
}

/// WIB (Waktu Indonesia Barat) is a fixed UTC+7 offset with no DST.
pub fn wib() -> FixedOffset {
    FixedOffset::east_opt(7 * 3600).expect("WIB offset is in range")
}

pub fn wib_now() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&wib())
}

pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// The exchange trades Monday through Friday, 09:00-16:00 WIB. The check
/// buckets by hour, so 15:59 is open and 16:00 is closed.
pub fn market_status_at(now: DateTime<FixedOffset>) -> MarketStatus {
    let weekday = now.weekday();
    if weekday == Weekday::Sat || weekday == Weekday::Sun {
        return MarketStatus::Closed;
    }
    if (9..16).contains(&now.hour()) {
        MarketStatus::Open
    } else {
        MarketStatus::Closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn wib_time(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<FixedOffset> {
        wib().with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn weekday_trading_hours_are_open() {
        // 2025-01-06 is a Monday.
        assert_eq!(market_status_at(wib_time(2025, 1, 6, 9, 0)), MarketStatus::Open);
        assert_eq!(market_status_at(wib_time(2025, 1, 6, 10, 0)), MarketStatus::Open);
        assert_eq!(
            market_status_at(wib_time(2025, 1, 6, 15, 59)),
            MarketStatus::Open
        );
    }

    #[test]
    fn closes_at_sixteen_and_overnight() {
        assert_eq!(
            market_status_at(wib_time(2025, 1, 6, 16, 0)),
            MarketStatus::Closed
        );
        assert_eq!(
            market_status_at(wib_time(2025, 1, 6, 16, 30)),
            MarketStatus::Closed
        );
        assert_eq!(
            market_status_at(wib_time(2025, 1, 6, 8, 59)),
            MarketStatus::Closed
        );
    }

    #[test]
    fn weekends_are_closed() {
        // 2025-01-04 is a Saturday, 2025-01-05 a Sunday.
        assert_eq!(
            market_status_at(wib_time(2025, 1, 4, 10, 0)),
            MarketStatus::Closed
        );
        assert_eq!(
            market_status_at(wib_time(2025, 1, 5, 10, 0)),
            MarketStatus::Closed
        );
    }

    #[test]
    fn status_labels_are_localized() {
        assert_eq!(MarketStatus::Open.label(), "Pasar Terbuka");
        assert_eq!(MarketStatus::Closed.label(), "Pasar Tutup");
    }
}
