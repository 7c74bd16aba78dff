use serde::{Deserialize, Serialize};

/// One month of daily IHSG closes as served by `/api/ihsg`.
///
/// `dates` and `prices` are guaranteed to be the same length; the service
/// rejects upstream payloads where they diverge instead of rendering a
/// partial chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IhsgSnapshot {
    pub dates: Vec<String>,
    pub prices: Vec<f64>,
    pub last_price: f64,
    /// Last close minus the previous close.
    pub change: f64,
}

impl IhsgSnapshot {
    /// Percent change relative to the previous close, i.e.
    /// `change / (last_price - change) * 100`.
    pub fn percent_change(&self) -> f64 {
        self.change / (self.last_price - self.change) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_change_uses_previous_close_as_base() {
        let snap = IhsgSnapshot {
            dates: vec!["2025-01-02".into(), "2025-01-03".into()],
            prices: vec![7200.0, 7300.0],
            last_price: 7300.0,
            change: 100.0,
        };
        let pct = snap.percent_change();
        assert!((pct - 100.0 / 7200.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn percent_change_is_negative_on_a_down_day() {
        let snap = IhsgSnapshot {
            dates: vec!["2025-01-02".into(), "2025-01-03".into()],
            prices: vec![7300.0, 7227.0],
            last_price: 7227.0,
            change: -73.0,
        };
        assert!(snap.percent_change() < 0.0);
        assert!((snap.percent_change() - (-1.0)).abs() < 1e-9);
    }
}
