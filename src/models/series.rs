use serde::Serialize;

/// Display range selectable on the chart panel. Each range maps to a
/// fixed number of buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRange {
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl TimeRange {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "1D" => Some(TimeRange::Day),
            "1W" => Some(TimeRange::Week),
            "1M" => Some(TimeRange::Month),
            "3M" => Some(TimeRange::Quarter),
            "1Y" => Some(TimeRange::Year),
            _ => None,
        }
    }

    pub fn bucket_count(self) -> usize {
        match self {
            TimeRange::Day => 24,
            TimeRange::Week => 7,
            TimeRange::Month => 30,
            TimeRange::Quarter => 90,
            TimeRange::Year => 365,
        }
    }
}

/// Bar colors serialize as the CSS colors the chart panels use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BarColor {
    #[serde(rename = "#00d4aa")]
    Up,
    #[serde(rename = "#ff6b6b")]
    Down,
}

/// One generated chart payload. All six arrays have the same length and
/// are index-aligned; that alignment is the only guarantee, the values
/// themselves are synthetic.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub prices: Vec<f64>,
    pub highs: Vec<f64>,
    pub lows: Vec<f64>,
    pub volumes: Vec<f64>,
    pub bar_colors: Vec<BarColor>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Snapshot row for the technical-indicators panel.
#[derive(Debug, Clone, Serialize)]
pub struct IndicatorReading {
    pub name: String,
    pub value: String,
    pub value_class: String,
    pub status: String,
    pub status_class: String,
}

/// Mini chart on the dashboard landing card: 24 hourly points.
#[derive(Debug, Clone, Serialize)]
pub struct Sparkline {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_parse_and_bucket() {
        assert_eq!(TimeRange::parse("1D"), Some(TimeRange::Day));
        assert_eq!(TimeRange::parse("1W"), Some(TimeRange::Week));
        assert_eq!(TimeRange::parse("1M"), Some(TimeRange::Month));
        assert_eq!(TimeRange::parse("3M"), Some(TimeRange::Quarter));
        assert_eq!(TimeRange::parse("1Y"), Some(TimeRange::Year));
        assert_eq!(TimeRange::parse("2W"), None);

        assert_eq!(TimeRange::Day.bucket_count(), 24);
        assert_eq!(TimeRange::Week.bucket_count(), 7);
        assert_eq!(TimeRange::Month.bucket_count(), 30);
        assert_eq!(TimeRange::Quarter.bucket_count(), 90);
        assert_eq!(TimeRange::Year.bucket_count(), 365);
    }

    #[test]
    fn bar_colors_serialize_as_css_colors() {
        assert_eq!(
            serde_json::to_string(&BarColor::Up).unwrap(),
            "\"#00d4aa\""
        );
        assert_eq!(
            serde_json::to_string(&BarColor::Down).unwrap(),
            "\"#ff6b6b\""
        );
    }
}
