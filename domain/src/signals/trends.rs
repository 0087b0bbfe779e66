//! Search-interest time series analysis.

use serde::{Deserialize, Serialize};

/// Percent change between the last two quarters that counts as movement.
const DIRECTION_THRESHOLD_PCT: f64 = 15.0;
/// Minimum points for a direction (two quarters of three).
const DIRECTION_MIN_POINTS: usize = 6;
/// Minimum points before seasonality is assessed.
const SEASONALITY_MIN_POINTS: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Rising,
    Stable,
    Declining,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seasonality {
    InsufficientData,
    Seasonal,
    GrowthTrend,
    Stable,
}

/// Interest statistics for one keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordTrend {
    pub keyword: String,
    pub avg_interest: u32,
    pub trend: TrendDirection,
    pub change_pct: i64,
    pub max_interest: u32,
    pub min_interest: u32,
    pub volatility: u32,
    pub data_points: usize,
    pub seasonality: Seasonality,
}

impl KeywordTrend {
    /// Analyze a non-empty interest series. Returns `None` for an empty one.
    pub fn from_series(keyword: &str, interests: &[u32]) -> Option<Self> {
        let max_interest = *interests.iter().max()?;
        let min_interest = *interests.iter().min()?;
        let (trend, change_pct) = direction(interests);

        Some(Self {
            keyword: keyword.to_string(),
            avg_interest: mean(interests).round() as u32,
            trend,
            change_pct: change_pct.round() as i64,
            max_interest,
            min_interest,
            volatility: volatility(interests).round() as u32,
            data_points: interests.len(),
            seasonality: seasonality(interests),
        })
    }
}

/// Trends for a keyword set. `trends` holds only keywords that returned data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendsReport {
    pub trends: Vec<KeywordTrend>,
    pub avg_interest: u32,
    pub valid_results: usize,
    pub total_keywords: usize,
    pub search_keywords: Vec<String>,
}

impl TrendsReport {
    pub fn new(search_keywords: Vec<String>, trends: Vec<KeywordTrend>) -> Self {
        let valid_results = trends.len();
        let avg_interest = if valid_results == 0 {
            0
        } else {
            let total: u32 = trends.iter().map(|t| t.avg_interest).sum();
            (f64::from(total) / valid_results as f64).round() as u32
        };
        Self {
            trends,
            avg_interest,
            valid_results,
            total_keywords: search_keywords.len(),
            search_keywords,
        }
    }

    /// Whether any keyword returned data.
    pub fn has_data(&self) -> bool {
        self.valid_results > 0
    }

    pub fn keywords_trending(&self, direction: TrendDirection) -> Vec<&str> {
        self.trends
            .iter()
            .filter(|t| t.trend == direction)
            .map(|t| t.keyword.as_str())
            .collect()
    }

    pub fn peak_interest(&self) -> u32 {
        self.trends.iter().map(|t| t.max_interest).max().unwrap_or(0)
    }

    /// Trend-derived market score in [0,10].
    pub fn trend_score(&self) -> u8 {
        if self.avg_interest == 0 {
            return 0;
        }

        let mut score = (f64::from(self.avg_interest) / 10.0).min(4.0);
        score += 2.0 * self.keywords_trending(TrendDirection::Rising).len() as f64;
        score += self.keywords_trending(TrendDirection::Stable).len() as f64;

        let peak = self.peak_interest();
        if peak > 50 {
            score += 2.0;
        }
        if peak > 80 {
            score += 1.0;
        }
        if self.valid_results >= 3 {
            score += 1.0;
        }

        score.round().min(10.0) as u8
    }
}

fn mean(values: &[u32]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|v| f64::from(*v)).sum::<f64>() / values.len() as f64
}

/// Last three points against the three before them.
fn direction(interests: &[u32]) -> (TrendDirection, f64) {
    if interests.len() < DIRECTION_MIN_POINTS {
        return (TrendDirection::Stable, 0.0);
    }
    let n = interests.len();
    let last = mean(&interests[n - 3..]);
    let previous = mean(&interests[n - 6..n - 3]);
    if previous == 0.0 {
        return (TrendDirection::Stable, 0.0);
    }

    let change_pct = (last - previous) / previous * 100.0;
    let direction = if change_pct > DIRECTION_THRESHOLD_PCT {
        TrendDirection::Rising
    } else if change_pct < -DIRECTION_THRESHOLD_PCT {
        TrendDirection::Declining
    } else {
        TrendDirection::Stable
    };
    (direction, change_pct)
}

/// Population standard deviation.
fn volatility(interests: &[u32]) -> f64 {
    if interests.len() < 2 {
        return 0.0;
    }
    let m = mean(interests);
    let variance = interests
        .iter()
        .map(|v| (f64::from(*v) - m).powi(2))
        .sum::<f64>()
        / interests.len() as f64;
    variance.sqrt()
}

fn seasonality(interests: &[u32]) -> Seasonality {
    if interests.len() < SEASONALITY_MIN_POINTS {
        return Seasonality::InsufficientData;
    }

    let mut peaks = Vec::new();
    let mut troughs = 0usize;
    for i in 1..interests.len() - 1 {
        let (prev, cur, next) = (interests[i - 1], interests[i], interests[i + 1]);
        if cur > prev && cur > next {
            peaks.push(i);
        }
        if cur < prev && cur < next {
            troughs += 1;
        }
    }

    if peaks.len() >= 3 {
        let spacing = (peaks[peaks.len() - 1] - peaks[0]) as f64 / (peaks.len() - 1) as f64;
        if (10.0..=14.0).contains(&spacing) {
            return Seasonality::Seasonal;
        }
    }

    if peaks.len() > troughs {
        Seasonality::GrowthTrend
    } else {
        Seasonality::Stable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trend(keyword: &str, avg: u32, direction: TrendDirection, max: u32) -> KeywordTrend {
        KeywordTrend {
            keyword: keyword.to_string(),
            avg_interest: avg,
            trend: direction,
            change_pct: 0,
            max_interest: max,
            min_interest: 0,
            volatility: 0,
            data_points: 12,
            seasonality: Seasonality::Stable,
        }
    }

    #[test]
    fn test_rising_series() {
        let t = KeywordTrend::from_series("ocr", &[10, 10, 10, 20, 20, 20]).unwrap();
        assert_eq!(t.trend, TrendDirection::Rising);
        assert_eq!(t.change_pct, 100);
        assert_eq!(t.avg_interest, 15);
        assert_eq!(t.max_interest, 20);
        assert_eq!(t.min_interest, 10);
        assert_eq!(t.volatility, 5);
        assert_eq!(t.seasonality, Seasonality::InsufficientData);
    }

    #[test]
    fn test_declining_and_short_series() {
        let declining = KeywordTrend::from_series("fax", &[40, 40, 40, 10, 10, 10]).unwrap();
        assert_eq!(declining.trend, TrendDirection::Declining);

        let short = KeywordTrend::from_series("fax", &[1, 50, 99]).unwrap();
        assert_eq!(short.trend, TrendDirection::Stable);
        assert_eq!(short.change_pct, 0);
    }

    #[test]
    fn test_zero_baseline_is_stable() {
        let t = KeywordTrend::from_series("new", &[0, 0, 0, 30, 30, 30]).unwrap();
        assert_eq!(t.trend, TrendDirection::Stable);
    }

    #[test]
    fn test_empty_series_has_no_trend() {
        assert!(KeywordTrend::from_series("none", &[]).is_none());
    }

    #[test]
    fn test_seasonal_peaks() {
        let mut series = vec![10u32; 40];
        for i in [2usize, 14, 26, 38] {
            series[i] = 50;
        }
        let t = KeywordTrend::from_series("tax", &series).unwrap();
        assert_eq!(t.seasonality, Seasonality::Seasonal);
    }

    #[test]
    fn test_report_average_and_validity() {
        let report = TrendsReport::new(
            vec!["a".into(), "b".into(), "c".into()],
            vec![
                trend("a", 30, TrendDirection::Stable, 40),
                trend("b", 41, TrendDirection::Rising, 60),
            ],
        );
        assert_eq!(report.avg_interest, 36);
        assert_eq!(report.valid_results, 2);
        assert_eq!(report.total_keywords, 3);
        assert!(report.has_data());
        assert!(!TrendsReport::new(vec!["a".into()], vec![]).has_data());
    }

    #[test]
    fn test_trend_score() {
        // 3.6 + 2 (rising) + 1 (stable) + 2 (peak > 50) = 8.6 -> 9
        let report = TrendsReport::new(
            vec!["a".into(), "b".into()],
            vec![
                trend("a", 30, TrendDirection::Stable, 40),
                trend("b", 42, TrendDirection::Rising, 60),
            ],
        );
        assert_eq!(report.trend_score(), 9);
    }

    #[test]
    fn test_trend_score_caps_and_zero() {
        let hot: Vec<KeywordTrend> = (0..5)
            .map(|i| trend(&format!("k{i}"), 90, TrendDirection::Rising, 100))
            .collect();
        let report = TrendsReport::new(hot.iter().map(|t| t.keyword.clone()).collect(), hot);
        assert_eq!(report.trend_score(), 10);
        assert_eq!(TrendsReport::default().trend_score(), 0);
    }
}
