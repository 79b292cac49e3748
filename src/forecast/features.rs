//! Feature engineering for demand forecasting.
//!
//! Small building blocks for models that predict hourly usage: calendar
//! features, lag vectors, and rolling statistics over the usage series.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Calendar features for one historical usage hour.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TimeFeatures {
    /// Hour of day (0-23)
    pub hour_of_day: u8,
    /// Day of week (0=Monday, 6=Sunday)
    pub day_of_week: u32,
    pub is_weekend: bool,
    /// Month (1-12)
    pub month: u32,
}

pub fn time_features(date: NaiveDate, hour: u8) -> TimeFeatures {
    let day_of_week = date.weekday().num_days_from_monday();
    TimeFeatures {
        hour_of_day: hour % 24,
        day_of_week,
        is_weekend: day_of_week >= 5,
        month: date.month(),
    }
}

/// Previous-value vectors for a time series: entry `i` holds the last
/// `num_lags` values before `values[num_lags + i]`, most recent first.
pub fn lag_features(values: &[f64], num_lags: usize) -> Vec<Vec<f64>> {
    let mut out = Vec::new();
    for i in num_lags..values.len() {
        let mut lags = Vec::with_capacity(num_lags);
        for lag in 1..=num_lags {
            lags.push(values[i - lag]);
        }
        out.push(lags);
    }
    out
}

/// Rolling (mean, std) over trailing windows of the series.
pub fn rolling_statistics(values: &[f64], window_size: usize) -> Vec<(f64, f64)> {
    let mut stats = Vec::new();
    if window_size == 0 {
        return stats;
    }
    for i in window_size..=values.len() {
        let window = &values[i - window_size..i];
        let mean = window.iter().sum::<f64>() / window.len() as f64;
        let variance =
            window.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / window.len() as f64;
        stats.push((mean, variance.sqrt()));
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekend_detection() {
        // 2025-01-04 is a Saturday
        let saturday = time_features(NaiveDate::from_ymd_opt(2025, 1, 4).unwrap(), 10);
        assert!(saturday.is_weekend);
        assert_eq!(saturday.day_of_week, 5);

        let monday = time_features(NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(), 10);
        assert!(!monday.is_weekend);
        assert_eq!(monday.day_of_week, 0);
    }

    #[test]
    fn lag_features_shift_correctly() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let lags = lag_features(&values, 2);
        assert_eq!(lags.len(), 3);
        assert_eq!(lags[0], vec![2.0, 1.0]);
        assert_eq!(lags[2], vec![4.0, 3.0]);
    }

    #[test]
    fn rolling_statistics_over_small_windows() {
        let values = vec![1.0, 2.0, 3.0, 4.0];
        let stats = rolling_statistics(&values, 2);
        assert_eq!(stats.len(), 3);
        assert!((stats[0].0 - 1.5).abs() < 1e-12);
        assert!((stats[2].0 - 3.5).abs() < 1e-12);
        assert!((stats[0].1 - 0.5).abs() < 1e-12);
    }
}
