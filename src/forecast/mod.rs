//! Demand forecasting collaborator.
//!
//! Predicts a 24-entry baseline load curve from historical usage. The
//! optimizer does not depend on this module; the predicted curve can be
//! fed into it as the baseline input when configured to do so.

pub mod features;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{BaselineCurve, HOURS_PER_DAY};

/// One hour of historical usage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UsagePoint {
    pub date: NaiveDate,
    pub hour: u8,
    pub kwh: f64,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ForecastError {
    #[error("not enough history: every hour of day needs at least one observation")]
    InsufficientHistory,
}

/// Predicts the next day's hourly baseline load.
pub trait LoadForecaster {
    fn predict_next_24h(&self, history: &[UsagePoint]) -> Result<BaselineCurve, ForecastError>;
}

/// Hour-of-day averaging over a trailing window of history.
///
/// Deliberately simple: no model training, no weather input. Good enough
/// to produce a plausible baseline curve from a few days of usage data.
#[derive(Debug, Clone)]
pub struct SeasonalNaiveForecaster {
    /// How many trailing days of history to average over.
    pub lookback_days: usize,
}

impl Default for SeasonalNaiveForecaster {
    fn default() -> Self {
        Self { lookback_days: 7 }
    }
}

impl LoadForecaster for SeasonalNaiveForecaster {
    fn predict_next_24h(&self, history: &[UsagePoint]) -> Result<BaselineCurve, ForecastError> {
        let tail_len = self.lookback_days * usize::from(HOURS_PER_DAY);
        let tail = &history[history.len().saturating_sub(tail_len)..];

        let mut sums = [0.0_f64; 24];
        let mut counts = [0u32; 24];
        for point in tail {
            let h = usize::from(point.hour % HOURS_PER_DAY);
            sums[h] += point.kwh;
            counts[h] += 1;
        }
        if counts.iter().any(|&c| c == 0) {
            return Err(ForecastError::InsufficientHistory);
        }

        let mut kwh = [0.0_f64; 24];
        for h in 0..24 {
            kwh[h] = sums[h] / f64::from(counts[h]);
        }
        Ok(BaselineCurve::from_array(kwh))
    }
}
