use serde::{Deserialize, Serialize};

use super::HOURS_PER_DAY;

/// One hour of the projected energy timeline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HourlyRow {
    pub hour: u8,
    pub baseline_kwh: f64,
    pub flexible_kwh: f64,
    pub total_kwh: f64,
}

/// Projected hourly energy breakdown for one day, 24 rows.
///
/// Derived data: recomputed per schedule, never mutated after
/// construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HourlyProfile {
    rows: Vec<HourlyRow>,
}

impl HourlyProfile {
    pub(crate) fn from_rows(rows: Vec<HourlyRow>) -> Self {
        debug_assert_eq!(rows.len(), usize::from(HOURS_PER_DAY));
        Self { rows }
    }

    pub fn rows(&self) -> &[HourlyRow] {
        &self.rows
    }

    pub fn row(&self, hour: u8) -> &HourlyRow {
        &self.rows[usize::from(hour % HOURS_PER_DAY)]
    }

    /// Total energy over the day, in kWh.
    pub fn total_kwh(&self) -> f64 {
        self.rows.iter().map(|r| r.total_kwh).sum()
    }
}
