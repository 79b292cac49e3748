use serde::{Deserialize, Serialize};

/// Hours in the scheduling horizon. The optimizer always works on a single
/// day at hourly resolution.
pub const HOURS_PER_DAY: u8 = 24;

/// A household appliance with a daily energy need.
///
/// Flexible appliances are placed by the optimizer anywhere inside their
/// timing window. Non-flexible appliances are not scheduled at all; the
/// profile projection spreads their load flat across the day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appliance {
    /// Unique identifier. Schedules are keyed by this name.
    pub name: String,
    /// Draw while running, in kW. Must be positive.
    pub power_kw: f64,
    /// Required run length per day, 1..=24 whole hours.
    pub duration_hours: u8,
    pub flexible: bool,
    /// First hour (0..=23) at which the appliance may run.
    pub earliest_start: u8,
    /// Exclusive end bound (0..=24). A value less than or equal to
    /// `earliest_start` denotes a window that wraps past midnight,
    /// e.g. 22 -> 6.
    pub latest_end: u8,
}

impl Appliance {
    /// Hours of the day (ascending) at which this appliance may run.
    ///
    /// For a non-wrapping window this is `earliest_start..latest_end`. When
    /// `latest_end <= earliest_start` the window wraps: hours from
    /// `earliest_start` to midnight plus hours from midnight up to
    /// `latest_end`.
    pub fn feasible_window(&self) -> Vec<u8> {
        (0..HOURS_PER_DAY)
            .filter(|&t| {
                if self.earliest_start <= self.latest_end {
                    self.earliest_start <= t && t < self.latest_end
                } else {
                    t >= self.earliest_start || t < self.latest_end
                }
            })
            .collect()
    }

    /// True when the feasible window has room for the full run.
    pub fn window_fits_duration(&self) -> bool {
        self.feasible_window().len() >= usize::from(self.duration_hours)
    }
}
