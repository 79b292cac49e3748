use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::HOURS_PER_DAY;

/// A baseline or price curve did not cover all 24 hours of the day.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{curve} curve is missing hours {missing_hours:?}")]
pub struct MalformedCurve {
    pub curve: &'static str,
    pub missing_hours: Vec<u8>,
}

fn collect_hourly(
    curve: &'static str,
    entries: impl IntoIterator<Item = (u8, f64)>,
) -> Result<[f64; 24], MalformedCurve> {
    let map: BTreeMap<u8, f64> = entries.into_iter().collect();
    let missing_hours: Vec<u8> = (0..HOURS_PER_DAY).filter(|h| !map.contains_key(h)).collect();
    if !missing_hours.is_empty() {
        return Err(MalformedCurve {
            curve,
            missing_hours,
        });
    }
    let mut values = [0.0; 24];
    for (hour, value) in map {
        if hour < HOURS_PER_DAY {
            values[usize::from(hour)] = value;
        }
    }
    Ok(values)
}

/// Fixed hourly consumption not subject to optimization, in kWh per hour.
///
/// Construction fails unless all 24 hours are present; the profile
/// projection relies on a complete curve.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BaselineCurve {
    kwh: [f64; 24],
}

impl BaselineCurve {
    pub fn from_hourly(
        entries: impl IntoIterator<Item = (u8, f64)>,
    ) -> Result<Self, MalformedCurve> {
        Ok(Self {
            kwh: collect_hourly("baseline", entries)?,
        })
    }

    pub fn from_array(kwh: [f64; 24]) -> Self {
        Self { kwh }
    }

    pub fn flat(kwh: f64) -> Self {
        Self { kwh: [kwh; 24] }
    }

    pub fn kwh_at(&self, hour: u8) -> f64 {
        self.kwh[usize::from(hour % HOURS_PER_DAY)]
    }
}

/// Time-of-use price curve, in currency per kWh for each hour of the day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceCurve {
    price_per_kwh: [f64; 24],
}

impl PriceCurve {
    /// Strict constructor: all 24 hours must be present.
    pub fn from_hourly(
        entries: impl IntoIterator<Item = (u8, f64)>,
    ) -> Result<Self, MalformedCurve> {
        Ok(Self {
            price_per_kwh: collect_hourly("price", entries)?,
        })
    }

    /// Lenient constructor: hours without an entry are priced at zero.
    ///
    /// This is the fail-open policy for partial price data. Cost evaluation
    /// of both the naive and the optimized profile goes through the same
    /// curve, so the leniency is applied uniformly.
    pub fn from_partial(entries: impl IntoIterator<Item = (u8, f64)>) -> Self {
        let mut price_per_kwh = [0.0; 24];
        for (hour, price) in entries {
            if hour < HOURS_PER_DAY {
                price_per_kwh[usize::from(hour)] = price;
            }
        }
        Self { price_per_kwh }
    }

    pub fn flat(price: f64) -> Self {
        Self {
            price_per_kwh: [price; 24],
        }
    }

    pub fn price_at(&self, hour: u8) -> f64 {
        self.price_per_kwh[usize::from(hour % HOURS_PER_DAY)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_baseline_curve_round_trips() {
        let curve = BaselineCurve::from_hourly((0..24).map(|h| (h, f64::from(h) * 0.1))).unwrap();
        assert_eq!(curve.kwh_at(0), 0.0);
        assert!((curve.kwh_at(23) - 2.3).abs() < 1e-12);
    }

    #[test]
    fn missing_hours_are_reported() {
        let err = BaselineCurve::from_hourly((0..22).map(|h| (h, 0.5))).unwrap_err();
        assert_eq!(err.curve, "baseline");
        assert_eq!(err.missing_hours, vec![22, 23]);
    }

    #[test]
    fn strict_price_curve_rejects_gaps() {
        let err = PriceCurve::from_hourly([(0, 0.2), (1, 0.3)]).unwrap_err();
        assert_eq!(err.curve, "price");
        assert_eq!(err.missing_hours.len(), 22);
    }

    #[test]
    fn partial_price_curve_zero_fills() {
        let curve = PriceCurve::from_partial([(8, 0.4), (9, 0.5)]);
        assert_eq!(curve.price_at(8), 0.4);
        assert_eq!(curve.price_at(0), 0.0);
        assert_eq!(curve.price_at(23), 0.0);
    }

    #[test]
    fn flat_curves() {
        let baseline = BaselineCurve::flat(0.5);
        let prices = PriceCurve::flat(0.2);
        for h in 0..24 {
            assert_eq!(baseline.kwh_at(h), 0.5);
            assert_eq!(prices.price_at(h), 0.2);
        }
    }
}
