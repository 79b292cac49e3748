//! Profile projection and cost evaluation.
//!
//! Turns a schedule into an hourly energy timeline and prices that
//! timeline against a TOU curve. Both functions are pure; neither logs nor
//! mutates its inputs.

use crate::domain::{
    Appliance, BaselineCurve, HourlyProfile, HourlyRow, PriceCurve, Schedule, HOURS_PER_DAY,
};

/// Project a schedule onto the 24-hour timeline.
///
/// Flexible appliances contribute `power_kw` at each of their scheduled
/// hours. Non-flexible appliances contribute
/// `power_kw * duration_hours / 24` to every hour: fixed loads are spread
/// flat across the day rather than modelled as on/off blocks, and the cost
/// figures depend on that distribution staying as-is.
///
/// `BaselineCurve` is complete by construction, so projection cannot hit a
/// missing baseline hour.
pub fn project(
    baseline: &BaselineCurve,
    appliances: &[Appliance],
    schedule: &Schedule,
) -> HourlyProfile {
    let mut flexible_kwh = [0.0_f64; 24];
    for appliance in appliances {
        if appliance.flexible {
            for &hour in schedule.hours_for(&appliance.name) {
                flexible_kwh[usize::from(hour % HOURS_PER_DAY)] += appliance.power_kw;
            }
        } else {
            let per_hour =
                appliance.power_kw * f64::from(appliance.duration_hours) / f64::from(HOURS_PER_DAY);
            for slot in flexible_kwh.iter_mut() {
                *slot += per_hour;
            }
        }
    }

    let rows = (0..HOURS_PER_DAY)
        .map(|hour| {
            let baseline_kwh = baseline.kwh_at(hour);
            let flexible_kwh = flexible_kwh[usize::from(hour)];
            HourlyRow {
                hour,
                baseline_kwh,
                flexible_kwh,
                total_kwh: baseline_kwh + flexible_kwh,
            }
        })
        .collect();
    HourlyProfile::from_rows(rows)
}

/// Total daily cost of a profile under the given price curve.
///
/// Hours absent from partial price data carry a zero price (see
/// [`PriceCurve::from_partial`]); the same curve prices the naive and the
/// optimized profile, so the leniency never skews the comparison.
pub fn cost(profile: &HourlyProfile, prices: &PriceCurve) -> f64 {
    profile
        .rows()
        .iter()
        .map(|row| row.total_kwh * prices.price_at(row.hour))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn appliances() -> Vec<Appliance> {
        vec![
            Appliance {
                name: "washer".into(),
                power_kw: 0.6,
                duration_hours: 2,
                flexible: true,
                earliest_start: 6,
                latest_end: 10,
            },
            Appliance {
                name: "fridge".into(),
                power_kw: 0.12,
                duration_hours: 24,
                flexible: false,
                earliest_start: 0,
                latest_end: 24,
            },
        ]
    }

    #[test]
    fn flexible_load_lands_on_scheduled_hours() {
        let mut schedule = Schedule::new();
        schedule.insert("washer", vec![6, 7]);
        let profile = project(&BaselineCurve::flat(0.5), &appliances(), &schedule);

        // fridge is flat-distributed: 0.12 * 24/24 at every hour
        assert!((profile.row(6).flexible_kwh - (0.6 + 0.12)).abs() < 1e-12);
        assert!((profile.row(7).flexible_kwh - (0.6 + 0.12)).abs() < 1e-12);
        assert!((profile.row(8).flexible_kwh - 0.12).abs() < 1e-12);
    }

    #[test]
    fn fixed_load_is_flat_distributed_by_duration_share() {
        let half_day_heater = vec![Appliance {
            name: "heater".into(),
            power_kw: 2.0,
            duration_hours: 12,
            flexible: false,
            earliest_start: 0,
            latest_end: 24,
        }];
        let profile = project(&BaselineCurve::flat(0.0), &half_day_heater, &Schedule::new());
        for row in profile.rows() {
            assert!((row.flexible_kwh - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn unscheduled_flexible_appliance_contributes_nothing() {
        let profile = project(&BaselineCurve::flat(0.5), &appliances(), &Schedule::new());
        assert!((profile.row(6).flexible_kwh - 0.12).abs() < 1e-12);
    }

    #[test]
    fn cost_sums_price_times_total() {
        let mut schedule = Schedule::new();
        schedule.insert("washer", vec![6, 7]);
        let baseline = BaselineCurve::flat(0.5);
        let profile = project(&baseline, &appliances(), &schedule);
        let prices = PriceCurve::flat(0.2);

        let expected = (0.5 * 24.0 + 0.6 * 2.0 + 0.12 * 24.0) * 0.2;
        assert!((cost(&profile, &prices) - expected).abs() < 1e-9);
    }

    #[test]
    fn zero_priced_hours_do_not_contribute() {
        let profile = project(&BaselineCurve::flat(1.0), &[], &Schedule::new());
        let prices = PriceCurve::from_partial([(0, 0.5)]);
        assert!((cost(&profile, &prices) - 0.5).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn totals_are_additive(
            base in prop::collection::vec(0.0f64..5.0, 24),
            hours in prop::collection::btree_set(0u8..24, 0..6),
        ) {
            let baseline = BaselineCurve::from_hourly(
                base.iter().enumerate().map(|(h, &v)| (h as u8, v)),
            ).unwrap();
            let mut schedule = Schedule::new();
            schedule.insert("washer", hours.into_iter().collect());

            let profile = project(&baseline, &appliances(), &schedule);
            for row in profile.rows() {
                prop_assert!((row.total_kwh - (row.baseline_kwh + row.flexible_kwh)).abs() < 1e-12);
            }
        }
    }
}
