//! Plain-text reporting for schedules and hourly comparisons.

use std::fmt::Write as _;

use crate::comparison::CostComparison;
use crate::domain::{PriceCurve, HOURS_PER_DAY};

/// Render a terminal report: schedule table, hourly comparison, and the
/// cost summary.
pub fn render_report(comparison: &CostComparison, prices: &PriceCurve) -> String {
    let mut out = String::new();

    out.push_str("--- Optimized schedule ---\n");
    if comparison.optimized.is_empty() {
        out.push_str("(no flexible appliances)\n");
    }
    for (name, hours) in comparison.optimized.iter() {
        let hours = hours
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "{name:<20} {hours}");
    }

    out.push_str("\n--- Hourly comparison ---\n");
    let _ = writeln!(
        out,
        "{:>4} {:>10} {:>12} {:>14}",
        "hour", "price", "naive kWh", "optimized kWh"
    );
    for hour in 0..HOURS_PER_DAY {
        let _ = writeln!(
            out,
            "{:>4} {:>10.3} {:>12.3} {:>14.3}",
            hour,
            prices.price_at(hour),
            comparison.naive_profile.row(hour).total_kwh,
            comparison.optimized_profile.row(hour).total_kwh,
        );
    }

    out.push_str("\n--- Cost summary ---\n");
    let _ = writeln!(out, "Baseline cost (day):  {:.2}", comparison.naive_cost);
    let _ = writeln!(out, "Optimized cost (day): {:.2}", comparison.optimized_cost);
    let _ = writeln!(out, "Savings/day:          {:.2}", comparison.savings);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::compare;
    use crate::domain::{Appliance, BaselineCurve};
    use crate::optimizer::MilpSolver;

    #[test]
    fn report_contains_all_sections() {
        let appliances = vec![Appliance {
            name: "washer".into(),
            power_kw: 0.6,
            duration_hours: 1,
            flexible: true,
            earliest_start: 6,
            latest_end: 10,
        }];
        let baseline = BaselineCurve::flat(0.5);
        let prices = PriceCurve::flat(0.2);
        let comparison =
            compare(&MilpSolver::default(), &appliances, &baseline, &prices, None).unwrap();

        let report = render_report(&comparison, &prices);
        assert!(report.contains("Optimized schedule"));
        assert!(report.contains("washer"));
        assert!(report.contains("Hourly comparison"));
        assert!(report.contains("Savings/day"));
    }
}
