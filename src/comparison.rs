//! Comparison driver: optimized schedule vs. the naive reference.

use serde::Serialize;
use tracing::warn;

use crate::domain::{Appliance, BaselineCurve, HourlyProfile, PriceCurve, Schedule};
use crate::optimizer::{naive_schedule, MilpSolver, OptimizeError};
use crate::projection::{cost, project};

/// Outcome of one optimization run, with the naive reference alongside.
#[derive(Debug, Clone, Serialize)]
pub struct CostComparison {
    pub optimized: Schedule,
    pub naive: Schedule,
    pub optimized_profile: HourlyProfile,
    pub naive_profile: HourlyProfile,
    pub naive_cost: f64,
    pub optimized_cost: f64,
    /// `naive_cost - optimized_cost`. Usually non-negative; can dip below
    /// zero when a constraint (e.g. a concurrency cap) binds the optimizer
    /// while the naive heuristic, which ignores all constraints but
    /// duration, stacks load on cheap hours.
    pub savings: f64,
}

/// Build the naive and the optimized schedule, project both, and price
/// both against the same curve.
pub fn compare(
    solver: &MilpSolver,
    appliances: &[Appliance],
    baseline: &BaselineCurve,
    prices: &PriceCurve,
    max_simultaneous: Option<u32>,
) -> Result<CostComparison, OptimizeError> {
    let optimized = solver.solve(appliances, baseline, prices, max_simultaneous)?;
    let naive = naive_schedule(appliances);

    let optimized_profile = project(baseline, appliances, &optimized);
    let naive_profile = project(baseline, appliances, &naive);

    let optimized_cost = cost(&optimized_profile, prices);
    let naive_cost = cost(&naive_profile, prices);
    let savings = naive_cost - optimized_cost;
    if savings < 0.0 {
        warn!(
            naive_cost,
            optimized_cost, "naive reference beat the optimizer; it ran outside the constraint set"
        );
    }

    Ok(CostComparison {
        optimized,
        naive,
        optimized_profile,
        naive_profile,
        naive_cost,
        optimized_cost,
        savings,
    })
}
