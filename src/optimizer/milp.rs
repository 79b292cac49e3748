//! Binary ILP schedule solver.
//!
//! Places each flexible appliance's run hours inside its feasible window so
//! that the total daily energy cost is minimal. The formulation uses one
//! binary indicator per (appliance, feasible hour) pair; hours outside an
//! appliance's window get no variable at all, so infeasible placements are
//! structurally excluded rather than penalized.

use std::collections::BTreeMap;

use good_lp::{
    constraint, default_solver, variable, Expression, ProblemVariables, ResolutionError, Solution,
    SolverModel, Variable,
};

use crate::domain::{Appliance, BaselineCurve, PriceCurve, Schedule, HOURS_PER_DAY};
use crate::optimizer::OptimizeError;

/// Indicator values above this count as "on". Tolerates solver numerical
/// slack around the 0/1 bounds.
const ON_THRESHOLD: f64 = 0.5;

/// Exact cost-minimizing schedule solver.
#[derive(Debug, Clone)]
pub struct MilpSolver {
    /// Best-effort time budget for one solve. The pure-Rust backend does
    /// not expose a wall-clock limit; the fixed 24-hour horizon keeps the
    /// model small enough that solves finish well inside it.
    pub time_limit_seconds: u64,
}

impl Default for MilpSolver {
    fn default() -> Self {
        Self {
            time_limit_seconds: 30,
        }
    }
}

impl MilpSolver {
    pub fn new(time_limit_seconds: u64) -> Self {
        Self { time_limit_seconds }
    }

    /// Solve for the cost-minimizing hour assignment of all flexible
    /// appliances.
    ///
    /// The objective includes the baseline cost as a constant offset, so
    /// the optimal objective value is directly comparable to an evaluated
    /// profile cost. `max_simultaneous`, when set, caps how many flexible
    /// appliances may be on during any single hour.
    ///
    /// Every flexible appliance appears in the returned schedule with
    /// exactly `duration_hours` assigned hours, sorted ascending.
    pub fn solve(
        &self,
        appliances: &[Appliance],
        baseline: &BaselineCurve,
        prices: &PriceCurve,
        max_simultaneous: Option<u32>,
    ) -> Result<Schedule, OptimizeError> {
        let flex: Vec<&Appliance> = appliances.iter().filter(|a| a.flexible).collect();
        if flex.is_empty() {
            // Nothing to decide; fixed loads are the projector's business.
            return Ok(Schedule::new());
        }

        // Fast-path validation: a window shorter than the required run can
        // never be satisfied, so fail per-appliance before building the
        // model.
        let mut windows: Vec<Vec<u8>> = Vec::with_capacity(flex.len());
        for appliance in &flex {
            let window = appliance.feasible_window();
            if window.len() < usize::from(appliance.duration_hours) {
                return Err(OptimizeError::InvalidApplianceWindow {
                    name: appliance.name.clone(),
                    window_hours: window.len(),
                    duration_hours: appliance.duration_hours,
                });
            }
            windows.push(window);
        }

        let mut problem = ProblemVariables::new();

        // Indicator table keyed by (appliance index, hour). BTreeMap keeps
        // variable creation order deterministic, which makes repeated
        // solves of the same inputs reproducible.
        let mut indicators: BTreeMap<(usize, u8), Variable> = BTreeMap::new();
        for (i, window) in windows.iter().enumerate() {
            for &t in window {
                indicators.insert((i, t), problem.add(variable().binary()));
            }
        }

        // Baseline consumption is not a decision, but carrying its cost as
        // a constant offset makes the objective value a full daily cost.
        let baseline_cost: f64 = (0..HOURS_PER_DAY)
            .map(|t| prices.price_at(t) * baseline.kwh_at(t))
            .sum();

        let flexible_cost: Expression = indicators
            .iter()
            .map(|(&(i, t), &var)| prices.price_at(t) * flex[i].power_kw * var)
            .sum();

        let mut model = problem
            .minimise(flexible_cost + baseline_cost)
            .using(default_solver);

        // Each appliance runs for exactly its duration, no partial runs.
        for (i, appliance) in flex.iter().enumerate() {
            let total: Expression = windows[i]
                .iter()
                .map(|&t| Expression::from(indicators[&(i, t)]))
                .sum();
            model = model.with(constraint!(total == f64::from(appliance.duration_hours)));
        }

        if let Some(cap) = max_simultaneous {
            for t in 0..HOURS_PER_DAY {
                let active: Vec<Variable> = (0..flex.len())
                    .filter_map(|i| indicators.get(&(i, t)).copied())
                    .collect();
                if !active.is_empty() {
                    let on_at_t: Expression =
                        active.into_iter().map(Expression::from).sum();
                    model = model.with(constraint!(on_at_t <= f64::from(cap)));
                }
            }
        }

        let solution = model.solve().map_err(|e| match e {
            ResolutionError::Infeasible => OptimizeError::Infeasible,
            other => OptimizeError::Solver(other.to_string()),
        })?;

        let mut schedule = Schedule::new();
        for (i, appliance) in flex.iter().enumerate() {
            let on_hours: Vec<u8> = windows[i]
                .iter()
                .copied()
                .filter(|&t| solution.value(indicators[&(i, t)]) > ON_THRESHOLD)
                .collect();
            schedule.insert(appliance.name.clone(), on_hours);
        }
        Ok(schedule)
    }
}
