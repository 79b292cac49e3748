use thiserror::Error;

/// Failure modes of the schedule solver.
///
/// None of these are recovered internally; they propagate to the caller,
/// which owns any retry policy.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OptimizeError {
    /// A flexible appliance's feasible window has fewer hours than its
    /// required duration. Detected before the solver is invoked.
    #[error(
        "appliance '{name}' cannot fit its window: {window_hours} feasible hour(s) for a {duration_hours}h run"
    )]
    InvalidApplianceWindow {
        name: String,
        window_hours: usize,
        duration_hours: u8,
    },

    /// The model has no feasible solution under the combined constraints,
    /// e.g. a concurrency cap that conflicts across appliances. No single
    /// appliance can be blamed.
    #[error("no feasible schedule satisfies the duration and concurrency constraints")]
    Infeasible,

    /// The solver itself failed (numerical trouble, unbounded model,
    /// environment). Surfaced as-is, never retried here.
    #[error("solver failure: {0}")]
    Solver(String),
}
