//! Objective evaluation, usage vectors and feasibility checks.
//!
//! The free functions are the numeric ground truth shared by every search
//! procedure. [`Evaluator`] is the strategy seam used where a full
//! re-evaluation of a solution is needed; [`EvalBackend`] selects the
//! implementation at run time.

use crate::problem::Problem;
use crate::solution::Solution;

/// Writes `usage[i] = Σ_j weight[i][j]·x[j]` for every constraint.
pub fn compute_usage(problem: &Problem, x: &[bool], usage: &mut [f64]) {
    debug_assert_eq!(x.len(), problem.n());
    debug_assert_eq!(usage.len(), problem.m());
    for (i, u) in usage.iter_mut().enumerate() {
        *u = problem
            .constraint_row(i)
            .iter()
            .zip(x)
            .filter(|(_, &xj)| xj)
            .map(|(&w, _)| w)
            .sum();
    }
}

/// Allocating variant of [`compute_usage`].
pub fn usage_of(problem: &Problem, x: &[bool]) -> Vec<f64> {
    let mut usage = vec![0.0; problem.m()];
    compute_usage(problem, x, &mut usage);
    usage
}

/// `Σ_j profit[j]·x[j]`.
pub fn objective(problem: &Problem, x: &[bool]) -> f64 {
    problem
        .profit()
        .iter()
        .zip(x)
        .filter(|(_, &xj)| xj)
        .map(|(&c, _)| c)
        .sum()
}

/// Returns `true` when no constraint usage exceeds its capacity.
#[inline]
pub fn within_capacity(problem: &Problem, usage: &[f64]) -> bool {
    usage
        .iter()
        .zip(problem.capacity())
        .all(|(&u, &b)| u <= b)
}

/// Total capacity overflow `Σ_i max(0, usage[i] − capacity[i])`.
pub fn overflow(problem: &Problem, usage: &[f64]) -> f64 {
    usage
        .iter()
        .zip(problem.capacity())
        .map(|(&u, &b)| (u - b).max(0.0))
        .sum()
}

/// Checks every constraint row against the selection, stopping at the first
/// violated one.
pub fn check_feasibility(problem: &Problem, x: &[bool]) -> bool {
    (0..problem.m()).all(|i| {
        let used: f64 = problem
            .constraint_row(i)
            .iter()
            .zip(x)
            .filter(|(_, &xj)| xj)
            .map(|(&w, _)| w)
            .sum();
        used <= problem.capacity()[i]
    })
}

/// Strategy for full evaluation of a solution.
///
/// Implementations must set `value` and `feasible` exactly as the CPU path
/// does; they only differ in where the arithmetic happens.
pub trait Evaluator {
    fn evaluate(&self, problem: &Problem, solution: &mut Solution);
}

/// Straightforward evaluation on the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct CpuEvaluator;

impl Evaluator for CpuEvaluator {
    #[inline]
    fn evaluate(&self, problem: &Problem, solution: &mut Solution) {
        solution.value = objective(problem, &solution.x);
        solution.feasible = check_feasibility(problem, &solution.x);
    }
}

/// Run-time choice of evaluation backend.
///
/// No device kernel ships with this crate, so `Gpu` runs the CPU path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EvalBackend {
    #[default]
    Cpu,
    Gpu,
}

impl EvalBackend {
    /// Whether a device implementation is available for this backend.
    pub fn is_accelerated(&self) -> bool {
        false
    }
}

impl Evaluator for EvalBackend {
    fn evaluate(&self, problem: &Problem, solution: &mut Solution) {
        match self {
            EvalBackend::Cpu => CpuEvaluator.evaluate(problem, solution),
            EvalBackend::Gpu => {
                tracing::trace!("gpu evaluation unavailable, using cpu path");
                CpuEvaluator.evaluate(problem, solution)
            }
        }
    }
}
