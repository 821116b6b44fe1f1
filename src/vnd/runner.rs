//! Variable Neighborhood Descent execution engine.
//!
//! # Algorithm
//!
//! 1. Copy the incumbent, run flip local search to convergence
//! 2. If the copy improved, commit it and start the next round (back to flip)
//! 3. Otherwise copy the incumbent again and run swap local search
//! 4. If swap improved, commit it; otherwise the round is non-improving
//! 5. Stop after `max_no_improvement` consecutive non-improving rounds or
//!    when the deadline passes
//!
//! Every committed move is strictly improving, so the result is never worse
//! than the input.

use super::config::VndConfig;
use crate::deadline::Deadline;
use crate::local::Neighborhood;
use crate::problem::Problem;
use crate::solution::Solution;

/// Result of a VND run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VndResult {
    /// Descent rounds executed.
    pub rounds: usize,
    /// Rounds that committed an improvement.
    pub improvements: usize,
    /// Improvements that came from the flip neighborhood.
    pub flip_improvements: usize,
    /// Improvements that came from the swap neighborhood.
    pub swap_improvements: usize,
    /// Whether the deadline stopped the descent.
    pub timed_out: bool,
}

/// Variable Neighborhood Descent runner.
pub struct VndRunner;

impl VndRunner {
    /// Improves `solution` in place.
    ///
    /// `solution` must be evaluated on entry.
    pub fn run(
        problem: &Problem,
        solution: &mut Solution,
        config: &VndConfig,
        deadline: Deadline,
    ) -> VndResult {
        let mut working = solution.clone();
        let mut result = VndResult::default();
        let mut no_improvement = 0;

        while no_improvement < config.max_no_improvement {
            if deadline.is_expired() {
                result.timed_out = true;
                break;
            }
            result.rounds += 1;

            let mut improved_by = None;
            for hood in [Neighborhood::Flip, Neighborhood::Swap] {
                working.clone_from(solution);
                hood.run(problem, &mut working, &config.local);
                if working.value > solution.value {
                    std::mem::swap(solution, &mut working);
                    improved_by = Some(hood);
                    break;
                }
            }

            match improved_by {
                Some(hood) => {
                    no_improvement = 0;
                    result.improvements += 1;
                    match hood {
                        Neighborhood::Flip => result.flip_improvements += 1,
                        Neighborhood::Swap => result.swap_improvements += 1,
                    }
                    tracing::trace!(?hood, value = solution.value, "vnd improvement");
                }
                None => no_improvement += 1,
            }
        }

        tracing::debug!(
            rounds = result.rounds,
            improvements = result.improvements,
            value = solution.value,
            "vnd finished"
        );
        result
    }
}
