//! Restart loop: gradient relaxation, then VNS, keep the best.

use super::config::MultiStartConfig;
use crate::deadline::Deadline;
use crate::eval::Evaluator;
use crate::gradient::GradientRunner;
use crate::problem::Problem;
use crate::solution::Solution;
use crate::vns::VnsRunner;
use rand::Rng;

/// Result of a multi-start run.
#[derive(Debug, Clone)]
pub struct MultiStartResult {
    /// Best solution over all restarts; the empty selection if none ran.
    pub best: Solution,
    /// Restarts completed.
    pub starts: usize,
    /// Restart that produced `best`.
    pub best_start: Option<usize>,
    /// Final value of each restart.
    pub start_values: Vec<f64>,
    /// Whether the deadline ended the sequence.
    pub timed_out: bool,
}

/// Multi-start driver.
pub struct MultiStartRunner;

impl MultiStartRunner {
    /// Runs up to `config.starts` restarts from independent random
    /// relaxations, all drawing from `rng`.
    pub fn run<E: Evaluator, R: Rng>(
        problem: &Problem,
        evaluator: &E,
        config: &MultiStartConfig,
        deadline: Deadline,
        rng: &mut R,
    ) -> MultiStartResult {
        let mut result = MultiStartResult {
            best: Solution::empty(problem.n()),
            starts: 0,
            best_start: None,
            start_values: Vec::with_capacity(config.starts),
            timed_out: false,
        };

        for start in 0..config.starts {
            if deadline.is_expired() {
                result.timed_out = true;
                break;
            }

            let relaxed = GradientRunner::run(problem, evaluator, &config.gradient, deadline, rng);
            let mut candidate = relaxed.solution;
            VnsRunner::run(problem, &mut candidate, &config.vns, deadline, rng);

            result.starts += 1;
            result.start_values.push(candidate.value);
            if result.best_start.is_none() || candidate.is_better_than(&result.best) {
                tracing::info!(start, value = candidate.value, "multi-start incumbent");
                result.best = candidate;
                result.best_start = Some(start);
            }
        }

        tracing::debug!(
            starts = result.starts,
            value = result.best.value,
            timed_out = result.timed_out,
            "multi-start finished"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::{check_feasibility, CpuEvaluator};
    use crate::problem::fixtures;
    use crate::vns::VnsConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    fn quick() -> MultiStartConfig {
        MultiStartConfig::default()
            .with_starts(3)
            .with_vns(VnsConfig::default().with_max_no_improvement(3))
    }

    #[test]
    fn test_keeps_best_start() {
        let p = fixtures::random(25, 3, 0.4, 1);
        let mut rng = StdRng::seed_from_u64(1);
        let result = MultiStartRunner::run(&p, &CpuEvaluator, &quick(), Deadline::none(), &mut rng);

        assert_eq!(result.starts, 3);
        assert_eq!(result.start_values.len(), 3);
        let max = result.start_values.iter().cloned().fold(f64::MIN, f64::max);
        assert_eq!(result.best.value, max);
        assert!(result.best.feasible);
        assert!(check_feasibility(&p, &result.best.x));
    }

    #[test]
    fn test_expired_deadline_returns_empty() {
        let p = fixtures::random(10, 2, 0.5, 2);
        let mut rng = StdRng::seed_from_u64(2);
        let result = MultiStartRunner::run(
            &p,
            &CpuEvaluator,
            &quick(),
            Deadline::after(Duration::ZERO),
            &mut rng,
        );
        assert!(result.timed_out);
        assert_eq!(result.starts, 0);
        assert_eq!(result.best_start, None);
        assert_eq!(result.best, Solution::empty(p.n()));
    }

    #[test]
    fn test_reaches_three_item_optimum() {
        let p = fixtures::three_items();
        let mut rng = StdRng::seed_from_u64(3);
        let result = MultiStartRunner::run(&p, &CpuEvaluator, &quick(), Deadline::none(), &mut rng);
        assert_eq!(result.best.value, 25.0);
    }
}
