//! Random perturbation of the incumbent.

use crate::eval::{compute_usage, within_capacity};
use crate::problem::Problem;
use crate::repair::repair;
use crate::solution::Solution;
use rand::Rng;

/// Reusable buffers for shaking; one per VNS run.
#[derive(Debug, Clone)]
pub struct Shaker {
    indices: Vec<usize>,
    usage: Vec<f64>,
}

impl Shaker {
    pub fn new(problem: &Problem) -> Self {
        Self {
            indices: (0..problem.n()).collect(),
            usage: vec![0.0; problem.m()],
        }
    }

    /// Copies `incumbent` into `candidate` and toggles `min(k, n)` distinct,
    /// uniformly drawn items, then repairs the result if it overflows.
    ///
    /// Targets come from a partial Fisher–Yates pass over the index buffer,
    /// so no item is drawn twice. Returns the number of toggled items.
    pub fn shake<R: Rng>(
        &mut self,
        problem: &Problem,
        incumbent: &Solution,
        candidate: &mut Solution,
        k: usize,
        rng: &mut R,
    ) -> usize {
        candidate.clone_from(incumbent);
        let n = problem.n();
        let flips = k.min(n);

        for i in 0..flips {
            let j = rng.random_range(i..n);
            self.indices.swap(i, j);
            candidate.toggle(problem, self.indices[i]);
        }

        compute_usage(problem, &candidate.x, &mut self.usage);
        if within_capacity(problem, &self.usage) {
            candidate.feasible = true;
        } else {
            repair(problem, candidate, &mut self.usage);
        }
        flips
    }
}
