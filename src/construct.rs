//! Starting solutions for the trajectory searches.

use crate::eval::within_capacity;
use crate::problem::Problem;
use crate::solution::Solution;

/// How a single-solution search obtains its starting point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Construction {
    /// The all-zero selection.
    Empty,
    /// [`greedy`] fill by efficiency ratio.
    #[default]
    Greedy,
}

impl Construction {
    pub fn build(&self, problem: &Problem) -> Solution {
        match self {
            Construction::Empty => Solution::empty(problem.n()),
            Construction::Greedy => greedy(problem),
        }
    }
}

/// Walks the candidate order and keeps every item that still fits.
pub fn greedy(problem: &Problem) -> Solution {
    let mut sol = Solution::empty(problem.n());
    let mut usage = vec![0.0; problem.m()];

    for &j in problem.candidate_order() {
        let weights = problem.item_weights(j);
        let fits = usage
            .iter()
            .zip(weights)
            .zip(problem.capacity())
            .all(|((&u, &w), &b)| u + w <= b);
        if fits {
            for (u, &w) in usage.iter_mut().zip(weights) {
                *u += w;
            }
            sol.x[j] = true;
            sol.value += problem.profit()[j];
        }
    }

    sol.feasible = within_capacity(problem, &usage);
    sol
}
