//! Population members and the fitness rule for infeasible ones.

use crate::eval::{compute_usage, overflow};
use crate::problem::Problem;
use crate::solution::Solution;

/// How infeasible individuals are scored.
///
/// Children are repaired before scoring, so only members of the random
/// initial population can be infeasible.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InfeasiblePolicy {
    /// Fitness 0, regardless of how far the capacities are exceeded.
    #[default]
    Zero,
    /// `value - factor · Σ max(0, usage_i - capacity_i)`.
    Proportional { factor: f64 },
}

impl InfeasiblePolicy {
    /// Scores `solution`; `usage` is scratch space of length `m`.
    pub fn fitness(&self, problem: &Problem, solution: &Solution, usage: &mut [f64]) -> f64 {
        if solution.feasible {
            return solution.value;
        }
        match *self {
            InfeasiblePolicy::Zero => 0.0,
            InfeasiblePolicy::Proportional { factor } => {
                compute_usage(problem, &solution.x, usage);
                solution.value - factor * overflow(problem, usage)
            }
        }
    }
}

/// A scored member of the GA population. Higher fitness is better.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    pub solution: Solution,
    pub fitness: f64,
}

impl Individual {
    /// Wraps an evaluated solution and scores it under `policy`.
    pub fn scored(
        problem: &Problem,
        solution: Solution,
        policy: InfeasiblePolicy,
        usage: &mut [f64],
    ) -> Self {
        let fitness = policy.fitness(problem, &solution, usage);
        Self { solution, fitness }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::fixtures;

    #[test]
    fn test_feasible_fitness_is_value() {
        let p = fixtures::three_items();
        let sol = Solution::evaluated(&p, vec![true, false, true]);
        let mut usage = vec![0.0; 1];
        let ind = Individual::scored(&p, sol, InfeasiblePolicy::Zero, &mut usage);
        assert_eq!(ind.fitness, 25.0);
    }

    #[test]
    fn test_infeasible_policies() {
        let p = fixtures::three_items();
        let sol = Solution::evaluated(&p, vec![true, true, true]);
        let mut usage = vec![0.0; 1];
        assert_eq!(InfeasiblePolicy::Zero.fitness(&p, &sol, &mut usage), 0.0);
        // value 45, overflow 16 - 10 = 6
        let policy = InfeasiblePolicy::Proportional { factor: 2.0 };
        assert_eq!(policy.fitness(&p, &sol, &mut usage), 33.0);
    }
}
