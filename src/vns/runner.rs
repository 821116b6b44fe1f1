//! Variable Neighborhood Search execution engine.
//!
//! # Algorithm (Basic VNS)
//!
//! 1. Set k = 0
//! 2. While k ≤ k_max:
//!    a. **Shaking**: toggle k random items of the incumbent, repair
//!    b. **Local search**: short VND on the shaken copy
//!    c. **Move or not**: if the copy beats the incumbent, accept it and
//!    set k = 0; otherwise k = k + 1
//! 3. One such sweep is an outer pass; stop after `max_no_improvement`
//!    consecutive passes without an acceptance, after `max_iterations`
//!    passes, or when the deadline passes
//!
//! # Reference
//!
//! Mladenović, N. & Hansen, P. (1997). "Variable neighborhood search",
//! *Computers & Operations Research* 24(11), 1097-1100.

use super::config::VnsConfig;
use super::shake::Shaker;
use crate::deadline::Deadline;
use crate::problem::Problem;
use crate::solution::Solution;
use crate::vnd::VndRunner;
use rand::Rng;

/// Result of a VNS run.
#[derive(Debug, Clone, Default)]
pub struct VnsResult {
    /// Shake-and-descend steps executed.
    pub iterations: usize,
    /// Outer passes executed.
    pub passes: usize,
    /// Outer pass in which the final incumbent was accepted.
    pub best_iteration: usize,
    /// Incumbent value at the end of each outer pass.
    pub value_history: Vec<f64>,
    /// Whether the deadline stopped the search.
    pub timed_out: bool,
}

/// Variable Neighborhood Search runner.
pub struct VnsRunner;

impl VnsRunner {
    /// Improves `solution` in place.
    ///
    /// `solution` must be evaluated on entry; it is replaced only by
    /// candidates that are [better](Solution::is_better_than).
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use u_mkp::deadline::Deadline;
    /// use u_mkp::problem::Problem;
    /// use u_mkp::solution::Solution;
    /// use u_mkp::vns::{VnsConfig, VnsRunner};
    ///
    /// let p = Problem::new(vec![10.0, 20.0, 15.0], vec![10.0], vec![5.0, 6.0, 5.0]).unwrap();
    /// let mut sol = Solution::empty(p.n());
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    /// VnsRunner::run(&p, &mut sol, &VnsConfig::default(), Deadline::none(), &mut rng);
    /// assert_eq!(sol.value, 25.0);
    /// ```
    pub fn run<R: Rng>(
        problem: &Problem,
        solution: &mut Solution,
        config: &VnsConfig,
        deadline: Deadline,
        rng: &mut R,
    ) -> VnsResult {
        let mut shaker = Shaker::new(problem);
        let mut candidate = solution.clone();
        let mut result = VnsResult {
            value_history: Vec::with_capacity(config.max_no_improvement),
            ..VnsResult::default()
        };
        let mut no_improve_count = 0;

        'search: for outer in 0..config.max_iterations {
            if no_improve_count >= config.max_no_improvement {
                break;
            }
            let mut accepted = false;
            let mut k = 0;

            while k <= config.k_max {
                if deadline.is_expired() {
                    result.timed_out = true;
                    result.passes = outer + 1;
                    result.value_history.push(solution.value);
                    break 'search;
                }

                shaker.shake(problem, solution, &mut candidate, k, rng);
                VndRunner::run(problem, &mut candidate, &config.inner, deadline);
                result.iterations += 1;

                if candidate.is_better_than(solution) {
                    std::mem::swap(solution, &mut candidate);
                    tracing::trace!(k, value = solution.value, "vns accepted");
                    result.best_iteration = outer;
                    accepted = true;
                    no_improve_count = 0;
                    k = 0;
                } else {
                    k += 1;
                }
            }

            result.passes = outer + 1;
            result.value_history.push(solution.value);
            if !accepted {
                no_improve_count += 1;
            }
        }

        tracing::debug!(
            passes = result.passes,
            iterations = result.iterations,
            value = solution.value,
            timed_out = result.timed_out,
            "vns finished"
        );
        result
    }
}
