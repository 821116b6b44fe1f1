//! Method dispatch.

use super::config::SolverConfig;
use super::method::Method;
use crate::deadline::Deadline;
use crate::eval::EvalBackend;
use crate::ga::GaRunner;
use crate::gradient::GradientRunner;
use crate::local::{flip, swap};
use crate::multistart::MultiStartRunner;
use crate::problem::Problem;
use crate::solution::Solution;
use crate::vnd::VndRunner;
use crate::vns::VnsRunner;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

/// Outcome of [`Solver::solve`].
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub solution: Solution,
    pub method: Method,
    pub elapsed: Duration,
}

/// Runs the configured method with one generator and one deadline.
///
/// # Examples
///
/// ```
/// use u_mkp::problem::Problem;
/// use u_mkp::solver::{Method, Solver, SolverConfig};
///
/// let p = Problem::new(vec![10.0, 20.0, 15.0], vec![10.0], vec![5.0, 6.0, 5.0]).unwrap();
/// let report = Solver::new(SolverConfig::new(Method::Vnd)).solve(&p);
/// assert!(report.solution.feasible);
/// assert_eq!(report.method, Method::Vnd);
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn solve(&self, problem: &Problem) -> SolveReport {
        let config = &self.config;
        let started = Instant::now();
        let deadline = match config.time_limit {
            Some(limit) => Deadline::after_from(started, limit),
            None => Deadline::none(),
        };
        let mut rng = StdRng::seed_from_u64(config.seed);
        let backend = config.backend;
        if backend == EvalBackend::Gpu && !backend.is_accelerated() {
            tracing::debug!("no device evaluator available, gpu backend uses the cpu path");
        }

        if config.method.is_stochastic() {
            tracing::info!(
                method = %config.method,
                n = problem.n(),
                m = problem.m(),
                seed = config.seed,
                "solving"
            );
        } else {
            tracing::info!(method = %config.method, n = problem.n(), m = problem.m(), "solving");
        }

        let solution = match config.method {
            Method::LsFlip => {
                let mut sol = config.construction.build(problem);
                flip(problem, &mut sol, &config.local);
                sol
            }
            Method::LsSwap => {
                let mut sol = config.construction.build(problem);
                swap(problem, &mut sol, &config.local);
                sol
            }
            Method::Vnd => {
                let mut sol = config.construction.build(problem);
                VndRunner::run(problem, &mut sol, &config.vnd, deadline);
                sol
            }
            Method::Vns => {
                let mut sol = config.construction.build(problem);
                VnsRunner::run(problem, &mut sol, &config.vns, deadline, &mut rng);
                sol
            }
            Method::Gd => {
                GradientRunner::run(problem, &backend, &config.gradient, deadline, &mut rng)
                    .solution
            }
            Method::Ga => GaRunner::run(problem, &backend, &config.ga, deadline, &mut rng).best,
            Method::MultiGdVns => {
                MultiStartRunner::run(problem, &backend, &config.multistart(), deadline, &mut rng)
                    .best
            }
        };

        let elapsed = started.elapsed();
        tracing::info!(
            value = solution.value,
            selected = solution.count_selected(),
            feasible = solution.feasible,
            elapsed_ms = elapsed.as_millis() as u64,
            "solved"
        );

        SolveReport {
            solution,
            method: config.method,
            elapsed,
        }
    }
}
