//! Heuristic solvers for the 0/1 multidimensional knapsack problem (MKP).
//!
//! Select a subset of `n` items maximising total profit while the summed
//! weights respect each of `m` capacity constraints. The crate provides:
//!
//! - **Repair**: drops the least efficient items until every capacity holds.
//! - **Local search**: flip (add one item) and swap (exchange one item)
//!   neighborhoods with first- or best-improvement acceptance.
//! - **VND**: deterministic descent alternating the two neighborhoods.
//! - **VNS**: randomized shaking on top of VND to escape local optima.
//! - **Gradient relaxation**: sigmoid relaxation of the binary variables,
//!   momentum descent on a penalised loss, freezing, rounding and repair.
//! - **Genetic Algorithm (GA)**: elitist generational GA on bit strings.
//! - **Multi-start**: repeated gradient relaxation followed by VNS.
//!
//! Every search is single-threaded and stops cooperatively at a shared
//! [`Deadline`](deadline::Deadline). Randomness comes from one caller-owned
//! generator, so a fixed seed reproduces a run exactly.
//!
//! # Quick start
//!
//! ```
//! use u_mkp::problem::Problem;
//! use u_mkp::solver::{Method, Solver, SolverConfig};
//!
//! let p = Problem::new(
//!     vec![10.0, 20.0, 15.0],
//!     vec![10.0],
//!     vec![5.0, 6.0, 5.0],
//! )
//! .unwrap();
//! let report = Solver::new(SolverConfig::new(Method::Vns).with_seed(1)).solve(&p);
//! assert_eq!(report.solution.value, 25.0);
//! ```

pub mod construct;
pub mod deadline;
pub mod eval;
pub mod ga;
pub mod gradient;
pub mod local;
pub mod multistart;
pub mod problem;
pub mod repair;
pub mod solution;
pub mod solver;
pub mod vnd;
pub mod vns;
