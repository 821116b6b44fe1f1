//! Top-level entry point: pick a method, give it a budget, get a solution.

mod config;
mod method;
mod runner;

pub use config::SolverConfig;
pub use method::{Method, ParseMethodError, ParseVerbosityError, Verbosity};
pub use runner::{SolveReport, Solver};
