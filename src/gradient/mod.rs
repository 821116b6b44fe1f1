//! Continuous relaxation solved by gradient descent.
//!
//! Binary decisions become sigmoids of free parameters, the capacity
//! constraints become a differentiable penalty, and momentum descent pulls
//! the relaxed point toward a good, nearly feasible selection. Freezing
//! gradually pins confident variables so the relaxation anneals into a
//! binary vector, which is then rounded and repaired.

mod config;
mod runner;

pub use config::{Freezing, GradientConfig, Penalty};
pub use runner::{GradientResult, GradientRunner};
