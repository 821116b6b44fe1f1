//! Problem model: the immutable instance every search procedure reads.
//!
//! - [`Problem`]: profits, capacities, weight matrix and derived indices
//! - [`ProblemLoader`]: reads the plain-text instance format

mod err;
mod loader;
mod model;

pub use err::{LoadError, ProblemError};
pub use loader::ProblemLoader;
pub use model::Problem;

#[cfg(test)]
pub(crate) use model::fixtures;
