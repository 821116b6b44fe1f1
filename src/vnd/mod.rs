//! Variable Neighborhood Descent (VND).
//!
//! Deterministic descent over the flip and swap neighborhoods: flip first,
//! swap only when flip is stuck, back to flip after any improvement. The
//! result is a local optimum with respect to both neighborhoods (unless the
//! deadline cuts the descent short).
//!
//! # References
//!
//! - Hansen, P. & Mladenović, N. (2001). "Variable neighborhood search:
//!   Principles and applications", *European Journal of Operational Research* 130(3), 449-467.

mod config;
mod runner;

pub use config::VndConfig;
pub use runner::{VndResult, VndRunner};
