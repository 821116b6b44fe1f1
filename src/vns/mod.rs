//! Variable Neighborhood Search (VNS).
//!
//! Escapes the local optima of [VND](crate::vnd) by shaking: the incumbent
//! is perturbed by toggling `k` random items, the perturbed copy is
//! repaired and descended, and the result replaces the incumbent only when
//! it is better. Failed attempts widen the shake radius; success resets it.
//!
//! # References
//!
//! - Mladenović, N. & Hansen, P. (1997). "Variable neighborhood search",
//!   *Computers & Operations Research* 24(11), 1097-1100.
//! - Hansen, P. & Mladenović, N. (2001). "Variable neighborhood search:
//!   Principles and applications", *European Journal of Operational Research* 130(3), 449-467.

mod config;
mod runner;
mod shake;

pub use config::VnsConfig;
pub use runner::{VnsResult, VnsRunner};
pub use shake::Shaker;
