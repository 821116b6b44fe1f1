//! Multi-start driver combining gradient relaxation and VNS.
//!
//! Every restart draws a fresh random relaxation, rounds and repairs it,
//! improves the result with [VNS](crate::vns), and competes with the
//! incumbent (feasible first, then value). Restarts share one generator
//! and one deadline.

mod config;
mod runner;

pub use config::MultiStartConfig;
pub use runner::{MultiStartResult, MultiStartRunner};
