//! Single-neighborhood hill climbers.
//!
//! Both neighborhoods are bounded by the first `k` entries of the problem's
//! candidate order and share the same acceptance rule: a move is applied to
//! a private trial copy, repaired if it overflows, and committed only when
//! the repaired value strictly beats the incumbent.
//!
//! - [`flip`]: add one item (0 → 1)
//! - [`swap`]: exchange one selected item for one unselected item

mod config;
mod flip;
mod swap;
mod workspace;

pub use config::{LocalSearchConfig, LsMode};
pub use flip::flip;
pub use swap::swap;

use crate::problem::Problem;
use crate::solution::Solution;

/// Counters from one local search call.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocalSearchStats {
    /// Accepted moves.
    pub moves: usize,
    /// Full neighborhood scans, including the final one that found nothing.
    pub scans: usize,
    /// Objective gain over the starting solution.
    pub gain: f64,
}

impl LocalSearchStats {
    pub fn improved(&self) -> bool {
        self.moves > 0
    }
}

/// The neighborhoods VND alternates between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighborhood {
    Flip,
    Swap,
}

impl Neighborhood {
    pub fn run(
        &self,
        problem: &Problem,
        solution: &mut Solution,
        config: &LocalSearchConfig,
    ) -> LocalSearchStats {
        match self {
            Neighborhood::Flip => flip(problem, solution, config),
            Neighborhood::Swap => swap(problem, solution, config),
        }
    }
}
