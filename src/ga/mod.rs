//! Genetic Algorithm over binary selection vectors.
//!
//! Generational GA with elitism: tournament parents, single-point
//! crossover, bit-flip mutation, and repair of every child before it is
//! scored. Infeasible members (only possible in the random initial
//! population) are scored by an [`InfeasiblePolicy`].
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, rates, presets)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final result with the fitness history
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Chu & Beasley (1998), "A Genetic Algorithm for the Multidimensional
//!   Knapsack Problem", *Journal of Heuristics* 4, 63-86

mod config;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
pub use selection::{tournament_pair, MIN_TOURNAMENT_SIZE};
pub use types::{InfeasiblePolicy, Individual};
