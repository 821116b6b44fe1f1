//! Parent selection.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::Individual;
use rand::Rng;

/// Smallest tournament that can yield two distinct ranks.
pub const MIN_TOURNAMENT_SIZE: usize = 2;

/// Tournament selection of a parent pair.
///
/// Samples `max(size, 2)` indices uniformly with replacement and returns the
/// best and second-best sampled individuals by fitness (higher is better,
/// earlier sample wins ties). Index 0 stands in for a rank that was never
/// filled.
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament_pair<R: Rng>(
    population: &[Individual],
    size: usize,
    rng: &mut R,
) -> (usize, usize) {
    assert!(!population.is_empty(), "cannot select from empty population");
    let n = population.len();

    let mut best: Option<usize> = None;
    let mut second: Option<usize> = None;
    let mut best_fitness = f64::NEG_INFINITY;
    let mut second_fitness = f64::NEG_INFINITY;

    for _ in 0..size.max(MIN_TOURNAMENT_SIZE) {
        let idx = rng.random_range(0..n);
        let f = population[idx].fitness;
        if f > best_fitness {
            second = best;
            second_fitness = best_fitness;
            best = Some(idx);
            best_fitness = f;
        } else if f > second_fitness {
            second = Some(idx);
            second_fitness = f;
        }
    }

    (best.unwrap_or(0), second.unwrap_or(0))
}
