//! Binary-string crossover and mutation.

use rand::Rng;

/// Single-point crossover.
///
/// Draws a cut in `0..n`; `child` takes `parent1[..cut]` and
/// `parent2[cut..]`. Returns the cut.
///
/// # Panics
/// Panics if the slices differ in length or are empty.
pub fn single_point_crossover<R: Rng>(
    parent1: &[bool],
    parent2: &[bool],
    child: &mut [bool],
    rng: &mut R,
) -> usize {
    let n = parent1.len();
    assert!(n > 0, "parents must not be empty");
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert_eq!(n, child.len(), "child must match parent length");

    let cut = rng.random_range(0..n);
    child[..cut].copy_from_slice(&parent1[..cut]);
    child[cut..].copy_from_slice(&parent2[cut..]);
    cut
}

/// Bit-flip mutation: each gene flips independently with probability
/// `rate`. Returns the number of flipped genes.
pub fn bit_flip_mutation<R: Rng>(genes: &mut [bool], rate: f64, rng: &mut R) -> usize {
    let mut flipped = 0;
    for g in genes.iter_mut() {
        if rng.random_bool(rate) {
            *g = !*g;
            flipped += 1;
        }
    }
    flipped
}
