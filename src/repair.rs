//! Greedy feasibility repair.
//!
//! While some constraint is over capacity, the selected item with the lowest
//! efficiency ratio is dropped. The scan keeps the first minimum, so ties go
//! to the lowest index. Every procedure that can leave a solution over
//! capacity (flip, swap, shake, rounding, crossover) calls this.

use crate::eval::{compute_usage, within_capacity};
use crate::problem::Problem;
use crate::solution::Solution;

/// Removes low-ratio items until `usage` fits the capacities.
///
/// `usage` must be consistent with `solution.x` on entry and is kept
/// consistent on exit; `solution.value` is decremented for every removed
/// item and `solution.feasible` is refreshed. Returns the number of items
/// removed, which never exceeds the number of items selected on entry.
///
/// An overflow seen on the incrementally maintained `usage` is confirmed
/// against sums recomputed from `solution.x` before any item is dropped, so
/// rounding drift neither removes an item that fits nor leaves the empty
/// selection marked infeasible. With non-negative weights the result is
/// therefore always feasible.
pub fn repair(problem: &Problem, solution: &mut Solution, usage: &mut [f64]) -> usize {
    let ratio = problem.ratio();
    let mut removed = 0;

    while !within_capacity(problem, usage) {
        compute_usage(problem, &solution.x, usage);
        if within_capacity(problem, usage) {
            break;
        }

        let mut worst: Option<usize> = None;
        for j in solution.selected() {
            match worst {
                Some(w) if ratio[j] >= ratio[w] => {}
                _ => worst = Some(j),
            }
        }

        let Some(j) = worst else {
            break;
        };

        solution.x[j] = false;
        solution.value -= problem.profit()[j];
        for (u, &w) in usage.iter_mut().zip(problem.item_weights(j)) {
            *u -= w;
        }
        removed += 1;
    }

    solution.feasible = within_capacity(problem, usage);
    if removed > 0 {
        tracing::trace!(removed, value = solution.value, "repaired");
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::{objective, usage_of};
    use crate::problem::fixtures;
    use proptest::prelude::*;

    #[test]
    fn test_removes_lowest_ratio_first() {
        let p = fixtures::three_items();
        let mut sol = Solution::evaluated(&p, vec![true, true, true]);
        let mut usage = usage_of(&p, &sol.x);
        assert_eq!(usage, vec![16.0]);

        let removed = repair(&p, &mut sol, &mut usage);

        // ratio order: item 0 (2.0) < item 2 (3.0) < item 1 (3.33)
        assert_eq!(removed, 2);
        assert_eq!(sol.x, vec![false, true, false]);
        assert_eq!(sol.value, 20.0);
        assert_eq!(usage, vec![6.0]);
        assert!(sol.feasible);
    }

    #[test]
    fn test_single_removal_when_enough() {
        let p = fixtures::three_items();
        let mut sol = Solution::evaluated(&p, vec![true, true, false]);
        let mut usage = usage_of(&p, &sol.x);
        assert_eq!(repair(&p, &mut sol, &mut usage), 1);
        assert_eq!(sol.x, vec![false, true, false]);
    }

    #[test]
    fn test_feasible_input_untouched() {
        let p = fixtures::three_items();
        let mut sol = Solution::evaluated(&p, vec![false, true, false]);
        let mut usage = usage_of(&p, &sol.x);
        assert_eq!(repair(&p, &mut sol, &mut usage), 0);
        assert_eq!(sol.value, 20.0);
        assert!(sol.feasible);
    }

    #[test]
    fn test_equal_ratios_remove_lowest_index() {
        let p = crate::problem::Problem::new(vec![3.0, 3.0], vec![1.0], vec![1.0, 1.0]).unwrap();
        let mut sol = Solution::evaluated(&p, vec![true, true]);
        let mut usage = usage_of(&p, &sol.x);
        repair(&p, &mut sol, &mut usage);
        assert_eq!(sol.x, vec![false, true]);
    }

    #[test]
    fn test_unfittable_items_all_removed() {
        let p = crate::problem::Problem::new(vec![5.0, 6.0], vec![1.0], vec![2.0, 3.0]).unwrap();
        let mut sol = Solution::evaluated(&p, vec![true, true]);
        let mut usage = usage_of(&p, &sol.x);
        assert_eq!(repair(&p, &mut sol, &mut usage), 2);
        assert_eq!(sol.count_selected(), 0);
        assert_eq!(sol.value, 0.0);
        assert!(sol.feasible);
    }

    #[test]
    fn test_rounding_drift_does_not_strand_empty_selection() {
        // 0.1 + 0.2 - 0.2 - 0.1 leaves a positive residue in f64
        let p = crate::problem::Problem::new(vec![1.0, 1.0], vec![0.0], vec![0.1, 0.2]).unwrap();
        let mut sol = Solution::evaluated(&p, vec![true, true]);
        let mut usage = usage_of(&p, &sol.x);
        assert_eq!(repair(&p, &mut sol, &mut usage), 2);
        assert_eq!(sol.x, vec![false, false]);
        assert_eq!(usage, vec![0.0]);
        assert!(sol.feasible);
        assert_eq!(sol.feasible, crate::eval::check_feasibility(&p, &sol.x));
    }

    #[test]
    fn test_rounding_drift_does_not_over_repair() {
        // after dropping item 1 the running sum reads 0.10000000000000003
        let p = crate::problem::Problem::new(vec![1.0, 0.1], vec![0.1], vec![0.1, 0.2]).unwrap();
        let mut sol = Solution::evaluated(&p, vec![true, true]);
        let mut usage = usage_of(&p, &sol.x);
        assert_eq!(repair(&p, &mut sol, &mut usage), 1);
        assert_eq!(sol.x, vec![true, false]);
        assert_eq!(sol.value, 1.0);
        assert!(sol.feasible);
    }

    proptest! {
        #[test]
        fn prop_repair_feasible_and_bounded(
            bits in proptest::collection::vec(any::<bool>(), 25),
            seed in 0u64..1000,
        ) {
            let p = fixtures::random(25, 4, 0.3, seed);
            let selected_before = bits.iter().filter(|&&b| b).count();
            let mut sol = Solution::evaluated(&p, bits.clone());
            let mut usage = usage_of(&p, &sol.x);

            let removed = repair(&p, &mut sol, &mut usage);

            prop_assert!(removed <= selected_before);
            prop_assert!(sol.feasible);
            prop_assert!(within_capacity(&p, &usage));
            prop_assert_eq!(usage, usage_of(&p, &sol.x));
            prop_assert_eq!(sol.value, objective(&p, &sol.x));
            // Only removals happen.
            for j in 0..25 {
                prop_assert!(!sol.x[j] || bits[j]);
            }
        }
    }
}
