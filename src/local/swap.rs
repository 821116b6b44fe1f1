//! Swap neighborhood: exchange a selected item for an unselected candidate.

use super::config::{LocalSearchConfig, LsMode};
use super::workspace::Workspace;
use super::LocalSearchStats;
use crate::eval::check_feasibility;
use crate::problem::Problem;
use crate::solution::Solution;

/// Hill-climbs by replacing one selected item `i` with an unselected item
/// `j` from the top `k` candidates.
///
/// Only pairs with `profit[j] > profit[i]` are tried. Acceptance follows the
/// same post-repair rule as [`flip`](super::flip). Unlike flips, a swap can
/// lower usage, so it finds moves that pure additions cannot.
pub fn swap(problem: &Problem, solution: &mut Solution, config: &LocalSearchConfig) -> LocalSearchStats {
    let limit = config.k.min(problem.n());
    let candidates = &problem.candidate_order()[..limit];
    let profit = problem.profit();
    let start_value = solution.value;

    let mut ws = Workspace::new(problem, solution);
    let mut stats = LocalSearchStats::default();

    loop {
        stats.scans += 1;
        ws.clear_best();
        ws.refresh_selected(solution);
        let mut accepted = false;

        'outer: for s in 0..ws.selected.len() {
            let i = ws.selected[s];
            for &j in candidates {
                if solution.x[j] || profit[j] - profit[i] <= 0.0 {
                    continue;
                }
                ws.begin_trial(solution);
                ws.trial_remove(problem, i);
                ws.trial_add(problem, j);
                if ws.settle_trial(problem) <= solution.value {
                    continue;
                }
                match config.mode {
                    LsMode::FirstImprovement => {
                        ws.commit_trial(solution);
                        accepted = true;
                        break 'outer;
                    }
                    LsMode::BestImprovement => ws.offer_best(),
                }
            }
        }

        if ws.has_best() {
            ws.commit_best(solution);
            accepted = true;
        }
        if !accepted {
            break;
        }
        stats.moves += 1;
    }

    solution.feasible = check_feasibility(problem, &solution.x);
    stats.gain = solution.value - start_value;
    tracing::trace!(moves = stats.moves, value = solution.value, "swap local search done");
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::objective;
    use crate::local::flip;
    use crate::problem::{fixtures, Problem};

    /// Item 0 is selected and efficient; item 1 is worth more but less
    /// efficient, so a flip that adds it is undone by repair.
    fn blocked_pair() -> Problem {
        Problem::new(vec![5.0, 9.0], vec![6.0], vec![2.0, 6.0]).unwrap()
    }

    #[test]
    fn test_swap_finds_move_flip_misses() {
        let p = blocked_pair();
        let mut by_flip = Solution::evaluated(&p, vec![true, false]);
        let flip_stats = flip(&p, &mut by_flip, &LocalSearchConfig::default());
        assert_eq!(flip_stats.moves, 0);
        assert_eq!(by_flip.value, 5.0);

        let mut sol = Solution::evaluated(&p, vec![true, false]);
        let stats = swap(&p, &mut sol, &LocalSearchConfig::default());
        assert_eq!(stats.moves, 1);
        assert_eq!(sol.x, vec![false, true]);
        assert_eq!(sol.value, 9.0);
        assert!(sol.feasible);
    }

    #[test]
    fn test_no_move_when_already_best() {
        let p = blocked_pair();
        let mut sol = Solution::evaluated(&p, vec![false, true]);
        let stats = swap(&p, &mut sol, &LocalSearchConfig::default());
        assert_eq!(stats.moves, 0);
        assert_eq!(stats.gain, 0.0);
        assert_eq!(sol.value, 9.0);
    }

    /// Four constraints of capacity 10; items 0 and 1 start selected.
    /// Item 2 conflicts with 0 (row 2) and 3 (row 1); item 3 conflicts
    /// with 1 (row 0). Swapping 0 for 2 comes first in scan order but
    /// leaves no way to reach 3, which pairs only with 0.
    fn trap() -> Problem {
        Problem::new(
            vec![1.0, 2.0, 5.0, 7.0],
            vec![10.0; 4],
            vec![
                0.0, 6.0, 0.0, 6.0, //
                0.0, 0.0, 6.0, 6.0, //
                6.0, 0.0, 6.0, 0.0, //
                0.0, 0.0, 0.0, 8.0,
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_first_improvement_takes_earliest_swap() {
        let p = trap();
        assert_eq!(p.candidate_order(), &[2, 3, 1, 0]);
        let mut sol = Solution::evaluated(&p, vec![true, true, false, false]);
        let config = LocalSearchConfig::default().with_mode(LsMode::FirstImprovement);
        let stats = swap(&p, &mut sol, &config);
        assert_eq!(sol.x, vec![false, true, true, false]);
        assert_eq!(sol.value, 7.0);
        assert_eq!(stats.moves, 1);
        assert!(sol.feasible);
    }

    #[test]
    fn test_best_improvement_takes_largest_swap() {
        let p = trap();
        let mut sol = Solution::evaluated(&p, vec![true, true, false, false]);
        let config = LocalSearchConfig::default().with_mode(LsMode::BestImprovement);
        let stats = swap(&p, &mut sol, &config);
        assert_eq!(sol.x, vec![true, false, false, true]);
        assert_eq!(sol.value, 8.0);
        assert_eq!(stats.moves, 1);
        assert!(sol.feasible);
        assert_eq!(sol.value, objective(&p, &sol.x));
    }

    #[test]
    fn test_modes_never_worsen_random() {
        for seed in 0..15 {
            let p = fixtures::random(25, 3, 0.3, seed);
            for mode in [LsMode::FirstImprovement, LsMode::BestImprovement] {
                let mut sol = crate::construct::greedy(&p);
                let before = sol.value;
                swap(&p, &mut sol, &LocalSearchConfig::default().with_mode(mode));
                assert!(sol.value >= before);
                assert!(sol.feasible);
                assert_eq!(sol.value, objective(&p, &sol.x));
            }
        }
    }
}
