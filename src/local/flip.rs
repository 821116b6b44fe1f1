//! Flip neighborhood: add one unselected item (0 → 1).

use super::config::{LocalSearchConfig, LsMode};
use super::workspace::Workspace;
use super::LocalSearchStats;
use crate::eval::check_feasibility;
use crate::problem::Problem;
use crate::solution::Solution;

/// Hill-climbs with 0 → 1 flips over the top `k` candidates.
///
/// A flip that overflows a constraint is repaired before it is judged; it
/// is accepted only if the repaired value strictly exceeds the incumbent's,
/// since repair can give back more profit than the flip gained. Scans repeat
/// until one yields no accepted move. `solution.value` must be current on
/// entry; `solution.feasible` is recomputed from scratch on exit.
pub fn flip(problem: &Problem, solution: &mut Solution, config: &LocalSearchConfig) -> LocalSearchStats {
    let limit = config.k.min(problem.n());
    let candidates = &problem.candidate_order()[..limit];
    let profit = problem.profit();
    let start_value = solution.value;

    let mut ws = Workspace::new(problem, solution);
    let mut stats = LocalSearchStats::default();

    loop {
        stats.scans += 1;
        ws.clear_best();
        let mut accepted = false;

        for &j in candidates {
            if solution.x[j] || profit[j] <= 0.0 {
                continue;
            }
            ws.begin_trial(solution);
            ws.trial_add(problem, j);
            if ws.settle_trial(problem) <= solution.value {
                continue;
            }
            match config.mode {
                LsMode::FirstImprovement => {
                    ws.commit_trial(solution);
                    accepted = true;
                    break;
                }
                LsMode::BestImprovement => ws.offer_best(),
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
    tracing::trace!(moves = stats.moves, value = solution.value, "flip local search done");
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::objective;
    use crate::problem::{fixtures, Problem};

    #[test]
    fn test_fills_loose_knapsack_from_empty() {
        let p = fixtures::loose_five();
        for mode in [LsMode::FirstImprovement, LsMode::BestImprovement] {
            let mut sol = Solution::empty(5);
            let config = LocalSearchConfig::default().with_k(5).with_mode(mode);
            let stats = flip(&p, &mut sol, &config);

            assert_eq!(sol.x, vec![true; 5]);
            assert_eq!(sol.value, p.total_profit());
            assert!(sol.feasible);
            assert_eq!(stats.moves, 5);
        }
    }

    #[test]
    fn test_k_limits_candidates() {
        let p = fixtures::loose_five();
        let mut sol = Solution::empty(5);
        flip(&p, &mut sol, &LocalSearchConfig::default().with_k(2));
        assert_eq!(sol.count_selected(), 2);
        for &j in &p.candidate_order()[..2] {
            assert!(sol.x[j]);
        }
    }

    #[test]
    fn test_rejects_flip_eroded_by_repair() {
        // Adding item 0 forces repair to drop it again (lowest ratio).
        let p = Problem::new(vec![1.0, 10.0], vec![5.0], vec![5.0, 5.0]).unwrap();
        let mut sol = Solution::evaluated(&p, vec![false, true]);
        let stats = flip(&p, &mut sol, &LocalSearchConfig::default());
        assert_eq!(stats.moves, 0);
        assert_eq!(sol.x, vec![false, true]);
        assert_eq!(sol.value, 10.0);
    }

    #[test]
    fn test_accepts_flip_when_repair_drops_weaker_item() {
        // Adding item 1 overflows; repair drops item 0 (ratio 1) and nets +9.
        let p = Problem::new(vec![1.0, 10.0], vec![5.0], vec![1.0, 5.0]).unwrap();
        let mut sol = Solution::evaluated(&p, vec![true, false]);
        flip(&p, &mut sol, &LocalSearchConfig::default());
        assert_eq!(sol.x, vec![false, true]);
        assert_eq!(sol.value, 10.0);
        assert!(sol.feasible);
    }

    /// Item 0 is the most efficient, item 1 the most profitable; only
    /// 0 + 2 or 1 alone fit under the capacity.
    fn diverging_triple() -> Problem {
        Problem::new(vec![6.0, 10.0, 3.0], vec![10.0], vec![5.0, 10.0, 5.0]).unwrap()
    }

    #[test]
    fn test_first_improvement_follows_candidate_order() {
        let p = diverging_triple();
        assert_eq!(p.candidate_order(), &[0, 1, 2]);
        let mut sol = Solution::empty(3);
        let config = LocalSearchConfig::default().with_mode(LsMode::FirstImprovement);
        let stats = flip(&p, &mut sol, &config);
        assert_eq!(sol.x, vec![true, false, true]);
        assert_eq!(sol.value, 9.0);
        assert_eq!(stats.moves, 2);
        assert!(sol.feasible);
    }

    #[test]
    fn test_best_improvement_picks_largest_gain() {
        let p = diverging_triple();
        let mut sol = Solution::empty(3);
        let config = LocalSearchConfig::default().with_mode(LsMode::BestImprovement);
        let stats = flip(&p, &mut sol, &config);
        assert_eq!(sol.x, vec![false, true, false]);
        assert_eq!(sol.value, 10.0);
        assert_eq!(stats.moves, 1);
        assert!(sol.feasible);
        assert_eq!(sol.value, objective(&p, &sol.x));
    }

    #[test]
    fn test_never_worsens_random() {
        for seed in 0..20 {
            let p = fixtures::random(30, 3, 0.35, seed);
            let mut sol = crate::construct::greedy(&p);
            let before = sol.value;
            let stats = flip(&p, &mut sol, &LocalSearchConfig::default());
            assert!(sol.value >= before);
            assert_eq!(stats.gain, sol.value - before);
            assert!(sol.feasible);
            assert_eq!(sol.value, objective(&p, &sol.x));
        }
    }
}
