//! Gradient relaxation execution engine.
//!
//! # Algorithm
//!
//! Each decision `x_j` is relaxed to `s_j = σ(θ_j)` and the loss
//!
//! ```text
//! L(θ) = -Σ_j c_j s_j + penalty(usage(s))
//! ```
//!
//! is minimised with momentum descent. Per iteration:
//!
//! 1. `s = σ(clamp(θ))`, frozen variables contribute their hard 0/1
//! 2. `usage_i = Σ_j w_ij s_j`
//! 3. `∂L/∂θ_j = s_j(1-s_j) · (-c_j + Σ_i p_i w_ij)` with `p_i` the penalty
//!    slope of row `i`
//! 4. `v ← β·v + (1-β)·grad`, `θ ← θ - lr·v`
//! 5. apply the freezing rule
//!
//! Descent stops after `max_no_improvement` iterations without a strict
//! loss decrease, after `max_iterations`, or at the deadline. The relaxed
//! point is then rounded at `σ(θ) ≥ 0.5`, evaluated, repaired if it
//! overflows and optionally polished with flip local search.

use super::config::{Freezing, GradientConfig, Penalty};
use crate::deadline::Deadline;
use crate::eval::{compute_usage, Evaluator};
use crate::local::{flip, LocalSearchConfig, LsMode};
use crate::problem::Problem;
use crate::repair::repair;
use crate::solution::Solution;
use rand::Rng;

/// Result of a gradient relaxation run.
#[derive(Debug, Clone)]
pub struct GradientResult {
    /// Rounded, repaired (and possibly polished) binary solution.
    pub solution: Solution,
    /// Final relaxed values `σ(θ_j)`; frozen variables report 0 or 1.
    pub relaxed: Vec<f64>,
    /// Descent iterations executed.
    pub iterations: usize,
    /// Loss of the last iteration (`+∞` when none ran).
    pub final_loss: f64,
    /// Variables frozen when descent stopped.
    pub frozen: usize,
    /// Whether the deadline stopped the descent.
    pub timed_out: bool,
}

#[inline]
fn sigmoid(z: f64, clamp: f64) -> f64 {
    1.0 / (1.0 + (-z.clamp(-clamp, clamp)).exp())
}

/// Buffers of one descent, allocated once per run.
struct Relaxation {
    theta: Vec<f64>,
    velocity: Vec<f64>,
    x_hat: Vec<f64>,
    usage: Vec<f64>,
    slope: Vec<f64>,
    frozen: Vec<bool>,
    streak: Vec<usize>,
    frozen_count: usize,
}

impl Relaxation {
    fn new<R: Rng>(problem: &Problem, rng: &mut R) -> Self {
        let n = problem.n();
        Self {
            theta: (0..n).map(|_| rng.random::<f64>()).collect(),
            velocity: vec![0.0; n],
            x_hat: vec![0.0; n],
            usage: vec![0.0; problem.m()],
            slope: vec![0.0; problem.m()],
            frozen: vec![false; n],
            streak: vec![0; n],
            frozen_count: 0,
        }
    }

    fn project(&mut self, clamp: f64) {
        for ((s, &t), &f) in self.x_hat.iter_mut().zip(&self.theta).zip(&self.frozen) {
            *s = if f {
                if t >= 0.0 {
                    1.0
                } else {
                    0.0
                }
            } else {
                sigmoid(t, clamp)
            };
        }
    }

    fn accumulate_usage(&mut self, problem: &Problem) {
        self.usage.fill(0.0);
        for (j, &s) in self.x_hat.iter().enumerate() {
            if s != 0.0 {
                for (u, &w) in self.usage.iter_mut().zip(problem.item_weights(j)) {
                    *u += w * s;
                }
            }
        }
    }

    /// Fills the per-row penalty slopes and returns the loss.
    fn loss(&mut self, problem: &Problem, lambda: f64, penalty: Penalty) -> f64 {
        let mut loss: f64 = -problem
            .profit()
            .iter()
            .zip(&self.x_hat)
            .map(|(&c, &s)| c * s)
            .sum::<f64>();
        for ((p, &u), &b) in self.slope.iter_mut().zip(&self.usage).zip(problem.capacity()) {
            let excess = (u - b).max(0.0);
            match penalty {
                Penalty::Hinge => {
                    loss += lambda * excess;
                    *p = if excess > 0.0 { lambda } else { 0.0 };
                }
                Penalty::Squared => {
                    loss += 0.5 * lambda * excess * excess;
                    *p = lambda * excess;
                }
            }
        }
        loss
    }

    fn step(&mut self, problem: &Problem, config: &GradientConfig) {
        let beta = config.momentum;
        for j in 0..self.theta.len() {
            if self.frozen[j] {
                continue;
            }
            let s = self.x_hat[j];
            let ds = s * (1.0 - s);
            let pressure: f64 = self
                .slope
                .iter()
                .zip(problem.item_weights(j))
                .map(|(&p, &w)| p * w)
                .sum();
            let grad = ds * (pressure - problem.profit()[j]);
            self.velocity[j] = beta * self.velocity[j] + (1.0 - beta) * grad;
            self.theta[j] -= config.learning_rate * self.velocity[j];
        }
    }

    fn freeze(&mut self, rule: Freezing, iteration: usize) {
        match rule {
            Freezing::Off => {}
            Freezing::MostConfident { warmup, interval } => {
                if iteration < warmup || (iteration - warmup) % interval != 0 {
                    return;
                }
                let mut best: Option<usize> = None;
                for (j, &t) in self.theta.iter().enumerate() {
                    if !self.frozen[j] && best.is_none_or(|b| t > self.theta[b]) {
                        best = Some(j);
                    }
                }
                if let Some(j) = best {
                    self.frozen[j] = true;
                    self.frozen_count += 1;
                }
            }
            Freezing::Persistent {
                threshold,
                patience,
            } => {
                for j in 0..self.theta.len() {
                    if self.frozen[j] {
                        continue;
                    }
                    if self.theta[j].abs() >= threshold {
                        self.streak[j] += 1;
                        if self.streak[j] >= patience {
                            self.frozen[j] = true;
                            self.frozen_count += 1;
                        }
                    } else {
                        self.streak[j] = 0;
                    }
                }
            }
        }
    }
}

/// Gradient relaxation runner.
pub struct GradientRunner;

impl GradientRunner {
    /// Runs the relaxation from a random start and returns the rounded
    /// solution together with descent diagnostics.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use u_mkp::deadline::Deadline;
    /// use u_mkp::eval::CpuEvaluator;
    /// use u_mkp::gradient::{GradientConfig, GradientRunner};
    /// use u_mkp::problem::Problem;
    ///
    /// let p = Problem::new(vec![10.0, 20.0, 15.0], vec![10.0], vec![5.0, 6.0, 5.0]).unwrap();
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    /// let result = GradientRunner::run(
    ///     &p,
    ///     &CpuEvaluator,
    ///     &GradientConfig::default(),
    ///     Deadline::none(),
    ///     &mut rng,
    /// );
    /// assert!(result.solution.feasible);
    /// ```
    pub fn run<E: Evaluator, R: Rng>(
        problem: &Problem,
        evaluator: &E,
        config: &GradientConfig,
        deadline: Deadline,
        rng: &mut R,
    ) -> GradientResult {
        let mut state = Relaxation::new(problem, rng);
        let mut previous_loss = f64::INFINITY;
        let mut no_improvement = 0;
        let mut iteration = 0;
        let mut timed_out = false;

        while no_improvement < config.max_no_improvement && iteration < config.max_iterations {
            if deadline.is_expired() {
                timed_out = true;
                break;
            }

            state.project(config.sigmoid_clamp);
            state.accumulate_usage(problem);
            let loss = state.loss(problem, config.lambda, config.penalty);
            state.step(problem, config);
            state.freeze(config.freezing, iteration);

            if loss >= previous_loss {
                no_improvement += 1;
            } else {
                no_improvement = 0;
            }
            previous_loss = loss;

            if iteration % 100 == 0 {
                tracing::trace!(iteration, loss, frozen = state.frozen_count, "gradient step");
            }
            iteration += 1;
        }

        state.project(config.sigmoid_clamp);
        let x: Vec<bool> = state.theta.iter().map(|&t| t >= 0.0).collect();
        let mut solution = Solution::from_selection(x);
        evaluator.evaluate(problem, &mut solution);
        tracing::debug!(
            iterations = iteration,
            loss = previous_loss,
            value = solution.value,
            feasible = solution.feasible,
            "gradient descent finished"
        );

        if !solution.feasible {
            compute_usage(problem, &solution.x, &mut state.usage);
            let removed = repair(problem, &mut solution, &mut state.usage);
            tracing::debug!(removed, value = solution.value, "gradient solution repaired");
        }
        if config.polish {
            let polish = LocalSearchConfig::default()
                .with_k(problem.n())
                .with_mode(LsMode::BestImprovement);
            flip(problem, &mut solution, &polish);
        }

        GradientResult {
            solution,
            relaxed: state.x_hat,
            iterations: iteration,
            final_loss: previous_loss,
            frozen: state.frozen_count,
            timed_out,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::{check_feasibility, objective, CpuEvaluator};
    use crate::problem::fixtures;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    fn run_seeded(p: &Problem, config: &GradientConfig, seed: u64) -> GradientResult {
        let mut rng = StdRng::seed_from_u64(seed);
        GradientRunner::run(p, &CpuEvaluator, config, Deadline::none(), &mut rng)
    }

    #[test]
    fn test_sigmoid_clamped() {
        assert_eq!(sigmoid(0.0, 20.0), 0.5);
        assert_eq!(sigmoid(1e6, 20.0), sigmoid(20.0, 20.0));
        assert!(sigmoid(-1e6, 20.0) > 0.0);
    }

    #[test]
    fn test_zero_lambda_drives_toward_all_ones() {
        let p = fixtures::three_items();
        let config = GradientConfig::default()
            .with_lambda(0.0)
            .with_learning_rate(0.1)
            .with_freezing(Freezing::Off)
            .with_max_iterations(2_000);
        let result = run_seeded(&p, &config, 1);

        for &s in &result.relaxed {
            assert!(s > 0.95, "relaxed value {s} did not approach 1");
        }
        assert_eq!(result.frozen, 0);
        // rounding picks everything, repair restores capacity
        assert!(result.solution.feasible);
        assert_eq!(result.solution.value, 20.0);
    }

    #[test]
    fn test_both_penalties_push_overweight_item_out() {
        let p = Problem::new(vec![1.0], vec![0.0], vec![10.0]).unwrap();
        for penalty in [Penalty::Hinge, Penalty::Squared] {
            let config = GradientConfig::default()
                .with_penalty(penalty)
                .with_learning_rate(0.5)
                .with_freezing(Freezing::Off)
                .with_polish(false);
            let result = run_seeded(&p, &config, 2);
            assert!(result.relaxed[0] < 0.5, "{penalty:?}: {}", result.relaxed[0]);
            assert_eq!(result.solution.x, vec![false]);
            assert!(result.solution.feasible);
        }
    }

    #[test]
    fn test_most_confident_freezes_every_item() {
        let p = fixtures::random(8, 2, 0.5, 3);
        let config = GradientConfig::default().with_freezing(Freezing::MostConfident {
            warmup: 0,
            interval: 1,
        });
        let result = run_seeded(&p, &config, 3);
        assert_eq!(result.frozen, p.n());
        for &s in &result.relaxed {
            assert!(s == 0.0 || s == 1.0);
        }
        assert!(result.solution.feasible);
    }

    #[test]
    fn test_persistent_freezing_on_loose_instance() {
        let p = fixtures::loose_five();
        let config = GradientConfig::default()
            .with_lambda(0.0)
            .with_learning_rate(0.1)
            .with_freezing(Freezing::Persistent {
                threshold: 1.0,
                patience: 3,
            });
        let result = run_seeded(&p, &config, 4);
        assert_eq!(result.frozen, 5);
        assert_eq!(result.solution.x, vec![true; 5]);
        assert_eq!(result.solution.value, p.total_profit());
    }

    #[test]
    fn test_output_is_consistent_and_feasible() {
        for seed in 0..5 {
            let p = fixtures::random(30, 4, 0.4, seed);
            let result = run_seeded(&p, &GradientConfig::default(), seed);
            let sol = &result.solution;
            assert!(sol.feasible);
            assert!(check_feasibility(&p, &sol.x));
            assert_eq!(sol.value, objective(&p, &sol.x));
            assert!(result.iterations <= 10_000);
        }
    }

    #[test]
    fn test_reproducible_with_seed() {
        let p = fixtures::random(20, 3, 0.5, 6);
        let a = run_seeded(&p, &GradientConfig::default(), 99);
        let b = run_seeded(&p, &GradientConfig::default(), 99);
        assert_eq!(a.solution, b.solution);
        assert_eq!(a.relaxed, b.relaxed);
        assert_eq!(a.iterations, b.iterations);
    }

    #[test]
    fn test_expired_deadline_still_returns_feasible() {
        let p = fixtures::three_items();
        let mut rng = StdRng::seed_from_u64(0);
        let result = GradientRunner::run(
            &p,
            &CpuEvaluator,
            &GradientConfig::default().with_polish(false),
            Deadline::after(Duration::ZERO),
            &mut rng,
        );
        assert!(result.timed_out);
        assert_eq!(result.iterations, 0);
        assert!(result.final_loss.is_infinite());
        // θ starts in [0, 1), so rounding selects everything before repair
        assert!(result.solution.feasible);
        assert_eq!(result.solution.value, 20.0);
    }
}
