//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! random initialization → sort → elites → tournament → crossover →
//! mutation → repair → evaluation → repeat.

use super::config::GaConfig;
use super::operators::{bit_flip_mutation, single_point_crossover};
use super::selection::tournament_pair;
use super::types::Individual;
use crate::deadline::Deadline;
use crate::eval::{compute_usage, Evaluator};
use crate::problem::Problem;
use crate::repair::repair;
use crate::solution::Solution;
use rand::Rng;

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Fittest individual of the last generation.
    pub best: Solution,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Whether the deadline stopped the run.
    pub timed_out: bool,

    /// Best fitness of the initial population, then after each generation.
    pub fitness_history: Vec<f64>,
}

/// Executes the GA evolutionary loop.
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization.
    ///
    /// `config` must be valid (see [`GaConfig::validate`]).
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use u_mkp::deadline::Deadline;
    /// use u_mkp::eval::CpuEvaluator;
    /// use u_mkp::ga::{GaConfig, GaRunner};
    /// use u_mkp::problem::Problem;
    ///
    /// let p = Problem::new(vec![10.0, 20.0, 15.0], vec![10.0], vec![5.0, 6.0, 5.0]).unwrap();
    /// let config = GaConfig::default().with_population_size(20).with_max_generations(30);
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let result = GaRunner::run(&p, &CpuEvaluator, &config, Deadline::none(), &mut rng);
    /// assert!(result.best.feasible);
    /// ```
    pub fn run<E: Evaluator, R: Rng>(
        problem: &Problem,
        evaluator: &E,
        config: &GaConfig,
        deadline: Deadline,
        rng: &mut R,
    ) -> GaResult {
        let n = problem.n();
        let size = config.population_size;
        let elite_count = config.elite_count();
        let mut usage = vec![0.0; problem.m()];

        // 1. Random initial population, evaluated but not repaired
        let mut population: Vec<Individual> = (0..size)
            .map(|_| {
                let x: Vec<bool> = (0..n).map(|_| rng.random_bool(0.5)).collect();
                let mut sol = Solution::from_selection(x);
                evaluator.evaluate(problem, &mut sol);
                Individual::scored(problem, sol, config.infeasible, &mut usage)
            })
            .collect();
        let mut next_gen: Vec<Individual> = Vec::with_capacity(size);

        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
        fitness_history.push(best_fitness(&population));

        let mut generations = 0;
        let mut timed_out = false;

        // 2. Evolutionary loop
        for generation in 0..config.max_generations {
            if deadline.is_expired() {
                timed_out = true;
                tracing::debug!(generation, "ga time limit reached");
                break;
            }

            // Sort by fitness (descending = best first)
            population.sort_by(|a, b| {
                b.fitness
                    .partial_cmp(&a.fitness)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

            // Elite preservation
            next_gen.clear();
            next_gen.extend_from_slice(&population[..elite_count]);

            // Generate offspring
            while next_gen.len() < size {
                let (p1, p2) = tournament_pair(&population, config.tournament_size, rng);

                let mut genes = vec![false; n];
                single_point_crossover(
                    &population[p1].solution.x,
                    &population[p2].solution.x,
                    &mut genes,
                    rng,
                );
                bit_flip_mutation(&mut genes, config.mutation_rate, rng);

                let mut child = Solution::from_selection(genes);
                evaluator.evaluate(problem, &mut child);
                if !child.feasible {
                    compute_usage(problem, &child.x, &mut usage);
                    repair(problem, &mut child, &mut usage);
                }
                next_gen.push(Individual::scored(
                    problem,
                    child,
                    config.infeasible,
                    &mut usage,
                ));
            }

            std::mem::swap(&mut population, &mut next_gen);
            generations = generation + 1;

            let best = best_fitness(&population);
            fitness_history.push(best);
            if generation % 100 == 0 {
                tracing::trace!(generation, best, "ga generation");
            }
        }

        let best_idx = best_index(&population);
        let best = population.swap_remove(best_idx);
        tracing::debug!(
            generations,
            fitness = best.fitness,
            value = best.solution.value,
            "ga finished"
        );

        GaResult {
            best_fitness: best.fitness,
            best: best.solution,
            generations,
            timed_out,
            fitness_history,
        }
    }
}

/// First index holding the highest fitness.
fn best_index(population: &[Individual]) -> usize {
    let mut best = 0;
    for (i, ind) in population.iter().enumerate().skip(1) {
        if ind.fitness > population[best].fitness {
            best = i;
        }
    }
    best
}

fn best_fitness(population: &[Individual]) -> f64 {
    population[best_index(population)].fitness
}
