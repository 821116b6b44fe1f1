//! GA configuration and presets.

use super::types::InfeasiblePolicy;

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_mkp::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 500);
/// assert_eq!(config.tournament_size, 5);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_mkp::ga::{GaConfig, InfeasiblePolicy};
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_elite_fraction(0.1)
///     .with_mutation_rate(0.02)
///     .with_infeasible_policy(InfeasiblePolicy::Proportional { factor: 1.0 });
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population (at least 1).
    pub population_size: usize,

    /// Maximum number of generations before termination.
    pub max_generations: usize,

    /// Per-gene flip probability (0.0–1.0).
    pub mutation_rate: f64,

    /// Fraction of the population copied unchanged into the next
    /// generation. The elite count is `⌈elite_fraction · population_size⌉`
    /// and never less than one.
    pub elite_fraction: f64,

    /// Individuals sampled per tournament; values below 2 act as 2.
    pub tournament_size: usize,

    /// Scoring rule for infeasible individuals.
    pub infeasible: InfeasiblePolicy,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 500,
            mutation_rate: 0.01,
            elite_fraction: 0.05,
            tournament_size: 5,
            infeasible: InfeasiblePolicy::Zero,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the per-gene mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the elite fraction.
    pub fn with_elite_fraction(mut self, fraction: f64) -> Self {
        self.elite_fraction = fraction.clamp(0.0, 1.0);
        self
    }

    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    pub fn with_infeasible_policy(mut self, policy: InfeasiblePolicy) -> Self {
        self.infeasible = policy;
        self
    }

    /// Number of elites carried over each generation.
    pub fn elite_count(&self) -> usize {
        let raw = (self.elite_fraction * self.population_size as f64).ceil() as usize;
        raw.max(1).min(self.population_size)
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size == 0 {
            return Err("population_size must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            ));
        }
        if !(0.0..=1.0).contains(&self.elite_fraction) {
            return Err(format!(
                "elite_fraction must be in [0, 1], got {}",
                self.elite_fraction
            ));
        }
        if let InfeasiblePolicy::Proportional { factor } = self.infeasible {
            if !factor.is_finite() || factor < 0.0 {
                return Err(format!("penalty factor must be finite and >= 0, got {factor}"));
            }
        }
        Ok(())
    }
}
