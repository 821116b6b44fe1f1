//! Run configuration shared by every method.

use super::method::Method;
use crate::construct::Construction;
use crate::eval::EvalBackend;
use crate::ga::GaConfig;
use crate::gradient::GradientConfig;
use crate::local::LocalSearchConfig;
use crate::multistart::MultiStartConfig;
use crate::vnd::VndConfig;
use crate::vns::VnsConfig;
use std::time::Duration;

/// Everything a [`Solver`](super::Solver) needs to run one method.
///
/// Only the sub-configuration of the selected method is used; the others
/// keep their defaults.
///
/// # Examples
///
/// ```
/// use u_mkp::solver::{Method, SolverConfig};
///
/// let config = SolverConfig::new(Method::Ga)
///     .with_time_limit_secs(2.5)
///     .with_seed(7);
/// assert_eq!(config.method, Method::Ga);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    pub method: Method,
    pub backend: EvalBackend,
    /// Wall-clock budget for the whole solve. `None` runs until the
    /// method's own stopping rules fire.
    pub time_limit: Option<Duration>,
    /// Seed of the single generator used by the run.
    pub seed: u64,
    /// Start for LS-FLIP, LS-SWAP, VND and VNS.
    pub construction: Construction,
    /// Restarts of MULTI-GD-VNS.
    pub starts: usize,
    pub local: LocalSearchConfig,
    pub vnd: VndConfig,
    pub vns: VnsConfig,
    pub gradient: GradientConfig,
    pub ga: GaConfig,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            method: Method::default(),
            backend: EvalBackend::default(),
            time_limit: None,
            seed: 42,
            construction: Construction::default(),
            starts: MultiStartConfig::default().starts,
            local: LocalSearchConfig::default(),
            vnd: VndConfig::default(),
            vns: VnsConfig::default(),
            gradient: GradientConfig::default(),
            ga: GaConfig::default(),
        }
    }
}

impl SolverConfig {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn with_backend(mut self, backend: EvalBackend) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Negative or non-finite values are ignored; values too large for a
    /// [`Duration`] mean no limit.
    pub fn with_time_limit_secs(mut self, secs: f64) -> Self {
        if secs.is_finite() && secs >= 0.0 {
            self.time_limit = Duration::try_from_secs_f64(secs).ok();
        }
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_construction(mut self, construction: Construction) -> Self {
        self.construction = construction;
        self
    }

    pub fn with_starts(mut self, starts: usize) -> Self {
        self.starts = starts;
        self
    }

    /// Sets the local search parameters, also used by the descents inside
    /// VND and VNS (and therefore by MULTI-GD-VNS).
    pub fn with_local(mut self, local: LocalSearchConfig) -> Self {
        self.local = local;
        self.vnd.local = local;
        self.vns.inner.local = local;
        self
    }

    pub fn with_vnd(mut self, vnd: VndConfig) -> Self {
        self.vnd = vnd;
        self
    }

    pub fn with_vns(mut self, vns: VnsConfig) -> Self {
        self.vns = vns;
        self
    }

    pub fn with_gradient(mut self, gradient: GradientConfig) -> Self {
        self.gradient = gradient;
        self
    }

    pub fn with_ga(mut self, ga: GaConfig) -> Self {
        self.ga = ga;
        self
    }

    /// Restart configuration assembled from `starts`, `gradient` and `vns`.
    pub fn multistart(&self) -> MultiStartConfig {
        MultiStartConfig::default()
            .with_starts(self.starts)
            .with_gradient(self.gradient)
            .with_vns(self.vns)
    }

    /// Validates the configuration of the selected method.
    pub fn validate(&self) -> Result<(), String> {
        match self.method {
            Method::LsFlip | Method::LsSwap => self.local.validate(),
            Method::Vnd => self.vnd.validate(),
            Method::Vns => self.vns.validate(),
            Method::Gd => self.gradient.validate(),
            Method::Ga => self.ga.validate(),
            Method::MultiGdVns => self.multistart().validate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::local::LsMode;

    #[test]
    fn test_defaults() {
        let config = SolverConfig::default();
        assert_eq!(config.method, Method::Vns);
        assert_eq!(config.backend, EvalBackend::Cpu);
        assert_eq!(config.time_limit, None);
        assert_eq!(config.construction, Construction::Greedy);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_local_feeds_every_descent() {
        let local = LocalSearchConfig::default()
            .with_k(3)
            .with_mode(LsMode::BestImprovement);
        let config = SolverConfig::new(Method::Vns).with_local(local);
        assert_eq!(config.local, local);
        assert_eq!(config.vnd.local, local);
        assert_eq!(config.vns.inner.local, local);
        assert_eq!(config.multistart().vns.inner.local, local);
    }

    #[test]
    fn test_time_limit_secs() {
        assert_eq!(
            SolverConfig::default().with_time_limit_secs(1.5).time_limit,
            Some(Duration::from_millis(1500))
        );
        assert_eq!(
            SolverConfig::default().with_time_limit_secs(-1.0).time_limit,
            None
        );
    }

    #[test]
    fn test_huge_time_limit_is_unlimited() {
        assert_eq!(
            SolverConfig::default().with_time_limit_secs(1e30).time_limit,
            None
        );
        let report = crate::solver::Solver::new(
            SolverConfig::new(Method::LsFlip).with_time_limit(Duration::MAX),
        )
        .solve(&crate::problem::fixtures::loose_five());
        assert!(report.solution.feasible);
    }

    #[test]
    fn test_validates_selected_method_only() {
        let config = SolverConfig::new(Method::Vns).with_ga(GaConfig::default().with_population_size(0));
        assert!(config.validate().is_ok());
        assert!(config.with_method(Method::Ga).validate().is_err());
        assert!(SolverConfig::new(Method::MultiGdVns)
            .with_starts(0)
            .validate()
            .is_err());
    }
}
