//! Variable Neighborhood Descent configuration.

use crate::local::LocalSearchConfig;

/// Configuration parameters for Variable Neighborhood Descent.
///
/// # Examples
///
/// ```
/// use u_mkp::vnd::VndConfig;
///
/// let config = VndConfig::default().with_max_no_improvement(3);
/// assert_eq!(config.max_no_improvement, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VndConfig {
    /// Consecutive descent rounds without improvement before stopping.
    pub max_no_improvement: usize,
    /// Neighborhood bound and acceptance policy of the inner local searches.
    pub local: LocalSearchConfig,
}

impl Default for VndConfig {
    fn default() -> Self {
        Self {
            max_no_improvement: 5,
            local: LocalSearchConfig::default(),
        }
    }
}

impl VndConfig {
    /// Sets the number of consecutive non-improving rounds.
    pub fn with_max_no_improvement(mut self, n: usize) -> Self {
        self.max_no_improvement = n;
        self
    }

    /// Sets the local search parameters.
    pub fn with_local(mut self, local: LocalSearchConfig) -> Self {
        self.local = local;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.max_no_improvement == 0 {
            return Err("VND max_no_improvement must be at least 1".into());
        }
        self.local.validate()
    }
}
