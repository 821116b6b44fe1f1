//! Variable Neighborhood Search configuration.

use crate::vnd::VndConfig;

/// Configuration parameters for Variable Neighborhood Search.
///
/// # Examples
///
/// ```
/// use u_mkp::vns::VnsConfig;
///
/// let config = VnsConfig::default()
///     .with_k_max(8)
///     .with_max_no_improvement(50);
/// assert_eq!(config.k_max, 8);
/// assert_eq!(config.max_no_improvement, 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VnsConfig {
    /// Largest shake radius (number of flipped items). Radii run `0..=k_max`.
    pub k_max: usize,
    /// Consecutive outer passes without improvement before stopping.
    pub max_no_improvement: usize,
    /// Hard cap on outer passes.
    pub max_iterations: usize,
    /// Short descent applied to every shaken candidate.
    pub inner: VndConfig,
}

impl Default for VnsConfig {
    fn default() -> Self {
        Self {
            k_max: 10,
            max_no_improvement: 20,
            max_iterations: 500,
            inner: VndConfig::default(),
        }
    }
}

impl VnsConfig {
    /// Sets the largest shake radius.
    pub fn with_k_max(mut self, k: usize) -> Self {
        self.k_max = k;
        self
    }

    /// Sets the number of consecutive non-improving passes.
    pub fn with_max_no_improvement(mut self, n: usize) -> Self {
        self.max_no_improvement = n;
        self
    }

    /// Sets the maximum number of outer passes.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the inner descent.
    pub fn with_inner(mut self, inner: VndConfig) -> Self {
        self.inner = inner;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.max_no_improvement == 0 {
            return Err("VNS max_no_improvement must be at least 1".into());
        }
        if self.max_iterations == 0 {
            return Err("VNS max_iterations must be at least 1".into());
        }
        self.inner.validate()
    }
}
