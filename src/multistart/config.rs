//! Multi-start configuration.

use crate::gradient::GradientConfig;
use crate::vns::VnsConfig;

/// Configuration for the gradient-then-VNS restart driver.
///
/// # Examples
///
/// ```
/// use u_mkp::multistart::MultiStartConfig;
///
/// let config = MultiStartConfig::default().with_starts(4);
/// assert_eq!(config.starts, 4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiStartConfig {
    /// Number of restarts; the deadline may cut the sequence short.
    pub starts: usize,
    /// Relaxation run at the beginning of every restart.
    pub gradient: GradientConfig,
    /// Search applied to each relaxation result.
    pub vns: VnsConfig,
}

impl Default for MultiStartConfig {
    fn default() -> Self {
        Self {
            starts: 10,
            gradient: GradientConfig::default(),
            vns: VnsConfig::default(),
        }
    }
}

impl MultiStartConfig {
    pub fn with_starts(mut self, n: usize) -> Self {
        self.starts = n;
        self
    }

    pub fn with_gradient(mut self, gradient: GradientConfig) -> Self {
        self.gradient = gradient;
        self
    }

    pub fn with_vns(mut self, vns: VnsConfig) -> Self {
        self.vns = vns;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.starts == 0 {
            return Err("starts must be at least 1".into());
        }
        self.gradient.validate()?;
        self.vns.validate()
    }
}
