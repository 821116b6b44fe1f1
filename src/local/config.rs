//! Local search configuration.

use std::str::FromStr;

/// Move acceptance policy within one neighborhood scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LsMode {
    /// Commit the first move whose repaired value beats the incumbent.
    #[default]
    FirstImprovement,
    /// Try every move of the scan and commit the largest repaired gain.
    BestImprovement,
}

impl std::fmt::Display for LsMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LsMode::FirstImprovement => write!(f, "first"),
            LsMode::BestImprovement => write!(f, "best"),
        }
    }
}

impl FromStr for LsMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "first" | "first-improvement" => Ok(LsMode::FirstImprovement),
            "best" | "best-improvement" => Ok(LsMode::BestImprovement),
            other => Err(format!("unknown local search mode: {other}")),
        }
    }
}

/// Parameters shared by the flip and swap neighborhoods.
///
/// # Examples
///
/// ```
/// use u_mkp::local::{LocalSearchConfig, LsMode};
///
/// let config = LocalSearchConfig::default()
///     .with_k(20)
///     .with_mode(LsMode::BestImprovement);
/// assert_eq!(config.k, 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalSearchConfig {
    /// How many entries of the candidate order a scan considers.
    /// Values above `n` are capped to `n`.
    pub k: usize,
    pub mode: LsMode,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self {
            k: 100,
            mode: LsMode::FirstImprovement,
        }
    }
}

impl LocalSearchConfig {
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    pub fn with_mode(mut self, mode: LsMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.k == 0 {
            return Err("local search k must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = LocalSearchConfig::default();
        assert_eq!(c.k, 100);
        assert_eq!(c.mode, LsMode::FirstImprovement);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_zero_k_invalid() {
        assert!(LocalSearchConfig::default().with_k(0).validate().is_err());
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!("best".parse::<LsMode>(), Ok(LsMode::BestImprovement));
        assert_eq!("FIRST".parse::<LsMode>(), Ok(LsMode::FirstImprovement));
        assert!("sideways".parse::<LsMode>().is_err());
        assert_eq!(LsMode::BestImprovement.to_string(), "best");
    }
}
