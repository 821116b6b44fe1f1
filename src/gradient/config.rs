//! Gradient relaxation configuration, penalty shapes and freezing rules.

/// Overflow penalty added to the negative-profit loss.
///
/// With `d_i = max(0, usage_i - capacity_i)`:
///
/// - Hinge: `λ · Σ d_i`, gradient `λ · w_ij · s(1-s)` on violated rows
/// - Squared: `½λ · Σ d_i²`, gradient `λ · d_i · w_ij · s(1-s)`
///
/// The squared form pushes harder the further a row overflows, so the same
/// `λ` behaves very differently under the two shapes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Penalty {
    Hinge,
    #[default]
    Squared,
}

/// Rule for pinning relaxed variables to a binary value during descent.
///
/// A frozen variable takes its rounded value (`θ ≥ 0` means selected),
/// contributes that hard 0/1 to usage, and receives no further updates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Freezing {
    /// Pure relaxation.
    Off,

    /// After `warmup` iterations, freeze the unfrozen variable with the
    /// largest `θ` every `interval` iterations.
    MostConfident {
        warmup: usize,
        /// Iterations between two freezes (at least 1).
        interval: usize,
    },

    /// Freeze any variable whose `|θ|` has stayed at or above `threshold`
    /// for `patience` consecutive iterations.
    Persistent { threshold: f64, patience: usize },
}

impl Default for Freezing {
    fn default() -> Self {
        Freezing::MostConfident {
            warmup: 10,
            interval: 1,
        }
    }
}

/// Configuration for the gradient relaxation solver.
///
/// # Examples
///
/// ```
/// use u_mkp::gradient::{Freezing, GradientConfig, Penalty};
///
/// let config = GradientConfig::default()
///     .with_lambda(2.0)
///     .with_learning_rate(0.05)
///     .with_penalty(Penalty::Hinge)
///     .with_freezing(Freezing::Off);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientConfig {
    /// Penalty coefficient. Zero disables the penalty entirely.
    pub lambda: f64,

    /// Step size applied to the momentum term.
    pub learning_rate: f64,

    /// EMA factor β in `v ← β·v + (1-β)·grad`.
    pub momentum: f64,

    /// Sigmoid input is clamped to `[-sigmoid_clamp, sigmoid_clamp]`.
    pub sigmoid_clamp: f64,

    /// Consecutive iterations without a loss decrease before stopping.
    pub max_no_improvement: usize,

    /// Hard cap on iterations.
    pub max_iterations: usize,

    pub penalty: Penalty,

    pub freezing: Freezing,

    /// Run best-improvement flip local search over all items after rounding.
    pub polish: bool,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            lambda: 1.0,
            learning_rate: 0.01,
            momentum: 0.95,
            sigmoid_clamp: 20.0,
            max_no_improvement: 100,
            max_iterations: 10_000,
            penalty: Penalty::default(),
            freezing: Freezing::default(),
            polish: true,
        }
    }
}

impl GradientConfig {
    pub fn with_lambda(mut self, lambda: f64) -> Self {
        self.lambda = lambda;
        self
    }

    pub fn with_learning_rate(mut self, lr: f64) -> Self {
        self.learning_rate = lr;
        self
    }

    pub fn with_momentum(mut self, beta: f64) -> Self {
        self.momentum = beta;
        self
    }

    pub fn with_sigmoid_clamp(mut self, clamp: f64) -> Self {
        self.sigmoid_clamp = clamp;
        self
    }

    pub fn with_max_no_improvement(mut self, n: usize) -> Self {
        self.max_no_improvement = n;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_penalty(mut self, penalty: Penalty) -> Self {
        self.penalty = penalty;
        self
    }

    pub fn with_freezing(mut self, freezing: Freezing) -> Self {
        self.freezing = freezing;
        self
    }

    pub fn with_polish(mut self, polish: bool) -> Self {
        self.polish = polish;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.lambda.is_finite() || self.lambda < 0.0 {
            return Err(format!("lambda must be finite and >= 0, got {}", self.lambda));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(format!(
                "learning_rate must be finite and > 0, got {}",
                self.learning_rate
            ));
        }
        if !(0.0..1.0).contains(&self.momentum) {
            return Err(format!("momentum must be in [0, 1), got {}", self.momentum));
        }
        if !self.sigmoid_clamp.is_finite() || self.sigmoid_clamp <= 0.0 {
            return Err(format!(
                "sigmoid_clamp must be finite and > 0, got {}",
                self.sigmoid_clamp
            ));
        }
        if self.max_no_improvement == 0 {
            return Err("gradient max_no_improvement must be at least 1".into());
        }
        if self.max_iterations == 0 {
            return Err("gradient max_iterations must be at least 1".into());
        }
        match self.freezing {
            Freezing::MostConfident { interval: 0, .. } => {
                Err("freezing interval must be at least 1".into())
            }
            Freezing::Persistent {
                threshold,
                patience,
            } if !threshold.is_finite() || threshold <= 0.0 || patience == 0 => Err(format!(
                "persistent freezing needs threshold > 0 and patience >= 1, got {threshold} / {patience}"
            )),
            _ => Ok(()),
        }
    }
}
