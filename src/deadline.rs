//! Cooperative wall-clock limit shared by the iterative procedures.

use std::time::{Duration, Instant};

/// A point in time after which searches stop at their next loop boundary.
///
/// Checks are cooperative, so a run can overshoot by the cost of one inner
/// loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Deadline {
    at: Option<Instant>,
}

impl Deadline {
    /// No time limit.
    pub fn none() -> Self {
        Self { at: None }
    }

    pub fn at(instant: Instant) -> Self {
        Self { at: Some(instant) }
    }

    pub fn after(limit: Duration) -> Self {
        Self::after_from(Instant::now(), limit)
    }

    /// `start + limit`; a limit past the representable range means no limit.
    pub fn after_from(start: Instant, limit: Duration) -> Self {
        start.checked_add(limit).map_or_else(Self::none, Self::at)
    }

    /// Builds a deadline from an optional limit in seconds.
    pub fn from_secs_f64(secs: Option<f64>) -> Self {
        match secs {
            Some(s) if s.is_finite() && s >= 0.0 => Duration::try_from_secs_f64(s)
                .map_or_else(|_| Self::none(), Self::after),
            _ => Self::none(),
        }
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.at.is_some_and(|t| Instant::now() >= t)
    }

    /// Time left, `None` when unlimited.
    pub fn remaining(&self) -> Option<Duration> {
        self.at.map(|t| t.saturating_duration_since(Instant::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_never_expires() {
        let d = Deadline::none();
        assert!(!d.is_expired());
        assert!(d.remaining().is_none());
    }

    #[test]
    fn test_zero_limit_is_expired() {
        let d = Deadline::after(Duration::ZERO);
        assert!(d.is_expired());
        assert_eq!(d.remaining(), Some(Duration::ZERO));
    }

    #[test]
    fn test_generous_limit() {
        let d = Deadline::from_secs_f64(Some(3600.0));
        assert!(!d.is_expired());
        assert!(d.remaining().unwrap() > Duration::from_secs(3000));
    }

    #[test]
    fn test_invalid_secs_means_unlimited() {
        assert_eq!(Deadline::from_secs_f64(Some(f64::NAN)), Deadline::none());
        assert_eq!(Deadline::from_secs_f64(None), Deadline::none());
    }

    #[test]
    fn test_out_of_range_limits_mean_unlimited() {
        assert_eq!(Deadline::from_secs_f64(Some(1e30)), Deadline::none());
        assert_eq!(Deadline::after(Duration::MAX), Deadline::none());
        assert!(!Deadline::after_from(Instant::now(), Duration::MAX).is_expired());
    }
}
