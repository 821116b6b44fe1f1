//! Errors raised while building or loading a [`Problem`](super::Problem).

use std::num::ParseFloatError;

/// A problem description that violates the model's preconditions.
#[derive(Debug, Clone, PartialEq)]
pub enum ProblemError {
    /// No items or no constraints.
    EmptyDimension { items: usize, constraints: usize },
    /// The weight matrix does not hold `m * n` entries.
    WeightShape { expected: usize, actual: usize },
    /// A capacity is negative or not finite.
    InvalidCapacity { constraint: usize, value: f64 },
    /// A weight is negative or not finite.
    InvalidWeight {
        constraint: usize,
        item: usize,
        value: f64,
    },
    /// A profit is not finite.
    InvalidProfit { item: usize, value: f64 },
}

impl std::fmt::Display for ProblemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ProblemError::*;
        match self {
            EmptyDimension { items, constraints } => write!(
                f,
                "problem needs at least one item and one constraint (got n={items}, m={constraints})"
            ),
            WeightShape { expected, actual } => {
                write!(f, "weight matrix has {actual} entries, expected {expected}")
            }
            InvalidCapacity { constraint, value } => {
                write!(f, "capacity of constraint {constraint} is invalid: {value}")
            }
            InvalidWeight {
                constraint,
                item,
                value,
            } => write!(
                f,
                "weight of item {item} under constraint {constraint} is invalid: {value}"
            ),
            InvalidProfit { item, value } => write!(f, "profit of item {item} is invalid: {value}"),
        }
    }
}

impl std::error::Error for ProblemError {}

/// Failure while reading an instance file.
#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    ParseFloat(ParseFloatError),
    /// A header count is not a non-negative integer, or `n · m` overflows.
    BadCount(String),
    UnexpectedEof,
    Problem(ProblemError),
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ParseFloatError> for LoadError {
    fn from(e: ParseFloatError) -> Self {
        Self::ParseFloat(e)
    }
}

impl From<ProblemError> for LoadError {
    fn from(e: ProblemError) -> Self {
        Self::Problem(e)
    }
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use LoadError::*;
        match self {
            Io(e) => write!(f, "I/O error: {e}"),
            ParseFloat(e) => write!(f, "parse error: {e}"),
            BadCount(tok) => write!(f, "expected a non-negative integer count, got {tok:?}"),
            UnexpectedEof => write!(f, "unexpected end of file while parsing instance"),
            Problem(e) => write!(f, "invalid instance: {e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::ParseFloat(e) => Some(e),
            LoadError::Problem(e) => Some(e),
            _ => None,
        }
    }
}
