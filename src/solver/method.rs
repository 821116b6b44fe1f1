//! Method and verbosity names as they appear on the command line.

use std::fmt;
use std::str::FromStr;

/// Search procedure run by the [`Solver`](super::Solver).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    /// Flip local search from the constructed start.
    LsFlip,
    /// Swap local search from the constructed start.
    LsSwap,
    Vnd,
    #[default]
    Vns,
    /// Gradient relaxation, rounded and repaired.
    Gd,
    Ga,
    /// Repeated gradient relaxation followed by VNS.
    MultiGdVns,
}

impl Method {
    pub const ALL: [Method; 7] = [
        Method::LsFlip,
        Method::LsSwap,
        Method::Vnd,
        Method::Vns,
        Method::Gd,
        Method::Ga,
        Method::MultiGdVns,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::LsFlip => "LS-FLIP",
            Method::LsSwap => "LS-SWAP",
            Method::Vnd => "VND",
            Method::Vns => "VNS",
            Method::Gd => "GD",
            Method::Ga => "GA",
            Method::MultiGdVns => "MULTI-GD-VNS",
        }
    }

    /// Whether the method consumes random numbers.
    pub fn is_stochastic(&self) -> bool {
        matches!(
            self,
            Method::Vns | Method::Gd | Method::Ga | Method::MultiGdVns
        )
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown method name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMethodError(pub String);

impl fmt::Display for ParseMethodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown method `{}`, expected one of: ", self.0)?;
        for (i, m) in Method::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(m.as_str())?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseMethodError {}

impl FromStr for Method {
    type Err = ParseMethodError;

    /// Case-insensitive; underscores are accepted in place of dashes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('_', "-");
        Method::ALL
            .into_iter()
            .find(|m| m.as_str() == normalized)
            .ok_or_else(|| ParseMethodError(s.to_string()))
    }
}

/// Amount of progress output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verbosity {
    None,
    #[default]
    Info,
    Debug,
}

impl Verbosity {
    /// `tracing` filter directive for this level.
    pub fn filter_directive(&self) -> &'static str {
        match self {
            Verbosity::None => "off",
            Verbosity::Info => "info",
            Verbosity::Debug => "debug",
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Verbosity::None => "none",
            Verbosity::Info => "info",
            Verbosity::Debug => "debug",
        })
    }
}

/// Unknown verbosity name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVerbosityError(pub String);

impl fmt::Display for ParseVerbosityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown verbosity `{}`, expected none, info or debug",
            self.0
        )
    }
}

impl std::error::Error for ParseVerbosityError {}

impl FromStr for Verbosity {
    type Err = ParseVerbosityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "quiet" | "0" => Ok(Verbosity::None),
            "info" | "1" => Ok(Verbosity::Info),
            "debug" | "2" => Ok(Verbosity::Debug),
            _ => Err(ParseVerbosityError(s.to_string())),
        }
    }
}
