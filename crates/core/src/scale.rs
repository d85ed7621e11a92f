use std::{fmt, str::FromStr};

use thiserror::Error;

/// The problem scale selected before a run.
///
/// Scale sets the step counts of both trajectories, but only the symmetric
/// trajectory changes character with it: large runs get stronger path noise
/// that worsens after iteration 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scale {
    Small,
    Large,
}

/// Errors that can occur when parsing a [`Scale`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScaleError {
    #[error("unrecognized problem scale `{0}`, expected `small` or `large`")]
    Unrecognized(String),
}

/// Probability that the symmetric solver stalls on a large problem.
///
/// Declared alongside the other tuning constants but not consulted by any
/// trajectory.
pub const LARGE_STALL_RATE: f64 = 0.8;

impl Scale {
    /// Returns the nominal number of unknowns the scale stands for.
    #[must_use]
    pub fn dimension(self) -> u32 {
        match self {
            Self::Small => 100,
            Self::Large => 10_000,
        }
    }

    /// Returns the nominal condition number of the symmetric system's Hessian.
    #[must_use]
    pub fn condition_number(self) -> f64 {
        match self {
            Self::Small => 1e4,
            Self::Large => 1e12,
        }
    }

    /// Returns the nominal stall probability of the symmetric solver.
    #[must_use]
    pub fn stall_rate(self) -> f64 {
        match self {
            Self::Small => 0.0,
            Self::Large => LARGE_STALL_RATE,
        }
    }

    /// Returns the explanatory text shown when this scale is selected.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Small => {
                "Simulating a local logistics problem (N=100). \
                 Both methods work, but Asymmetric is still faster."
            }
            Self::Large => {
                "Simulating a massive logistics network (N=10,000). \
                 Matrix condition number explodes, causing the Symmetric solver to struggle."
            }
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Small => "small",
            Self::Large => "large",
        })
    }
}

impl FromStr for Scale {
    type Err = ScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(Self::Small),
            "large" => Ok(Self::Large),
            other => Err(ScaleError::Unrecognized(other.to_owned())),
        }
    }
}
