use std::fmt::{self, Display};
use std::str::FromStr;

use thiserror::Error;

use crate::num_traits::Weight;

/// Errors raised by an invalid combination of graph settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown fill mode {0:?}, expected \"zero\" or \"infinity\"")]
    UnknownFillMode(String),

    /// A zero-weight arc cannot be told apart from a missing arc once the
    /// matrix is rendered with the zero sentinel.
    #[error("zero-weight arc {from} -> {to} is ambiguous under the zero fill mode")]
    ZeroWeightArc { from: String, to: String },
}

/// The value a rendered adjacency matrix holds where there is no arc.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FillMode {
    #[default]
    Zero,
    Infinity,
}

impl FillMode {
    pub fn sentinel<W: Weight>(self) -> W {
        match self {
            FillMode::Zero => W::zero(),
            FillMode::Infinity => W::infinity(),
        }
    }
}

impl FromStr for FillMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zero" => Ok(FillMode::Zero),
            "infinity" => Ok(FillMode::Infinity),
            other => Err(ConfigError::UnknownFillMode(other.to_string())),
        }
    }
}

impl Display for FillMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillMode::Zero => write!(f, "zero"),
            FillMode::Infinity => write!(f, "infinity"),
        }
    }
}

/// How arcs are folded into the adjacency matrix.
///
/// The default is a zero-filled, undirected, unweighted graph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphConfig {
    pub fill_mode: FillMode,
    /// When false every arc is mirrored into the reverse cell.
    pub is_directed: bool,
    /// When false every arc weighs one, whatever weight was supplied.
    pub is_weighed: bool,
}

impl GraphConfig {
    pub fn new(fill_mode: FillMode, is_directed: bool, is_weighed: bool) -> Self {
        GraphConfig {
            fill_mode,
            is_directed,
            is_weighed,
        }
    }

    pub fn with_fill_mode(mut self, fill_mode: FillMode) -> Self {
        self.fill_mode = fill_mode;
        self
    }

    pub fn directed(mut self, is_directed: bool) -> Self {
        self.is_directed = is_directed;
        self
    }

    pub fn weighed(mut self, is_weighed: bool) -> Self {
        self.is_weighed = is_weighed;
        self
    }
}
