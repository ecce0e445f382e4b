//! Errors surfaced by the orchestrator.

use std::error::Error;
use std::fmt;

use flue_core::{ConfigError, GridError};

/// Why [`simulate`](crate::simulate) produced no result.
#[derive(Clone, Debug, PartialEq)]
pub enum SimulationError {
    /// The configuration failed validation.
    Config(ConfigError),
    /// A field did not match the grid it was solved on.
    Grid(GridError),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Grid(e) => write!(f, "grid: {e}"),
        }
    }
}

impl Error for SimulationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Grid(e) => Some(e),
        }
    }
}

impl From<ConfigError> for SimulationError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<GridError> for SimulationError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
