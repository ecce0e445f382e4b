//! Error types for configuration and grid construction.
//!
//! Every [`ConfigError`] is detected before the solver runs and is fatal to
//! the run: no partial result is produced. Non-convergence is not an error
//! at this layer; the solver reports it as a status.

use std::error::Error;
use std::fmt;

/// Errors detected by [`SimulationConfig::validate()`](crate::SimulationConfig::validate).
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A material or convection coefficient is zero, negative, or not finite.
    NonPositiveProperty {
        /// Which property (`"conductivity"`, `"inner_coefficient"`, ...).
        name: &'static str,
        /// The offending value.
        value: f64,
    },
    /// An ambient temperature is NaN or infinite.
    NonFiniteTemperature {
        /// Which temperature (`"internal_temperature"` or `"external_temperature"`).
        name: &'static str,
        /// The offending value.
        value: f64,
    },
    /// Side lengths violate `0 < inner_side < outer_side`.
    InvalidGeometry {
        /// Configured outer side length.
        outer_side: f64,
        /// Configured inner side length.
        inner_side: f64,
    },
    /// Node spacing is zero, negative, or not finite.
    InvalidSpacing {
        /// The offending spacing.
        value: f64,
    },
    /// The spacing yields fewer than three nodes per axis.
    MeshTooCoarse {
        /// Nodes per axis the spacing produced.
        nodes: usize,
    },
    /// The spacing yields more nodes per axis than the solver accepts.
    MeshTooFine {
        /// Nodes per axis the spacing produced (saturated on overflow).
        nodes: usize,
        /// Upper bound.
        max: usize,
    },
    /// Convergence tolerance is zero, negative, or not finite.
    InvalidTolerance {
        /// The offending tolerance.
        value: f64,
    },
    /// The iteration cap is zero.
    ZeroIterations,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveProperty { name, value } => {
                write!(f, "{name} must be finite and positive, got {value}")
            }
            Self::NonFiniteTemperature { name, value } => {
                write!(f, "{name} must be finite, got {value}")
            }
            Self::InvalidGeometry {
                outer_side,
                inner_side,
            } => write!(
                f,
                "geometry requires 0 < inner_side < outer_side, got inner_side={inner_side}, outer_side={outer_side}"
            ),
            Self::InvalidSpacing { value } => {
                write!(f, "node spacing must be finite and positive, got {value}")
            }
            Self::MeshTooCoarse { nodes } => {
                write!(f, "mesh has {nodes} nodes per axis, need at least 3")
            }
            Self::MeshTooFine { nodes, max } => {
                write!(f, "mesh has {nodes} nodes per axis, limit is {max}")
            }
            Self::InvalidTolerance { value } => {
                write!(f, "tolerance must be finite and positive, got {value}")
            }
            Self::ZeroIterations => write!(f, "max_iterations must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

/// Errors from [`Grid2`](crate::Grid2) construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Buffer length does not equal `rows * cols`.
    ShapeMismatch {
        /// `rows * cols`.
        expected: usize,
        /// Length of the supplied buffer.
        actual: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch { expected, actual } => {
                write!(f, "buffer has {actual} cells, grid shape needs {expected}")
            }
        }
    }
}

impl Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_property() {
        let e = ConfigError::NonPositiveProperty {
            name: "conductivity",
            value: 0.0,
        };
        assert_eq!(e.to_string(), "conductivity must be finite and positive, got 0");
    }

    #[test]
    fn display_mesh_bounds() {
        assert_eq!(
            ConfigError::MeshTooCoarse { nodes: 2 }.to_string(),
            "mesh has 2 nodes per axis, need at least 3"
        );
        assert!(ConfigError::MeshTooFine {
            nodes: 20_000,
            max: 16_384
        }
        .to_string()
        .contains("16384"));
    }

    #[test]
    fn grid_error_display() {
        let e = GridError::ShapeMismatch {
            expected: 4,
            actual: 3,
        };
        assert_eq!(e.to_string(), "buffer has 3 cells, grid shape needs 4");
    }
}
