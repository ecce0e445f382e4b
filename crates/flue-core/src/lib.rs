//! Core types for the Flue chimney-wall solver.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! dense [`Grid2`] storage shared by every stage of the pipeline, the
//! immutable run configuration ([`SimulationConfig`] and its parts), and
//! the error types surfaced before a solve starts.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod grid;

pub use config::{
    Geometry, Mesh, OuterEdge, Properties, SimulationConfig, SolverConfig, MAX_NODES_PER_AXIS,
};
pub use error::{ConfigError, GridError};
pub use grid::Grid2;

/// Absolute slack used when snapping a real-valued ratio to a node index.
///
/// Grid positions are derived by index arithmetic; a ratio that lands
/// within this distance of an integer is treated as that integer.
pub const INDEX_SNAP: f64 = 1e-9;

/// Snap `ratio` to the nearest integer if it lies within [`INDEX_SNAP`].
///
/// Returns `None` for negative, non-finite, or off-lattice ratios.
pub fn snap_to_index(ratio: f64) -> Option<usize> {
    if !ratio.is_finite() || ratio < -INDEX_SNAP {
        return None;
    }
    let nearest = ratio.round();
    if (ratio - nearest).abs() <= INDEX_SNAP {
        Some(nearest.max(0.0) as usize)
    } else {
        None
    }
}
