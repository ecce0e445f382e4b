//! Benchmark profiles for the Flue chimney-wall solver.
//!
//! - [`reference_profile`]: the default 16 × 16 quadrant
//! - [`refined_profile`]: the same chimney at a finer spacing, with the
//!   interface on the lattice and a convective outer edge

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use flue_core::{Geometry, Mesh, OuterEdge, SimulationConfig, SolverConfig};

/// The default reference chimney (1 cm mesh, 16 nodes per axis).
pub fn reference_profile() -> SimulationConfig {
    SimulationConfig::default()
}

/// 0.30 m / 0.24 m chimney at `spacing` metres, convective outer edge.
///
/// `spacing` should divide 0.03 so the interface lands on a node, e.g.
/// 0.005 (31 nodes) or 0.0025 (61 nodes).
pub fn refined_profile(spacing: f64) -> SimulationConfig {
    SimulationConfig {
        geometry: Geometry {
            outer_side: 0.30,
            inner_side: 0.24,
        },
        mesh: Mesh { spacing },
        solver: SolverConfig {
            outer_edge: OuterEdge::Convective,
            max_iterations: 50_000,
            ..SolverConfig::default()
        },
        ..SimulationConfig::default()
    }
}
