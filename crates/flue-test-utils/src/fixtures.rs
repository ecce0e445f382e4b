//! Reusable simulation configurations and field assertions.
//!
//! - [`reference_config`]: the default chimney (interface off the lattice).
//! - [`lattice_config`]: same chimney with `e = 3h`, so the inner-face
//!   formula fires.
//! - [`five_by_five_config`]: smallest grid with an on-lattice interface.
//! - [`thin_wall_config`]: wall thinner than one mesh cell.

use flue_core::{Geometry, Grid2, Mesh, OuterEdge, SimulationConfig};

/// `k=1.4, h_i=60, h_o=12, T_int=350, T_ext=25, L_ext=0.30, L_int=0.25, h=0.01`.
pub fn reference_config() -> SimulationConfig {
    SimulationConfig::default()
}

/// Reference properties on a 0.30 m / 0.24 m section: `e = 0.03`, interface
/// at node 3 of 16, convective outer edge.
pub fn lattice_config() -> SimulationConfig {
    let mut cfg = SimulationConfig {
        geometry: Geometry {
            outer_side: 0.30,
            inner_side: 0.24,
        },
        ..SimulationConfig::default()
    };
    cfg.solver.outer_edge = OuterEdge::Convective;
    cfg
}

/// 5 × 5 quarter grid: half side 0.2 m, spacing 0.05 m, interface at node 2.
pub fn five_by_five_config() -> SimulationConfig {
    SimulationConfig {
        geometry: Geometry {
            outer_side: 0.4,
            inner_side: 0.2,
        },
        mesh: Mesh { spacing: 0.05 },
        ..SimulationConfig::default()
    }
}

/// 0.30 m section with a 5 mm wall on a 10 mm mesh.
pub fn thin_wall_config() -> SimulationConfig {
    SimulationConfig {
        geometry: Geometry {
            outer_side: 0.30,
            inner_side: 0.29,
        },
        ..SimulationConfig::default()
    }
}

/// Panic unless `full` is exactly symmetric about both centre lines.
pub fn assert_four_fold_symmetric(full: &Grid2<f64>) {
    let (rows, cols) = full.shape();
    for i in 0..rows {
        for j in 0..cols {
            let v = full[(i, j)];
            let mirrors = [
                full[(rows - 1 - i, j)],
                full[(i, cols - 1 - j)],
                full[(rows - 1 - i, cols - 1 - j)],
            ];
            assert!(
                mirrors.iter().all(|m| m.to_bits() == v.to_bits()),
                "asymmetry at ({i}, {j}): {v} vs {mirrors:?}"
            );
        }
    }
}
