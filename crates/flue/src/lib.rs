//! Flue: steady-state heat conduction in a square chimney wall.
//!
//! This is the top-level facade crate. It re-exports the sub-crates and
//! provides the orchestrator, [`simulate`], which runs the whole pipeline
//! for one configuration:
//!
//! ```text
//! SimulationConfig → QuarterGrid → initial field → Gauss-Seidel
//!                  → { mirrored full field, heat-loss rate }
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use flue::prelude::*;
//!
//! let sim = simulate(&SimulationConfig::default()).unwrap();
//! assert!(sim.report().converged());
//! assert_eq!(sim.full_field().shape(), (32, 32));
//! println!("heat loss: {:.2} W", sim.heat_loss());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `flue-core` | `Grid2`, configuration, errors |
//! | [`mesh`] | `flue-mesh` | Quarter grid, solid mask, seeding, mirroring |
//! | [`solver`] | `flue-solver` | Gauss-Seidel relaxation, flux integration |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod simulation;

pub use error::SimulationError;
pub use simulation::{batch_worker_count, simulate, simulate_many, Simulation};

/// Core types, configuration and errors (`flue-core`).
pub use flue_core as types;

/// Quarter-domain grid, seeding and symmetry reconstruction (`flue-mesh`).
pub use flue_mesh as mesh;

/// Relaxation solver and heat-flux integration (`flue-solver`).
pub use flue_solver as solver;

/// Common imports for typical Flue usage.
///
/// ```rust
/// use flue::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::SimulationError;
    pub use crate::simulation::{simulate, simulate_many, Simulation};

    pub use flue_core::{
        ConfigError, Geometry, Grid2, Mesh, OuterEdge, Properties, SimulationConfig, SolverConfig,
    };

    pub use flue_mesh::{Axis, QuarterGrid};

    pub use flue_solver::{Convergence, SolveError, SolveReport};
}
