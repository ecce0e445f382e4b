//! Relaxation solver and flux integration for the Flue chimney-wall model.
//!
//! [`GaussSeidel`] drives a quarter-domain temperature field to the fixed
//! point of the discretised steady-state heat equation, applying a
//! convective energy balance on the wall's inner and outer faces
//! ([`ConvectiveFace`]). [`heat_loss_rate`] integrates Fourier's law across
//! the outer face of the converged field.
//!
//! The sweep is strictly sequential: each node reads the values its
//! neighbours took earlier in the same sweep. Independent runs may execute
//! in parallel; a single solve may not.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod flux;
pub mod gauss_seidel;
pub mod report;

pub use boundary::ConvectiveFace;
pub use flux::{heat_loss_rate, outer_face_flux_densities};
pub use gauss_seidel::GaussSeidel;
pub use report::{Convergence, SolveError, SolveReport};
