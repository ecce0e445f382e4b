//! Quarter-domain mesh for the Flue chimney-wall solver.
//!
//! A square chimney is symmetric about both centre planes, so only one
//! quadrant is solved. This crate builds that quadrant and maps the
//! result back to the full cross-section:
//!
//! - [`Axis`]: evenly spaced node coordinates from the centre outward
//! - [`QuarterGrid`]: node count, solid/cavity mask and per-node
//!   boundary classification ([`NodeKind`])
//! - [`initial_field`]: seed temperatures for the iterative solve
//! - [`mirror_quadrant`]: four-fold reconstruction of the full field

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod axis;
pub mod init;
pub mod mirror;
pub mod quarter;

pub use axis::Axis;
pub use init::initial_field;
pub use mirror::mirror_quadrant;
pub use quarter::{NodeKind, QuarterGrid, Step};
