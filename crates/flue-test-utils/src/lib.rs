//! Test utilities for Flue development.
//!
//! Shared configurations and assertions used across the workspace's
//! unit and integration tests.

#![forbid(unsafe_code)]

pub mod fixtures;

pub use fixtures::{
    assert_four_fold_symmetric, five_by_five_config, lattice_config, reference_config,
    thin_wall_config,
};
