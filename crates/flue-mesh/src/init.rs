//! Seed temperatures for the iterative solve.

use flue_core::{Grid2, Properties};

use crate::quarter::QuarterGrid;

/// Initial temperature field for `grid`.
///
/// Cavity nodes start at the external temperature; wall nodes start at the
/// mean of the internal and external temperatures. The seed carries no
/// physical meaning beyond starting the relaxation inside a plausible range.
pub fn initial_field(grid: &QuarterGrid, properties: &Properties) -> Grid2<f64> {
    let outside = properties.external_temperature;
    let wall = properties.mean_temperature();
    let n = grid.nodes();
    Grid2::from_fn(n, n, |r, c| if grid.is_solid(r, c) { wall } else { outside })
}
