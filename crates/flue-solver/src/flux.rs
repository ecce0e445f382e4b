//! Heat-loss rate through the outer face of the quarter-domain.
//!
//! Fourier's law with a one-sided backward difference across the last two
//! columns, summed over the interior rows and scaled by the cell width and
//! the outer side length (one metre of chimney height).

use flue_core::Grid2;

/// Outward flux density `q_i = -k·(T[i, n-1] - T[i, n-2]) / h` (W/m²) for
/// every interior row `1..rows-1`.
///
/// Empty when the field has fewer than three rows or two columns.
pub fn outer_face_flux_densities(field: &Grid2<f64>, conductivity: f64, spacing: f64) -> Vec<f64> {
    let (rows, cols) = field.shape();
    if rows < 3 || cols < 2 {
        return Vec::new();
    }
    (1..rows - 1)
        .map(|i| -conductivity * (field[(i, cols - 1)] - field[(i, cols - 2)]) / spacing)
        .collect()
}

/// Heat-loss rate (W) through one quadrant's outer face per metre of height.
///
/// Positive when heat flows outward. Zero for a uniform field.
///
/// # Examples
///
/// ```
/// use flue_core::Grid2;
/// use flue_solver::heat_loss_rate;
///
/// let uniform = Grid2::filled(5, 5, 80.0);
/// assert_eq!(heat_loss_rate(&uniform, 1.4, 0.01, 0.3), 0.0);
/// ```
pub fn heat_loss_rate(field: &Grid2<f64>, conductivity: f64, spacing: f64, outer_side: f64) -> f64 {
    let total: f64 = outer_face_flux_densities(field, conductivity, spacing)
        .iter()
        .sum();
    total * spacing * outer_side
}
