//! Four-fold reconstruction of the full cross-section.
//!
//! The solved quadrant has its `[0, 0]` corner at the chimney's centre. The
//! full field places four reflected copies around that corner:
//!
//! ```text
//! +----------------------+----------------------+
//! | flipped rows + cols  | flipped rows         |
//! +----------------------+----------------------+
//! | flipped cols         | quadrant as solved   |
//! +----------------------+----------------------+
//! ```

use flue_core::Grid2;

/// Mirror a `rows × cols` quadrant into a `2·rows × 2·cols` field.
///
/// Pure; calling it twice on the same quadrant yields identical output.
pub fn mirror_quadrant(quadrant: &Grid2<f64>) -> Grid2<f64> {
    let (rows, cols) = quadrant.shape();
    Grid2::from_fn(2 * rows, 2 * cols, |r, c| {
        let qr = if r < rows { rows - 1 - r } else { r - rows };
        let qc = if c < cols { cols - 1 - c } else { c - cols };
        quadrant[(qr, qc)]
    })
}
