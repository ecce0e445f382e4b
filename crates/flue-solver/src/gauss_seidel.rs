//! In-place Gauss-Seidel relaxation over the quarter-domain.
//!
//! Each sweep visits nodes in row-major, increasing-index order and
//! overwrites them immediately, so later nodes in the same sweep read
//! already-updated neighbours. There is no relaxation factor.
//!
//! Rows and columns at index 0 are never updated. With
//! [`OuterEdge::Frozen`] the last row and column are skipped as well; with
//! [`OuterEdge::Convective`] they are swept and take the outer-face rule.

use flue_core::{Grid2, GridError, OuterEdge, Properties, SolverConfig};
use flue_mesh::{NodeKind, QuarterGrid};

use crate::boundary::ConvectiveFace;
use crate::report::{Convergence, SolveReport};

/// Gauss-Seidel solver bound to one grid and one set of properties.
#[derive(Clone, Debug)]
pub struct GaussSeidel<'a> {
    grid: &'a QuarterGrid,
    inner: ConvectiveFace,
    outer: ConvectiveFace,
    config: SolverConfig,
}

impl<'a> GaussSeidel<'a> {
    /// Create a solver. `config` is assumed validated.
    pub fn new(grid: &'a QuarterGrid, properties: &Properties, config: &SolverConfig) -> Self {
        let spacing = grid.spacing();
        Self {
            grid,
            inner: ConvectiveFace::inner(properties, spacing),
            outer: ConvectiveFace::outer(properties, spacing),
            config: config.clone(),
        }
    }

    /// Exclusive upper bound of the swept row/column range.
    fn sweep_end(&self) -> usize {
        match self.config.outer_edge {
            OuterEdge::Frozen => self.grid.nodes() - 1,
            OuterEdge::Convective => self.grid.nodes(),
        }
    }

    /// New value for node `(r, c)` given the current field.
    ///
    /// `r` and `c` must lie in the swept range (`1..n-1`, or `1..n` with a
    /// convective outer edge); debug builds panic otherwise.
    #[inline]
    pub fn relax_node(&self, field: &Grid2<f64>, r: usize, c: usize) -> f64 {
        debug_assert!(
            (1..self.sweep_end()).contains(&r) && (1..self.sweep_end()).contains(&c),
            "node ({r}, {c}) outside the swept range"
        );
        match self.grid.classify(r, c) {
            NodeKind::Interior => {
                0.25 * (field[(r + 1, c)]
                    + field[(r - 1, c)]
                    + field[(r, c + 1)]
                    + field[(r, c - 1)])
            }
            NodeKind::InnerFace(step) => self.inner.relax(field[step.neighbour(r, c)]),
            NodeKind::OuterFace(step) => self.outer.relax(field[step.neighbour(r, c)]),
        }
    }

    /// One full sweep. Returns the largest absolute change, or NaN if any
    /// updated value is not finite.
    pub fn sweep(&self, field: &mut Grid2<f64>) -> f64 {
        let end = self.sweep_end();
        let mut worst = 0.0f64;
        let mut finite = true;
        for r in 1..end {
            for c in 1..end {
                let next = self.relax_node(field, r, c);
                let cell = &mut field[(r, c)];
                finite &= next.is_finite();
                worst = worst.max((next - *cell).abs());
                *cell = next;
            }
        }
        if finite {
            worst
        } else {
            f64::NAN
        }
    }

    /// Sweep until the residual drops below tolerance or the cap is hit.
    ///
    /// Hitting the cap is not an error: the field is left as-is and the
    /// report says so. Returns `Err(GridError::ShapeMismatch)` only if
    /// `field` is not `n × n`.
    pub fn solve(&self, field: &mut Grid2<f64>) -> Result<SolveReport, GridError> {
        let n = self.grid.nodes();
        if field.shape() != (n, n) {
            return Err(GridError::ShapeMismatch {
                expected: n * n,
                actual: field.len(),
            });
        }

        let tolerance = self.config.tolerance;
        let mut residuals = Vec::new();
        let mut status = Convergence::IterationCapReached;

        for sweep in 1..=self.config.max_iterations {
            let residual = self.sweep(field);
            residuals.push(residual);
            if !residual.is_finite() {
                tracing::warn!(sweep, "non-finite temperature, stopping");
                status = Convergence::Diverged;
                break;
            }
            if residual < tolerance {
                tracing::info!(sweeps = sweep, residual, "converged");
                status = Convergence::Converged;
                break;
            }
        }

        let sweeps = residuals.len();
        let residual = residuals.last().copied().unwrap_or(f64::NAN);
        if status == Convergence::IterationCapReached {
            tracing::warn!(sweeps, residual, tolerance, "iteration cap reached");
        }

        Ok(SolveReport {
            sweeps,
            residual,
            tolerance,
            status,
            residuals,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flue_mesh::initial_field;
    use flue_test_utils::{five_by_five_config, reference_config};

    fn build(cfg: &flue_core::SimulationConfig) -> QuarterGrid {
        QuarterGrid::build(&cfg.geometry, &cfg.mesh).unwrap()
    }

    #[test]
    fn interface_node_inside_wall_uses_inner_formula() {
        let cfg = five_by_five_config();
        let grid = build(&cfg);
        // (3, 2): x on the interface, y past it, so the node is solid.
        assert!(grid.is_solid(3, 2));

        let solver = GaussSeidel::new(&grid, &cfg.properties, &cfg.solver);
        let inner = ConvectiveFace::inner(&cfg.properties, grid.spacing());

        let mut field = Grid2::filled(5, 5, 100.0);
        field[(3, 3)] = 200.0;
        field[(2, 2)] = 40.0;
        field[(4, 2)] = 10.0;
        field[(3, 1)] = 60.0;
        let fixed = inner.relax(field[(3, 3)]);
        field[(3, 2)] = fixed;

        let next = solver.relax_node(&field, 3, 2);
        assert!((next - fixed).abs() < 1e-12);

        let average = 0.25 * (field[(4, 2)] + field[(2, 2)] + field[(3, 3)] + field[(3, 1)]);
        assert!((next - average).abs() > 1.0);
    }

    #[test]
    fn y_interface_uses_plus_y_neighbour() {
        let cfg = five_by_five_config();
        let grid = build(&cfg);
        let solver = GaussSeidel::new(&grid, &cfg.properties, &cfg.solver);
        let inner = ConvectiveFace::inner(&cfg.properties, grid.spacing());

        let mut field = Grid2::filled(5, 5, 50.0);
        field[(3, 3)] = 300.0;
        assert!((solver.relax_node(&field, 2, 3) - inner.relax(300.0)).abs() < 1e-12);
    }

    #[test]
    fn interior_node_takes_four_point_mean() {
        let cfg = five_by_five_config();
        let grid = build(&cfg);
        let solver = GaussSeidel::new(&grid, &cfg.properties, &cfg.solver);
        let field = Grid2::from_fn(5, 5, |r, c| (r * 5 + c) as f64);
        // (3, 3): neighbours 13, 23, 19, 17.
        assert_eq!(solver.relax_node(&field, 3, 3), 18.0);
    }

    #[test]
    fn frozen_edges_keep_their_seed() {
        let cfg = reference_config();
        let grid = build(&cfg);
        let mut field = initial_field(&grid, &cfg.properties);
        let seed = field.clone();
        GaussSeidel::new(&grid, &cfg.properties, &cfg.solver)
            .solve(&mut field)
            .unwrap();
        let n = grid.nodes();
        for i in 0..n {
            assert_eq!(field[(0, i)], seed[(0, i)]);
            assert_eq!(field[(i, 0)], seed[(i, 0)]);
            assert_eq!(field[(n - 1, i)], seed[(n - 1, i)]);
            assert_eq!(field[(i, n - 1)], seed[(i, n - 1)]);
        }
    }

    #[test]
    fn convective_edge_updates_outer_face() {
        let mut cfg = five_by_five_config();
        cfg.solver.outer_edge = OuterEdge::Convective;
        let grid = build(&cfg);
        let solver = GaussSeidel::new(&grid, &cfg.properties, &cfg.solver);
        let mut field = initial_field(&grid, &cfg.properties);
        solver.sweep(&mut field);
        let outer = ConvectiveFace::outer(&cfg.properties, grid.spacing());
        // (3, 4) is swept after (3, 3), so it sees that node's new value.
        assert!((field[(3, 4)] - outer.relax(field[(3, 3)])).abs() < 1e-12);
        // (4, 3) is on the y outer face and reads the node below it.
        assert!((field[(4, 3)] - outer.relax(field[(3, 3)])).abs() < 1e-12);
        // Low edges are still untouched.
        assert_eq!(field[(0, 4)], cfg.properties.external_temperature);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "outside the swept range")]
    fn relax_node_rejects_fixed_edge() {
        let cfg = five_by_five_config();
        let grid = build(&cfg);
        let solver = GaussSeidel::new(&grid, &cfg.properties, &cfg.solver);
        let field = Grid2::filled(5, 5, 0.0);
        solver.relax_node(&field, 0, 2);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "outside the swept range")]
    fn relax_node_rejects_frozen_outer_face() {
        let cfg = five_by_five_config();
        let grid = build(&cfg);
        let solver = GaussSeidel::new(&grid, &cfg.properties, &cfg.solver);
        let field = Grid2::filled(5, 5, 0.0);
        solver.relax_node(&field, 2, 4);
    }

    #[test]
    fn sweep_reads_updated_neighbours() {
        let cfg = five_by_five_config();
        let grid = build(&cfg);
        let solver = GaussSeidel::new(&grid, &cfg.properties, &cfg.solver);
        let inner = ConvectiveFace::inner(&cfg.properties, grid.spacing());
        let mut field = Grid2::filled(5, 5, 0.0);
        field[(0, 1)] = 4.0;
        solver.sweep(&mut field);
        assert_eq!(field[(1, 1)], 1.0);
        // (1, 2) sits on the interface; (1, 3) is swept next and sees its new value.
        let face = inner.relax(0.0);
        assert!((field[(1, 2)] - face).abs() < 1e-12);
        assert!((field[(1, 3)] - 0.25 * face).abs() < 1e-12);
    }

    #[test]
    fn reference_run_converges() {
        let cfg = reference_config();
        let grid = build(&cfg);
        let mut field = initial_field(&grid, &cfg.properties);
        let report = GaussSeidel::new(&grid, &cfg.properties, &cfg.solver)
            .solve(&mut field)
            .unwrap();
        assert!(report.converged());
        assert!(report.sweeps < cfg.solver.max_iterations);
        assert!(report.residual < cfg.solver.tolerance);
        assert_eq!(report.residuals.len(), report.sweeps);
        assert!(field.all_finite());
    }

    #[test]
    fn cap_is_a_soft_failure() {
        let mut cfg = reference_config();
        cfg.solver.max_iterations = 3;
        let grid = build(&cfg);
        let mut field = initial_field(&grid, &cfg.properties);
        let seed = field.clone();
        let report = GaussSeidel::new(&grid, &cfg.properties, &cfg.solver)
            .solve(&mut field)
            .unwrap();
        assert_eq!(report.status, Convergence::IterationCapReached);
        assert_eq!(report.sweeps, 3);
        assert!(report.residual >= cfg.solver.tolerance);
        assert_ne!(field, seed);
    }

    #[test]
    fn non_finite_input_diverges() {
        let cfg = reference_config();
        let grid = build(&cfg);
        let mut field = initial_field(&grid, &cfg.properties);
        field[(5, 5)] = f64::NAN;
        let report = GaussSeidel::new(&grid, &cfg.properties, &cfg.solver)
            .solve(&mut field)
            .unwrap();
        assert_eq!(report.status, Convergence::Diverged);
        assert_eq!(report.sweeps, 1);
    }

    #[test]
    fn wrong_shape_rejected() {
        let cfg = reference_config();
        let grid = build(&cfg);
        let mut field = Grid2::filled(4, 4, 0.0);
        let err = GaussSeidel::new(&grid, &cfg.properties, &cfg.solver)
            .solve(&mut field)
            .unwrap_err();
        assert_eq!(
            err,
            GridError::ShapeMismatch {
                expected: 256,
                actual: 16
            }
        );
    }
}
