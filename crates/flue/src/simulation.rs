//! The orchestrator: one configuration in, one solved chimney out.

use flue_core::{Grid2, SimulationConfig};
use flue_mesh::{initial_field, mirror_quadrant, Axis, QuarterGrid};
use flue_solver::{heat_loss_rate, GaussSeidel, SolveReport};

use crate::error::SimulationError;

/// Result of one simulation run.
///
/// Holds the converged quadrant, its mirrored full cross-section and the
/// scalar heat-loss rate. Nothing here is mutated after construction.
#[derive(Clone, Debug)]
pub struct Simulation {
    config: SimulationConfig,
    grid: QuarterGrid,
    quadrant: Grid2<f64>,
    full: Grid2<f64>,
    heat_loss: f64,
    report: SolveReport,
}

impl Simulation {
    /// The configuration this run used.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The quarter-domain grid and solid mask.
    pub fn grid(&self) -> &QuarterGrid {
        &self.grid
    }

    /// Converged `n × n` quadrant, `[0, 0]` at the chimney's centre.
    pub fn quadrant(&self) -> &Grid2<f64> {
        &self.quadrant
    }

    /// Full `2n × 2n` cross-section.
    pub fn full_field(&self) -> &Grid2<f64> {
        &self.full
    }

    /// Heat-loss rate (W) through one quadrant's outer face, per metre of height.
    pub fn heat_loss(&self) -> f64 {
        self.heat_loss
    }

    /// Solver diagnostics: sweep count, residual, convergence status.
    pub fn report(&self) -> &SolveReport {
        &self.report
    }

    /// Coordinates for either axis of the full field, `-L_ext/2..=L_ext/2`.
    pub fn full_axis(&self) -> Axis {
        Axis::symmetric(self.config.geometry.half_side(), self.full.rows())
    }
}

/// Run the full pipeline for `config`.
///
/// Validation failures are returned before anything is allocated. Hitting
/// the iteration cap is not an error; inspect [`Simulation::report`].
pub fn simulate(config: &SimulationConfig) -> Result<Simulation, SimulationError> {
    config.validate()?;

    let grid = QuarterGrid::build(&config.geometry, &config.mesh)?;
    let mut quadrant = initial_field(&grid, &config.properties);
    let report = GaussSeidel::new(&grid, &config.properties, &config.solver).solve(&mut quadrant)?;

    let full = mirror_quadrant(&quadrant);
    let heat_loss = heat_loss_rate(
        &quadrant,
        config.properties.conductivity,
        config.mesh.spacing,
        config.geometry.outer_side,
    );

    tracing::info!(
        nodes = grid.nodes(),
        sweeps = report.sweeps,
        status = ?report.status,
        heat_loss,
        "simulation complete"
    );

    Ok(Simulation {
        config: config.clone(),
        grid,
        quadrant,
        full,
        heat_loss,
        report,
    })
}

/// Worker threads used by [`simulate_many`].
///
/// Auto-detected from the host and clamped to `[1, 64]`.
pub fn batch_worker_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
        .clamp(1, 64)
}

/// Run independent configurations in parallel on scoped threads.
///
/// The batch is split into at most [`batch_worker_count`] contiguous
/// chunks, each solved sequentially on its own thread. Each solve is
/// single-threaded; results come back in input order.
pub fn simulate_many(configs: &[SimulationConfig]) -> Vec<Result<Simulation, SimulationError>> {
    if configs.is_empty() {
        return Vec::new();
    }
    let chunk = configs.len().div_ceil(batch_worker_count());
    std::thread::scope(|scope| {
        let handles: Vec<_> = configs
            .chunks(chunk)
            .map(|batch| scope.spawn(move || batch.iter().map(simulate).collect::<Vec<_>>()))
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
            .collect()
    })
}
