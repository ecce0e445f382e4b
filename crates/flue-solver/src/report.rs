//! Solve outcome and the opt-in non-convergence error.

use std::error::Error;
use std::fmt;

/// How the sweep loop ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Convergence {
    /// The largest per-sweep change fell below the tolerance.
    Converged,
    /// The iteration cap was reached first. The field is returned as-is.
    IterationCapReached,
    /// A sweep produced a non-finite value; iteration stopped there.
    Diverged,
}

/// Diagnostics from one call to [`GaussSeidel::solve`](crate::GaussSeidel::solve).
#[derive(Clone, Debug, PartialEq)]
pub struct SolveReport {
    /// Number of full sweeps performed.
    pub sweeps: usize,
    /// Largest absolute per-node change in the final sweep (°C).
    pub residual: f64,
    /// Tolerance the solve was run against.
    pub tolerance: f64,
    /// How the loop ended.
    pub status: Convergence,
    /// Per-sweep residual history, one entry per sweep.
    pub residuals: Vec<f64>,
}

impl SolveReport {
    /// `true` if the tolerance was met.
    pub fn converged(&self) -> bool {
        self.status == Convergence::Converged
    }

    /// Treat anything but convergence as an error.
    pub fn into_result(self) -> Result<Self, SolveError> {
        match self.status {
            Convergence::Converged => Ok(self),
            Convergence::IterationCapReached => Err(SolveError::NotConverged {
                sweeps: self.sweeps,
                residual: self.residual,
                tolerance: self.tolerance,
            }),
            Convergence::Diverged => Err(SolveError::Diverged { sweep: self.sweeps }),
        }
    }
}

/// Returned by [`SolveReport::into_result`] for callers that require convergence.
#[derive(Clone, Debug, PartialEq)]
pub enum SolveError {
    /// Iteration cap reached with the residual still above tolerance.
    NotConverged {
        /// Sweeps performed.
        sweeps: usize,
        /// Residual of the last sweep.
        residual: f64,
        /// Tolerance that was not met.
        tolerance: f64,
    },
    /// A non-finite temperature appeared.
    Diverged {
        /// Sweep on which it appeared (1-based).
        sweep: usize,
    },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotConverged {
                sweeps,
                residual,
                tolerance,
            } => write!(
                f,
                "not converged after {sweeps} sweeps: residual {residual:e} above tolerance {tolerance:e}"
            ),
            Self::Diverged { sweep } => write!(f, "non-finite temperature on sweep {sweep}"),
        }
    }
}

impl Error for SolveError {}
