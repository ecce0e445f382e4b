//! Solve the reference chimney and print a summary.
//!
//! Run with `cargo run -p flue --example chimney`. Set `RUST_LOG=debug` to
//! see grid construction details.

use flue::prelude::*;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Characters from coolest to hottest.
const RAMP: &[u8] = b" .:-=+*#%@";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();

    let config = SimulationConfig::default();
    let sim = simulate(&config)?;
    let report = sim.report();

    match report.status {
        Convergence::Converged => println!("Converged after {} sweeps.", report.sweeps),
        status => println!(
            "Stopped after {} sweeps ({status:?}), residual {:.3e}.",
            report.sweeps, report.residual
        ),
    }
    println!("Heat loss rate: {:.2} W", sim.heat_loss());

    let field = sim.full_field();
    let (lo, hi) = field.min_max().unwrap_or((0.0, 0.0));
    let span = (hi - lo).max(f64::EPSILON);
    println!("Temperature range: {lo:.1} to {hi:.1} °C");
    for row in field.iter_rows() {
        let line: String = row
            .iter()
            .map(|t| {
                let level = ((t - lo) / span * (RAMP.len() - 1) as f64).round() as usize;
                RAMP[level.min(RAMP.len() - 1)] as char
            })
            .collect();
        println!("{line}");
    }
    Ok(())
}
