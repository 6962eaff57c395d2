//! Monte Carlo validation of the CDC on the default grid
//!
//! Run with `RUST_LOG=debug` to see the driver and evaluator spans.

use scd_sim::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Single-case design simulation ===\n");

    // One graph of each topology
    let composer = PhaseComposer::new(
        SeriesParameters::default()
            .with_autocorrelation(0.2)
            .with_trend(15.0),
    )?;
    let mut rng = seeded_rng(42);
    let specs = [
        PhaseSpec::ab(5, 10, 2.0)?,
        PhaseSpec::abab(4, 4, 4, 4, 2.0)?,
        PhaseSpec::alternating(6, AlternationScheme::SemiRandom, 2.0)?,
        PhaseSpec::multiple_baseline(3, 5, 2, 3, 2.0)?,
    ];
    for spec in &specs {
        let series = composer.compose(spec, &mut rng)?;
        println!(
            "{}: {} points, phase changes at {:?}",
            spec.kind(),
            series.len(),
            series.phase_changes()
        );
    }

    // CDC on one AB graph
    let series = composer.compose(&specs[0], &mut rng)?;
    let outcome = CdcEvaluator::new().evaluate_detailed(&series)?;
    println!("\n{outcome}\n");

    // Full grid on the rayon pool
    let config = SimulationConfig::default().with_replications(20);
    info!(
        scenarios = config.scenario_count(),
        seed = config.seed,
        "running default grid"
    );
    let mc = MonteCarlo::new(config)?;
    let results = mc.run_parallel()?;
    info!(trials = results.len(), "grid finished");
    let report = results.report(None)?;
    println!("{report}");

    Ok(())
}
