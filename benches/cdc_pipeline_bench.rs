use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use scd_sim::prelude::*;
use scd_sim::scd_series::generate;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("Generate");
    for &size in &[8usize, 15, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("ar1", size), &size, |b, &size| {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            b.iter(|| generate(black_box(size), 0.4, 10.0, &mut rng))
        });
    }
    group.finish();
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("Compose");
    let composer = PhaseComposer::new(SeriesParameters::default().with_trend(15.0)).unwrap();
    let specs = [
        ("ab", PhaseSpec::ab(5, 10, 1.0).unwrap()),
        ("abab", PhaseSpec::abab(5, 5, 5, 5, 1.0).unwrap()),
        (
            "alternating_random",
            PhaseSpec::alternating(10, AlternationScheme::random(), 1.0).unwrap(),
        ),
        (
            "multiple_baseline",
            PhaseSpec::multiple_baseline(5, 10, 3, 4, 1.0).unwrap(),
        ),
    ];
    for (name, spec) in &specs {
        group.bench_function(*name, |b| {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            b.iter(|| composer.compose(black_box(spec), &mut rng))
        });
    }
    group.finish();
}

fn bench_cdc(c: &mut Criterion) {
    let mut group = c.benchmark_group("CDC");
    let cdc = CdcEvaluator::new();
    for &(na, nb) in &[(3usize, 5usize), (5, 10), (20, 23)] {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let baseline = generate(na, 0.2, 10.0, &mut rng).unwrap();
        let intervention = generate(nb, 0.2, 11.0, &mut rng).unwrap();
        group.bench_with_input(
            BenchmarkId::new("evaluate_phases", format!("{na}x{nb}")),
            &(baseline, intervention),
            |b, (a, i)| b.iter(|| cdc.evaluate_phases(black_box(a), black_box(i))),
        );
    }
    group.finish();
}

fn bench_monte_carlo(c: &mut Criterion) {
    let mut group = c.benchmark_group("MonteCarlo");
    group.sample_size(20);
    let mc = MonteCarlo::new(SimulationConfig::default()).unwrap();
    group.bench_function("default_grid_sequential", |b| b.iter(|| mc.run()));
    group.bench_function("default_grid_parallel", |b| b.iter(|| mc.run_parallel()));
    group.finish();
}

criterion_group!(benches, bench_generate, bench_compose, bench_cdc, bench_monte_carlo);
criterion_main!(benches);
