//! End-to-end CDC checks on composed series

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use scd_cdc::{CdcEvaluator, DecisionRule};
use scd_core::{Error, Verdict};
use scd_series::{AlternationScheme, PhaseComposer, PhaseSpec, SeriesParameters};

proptest! {
    #[test]
    fn prop_cdc_is_deterministic(
        baseline in prop::collection::vec(-50.0f64..50.0, 1..20),
        intervention in prop::collection::vec(-50.0f64..50.0, 3..=23),
    ) {
        let cdc = CdcEvaluator::new();
        let first = cdc.evaluate_phases(&baseline, &intervention).unwrap();
        let second = cdc.evaluate_phases(&baseline, &intervention).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert!(first.points_above() <= intervention.len());
        prop_assert_eq!(first.trend_line().len(), intervention.len());
        prop_assert_eq!(
            first.verdict(),
            Verdict::from(first.points_above() >= first.cutoff())
        );
    }
}

#[test]
fn test_large_shift_detected_on_ab() {
    let composer = PhaseComposer::new(SeriesParameters::default()).unwrap();
    let spec = PhaseSpec::ab(5, 10, 50.0).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    for _ in 0..20 {
        let series = composer.compose(&spec, &mut rng).unwrap();
        assert_eq!(CdcEvaluator::new().evaluate(&series).unwrap(), Verdict::Effect);
    }
}

#[test]
fn test_evaluate_matches_phase_split() {
    let composer = PhaseComposer::new(
        SeriesParameters::default()
            .with_autocorrelation(0.4)
            .with_trend(15.0),
    )
    .unwrap();
    let spec = PhaseSpec::ab(5, 10, 1.0).unwrap();
    let series = composer
        .compose(&spec, &mut ChaCha8Rng::seed_from_u64(11))
        .unwrap();

    let cdc = CdcEvaluator::new();
    let (a, b) = series.split_phases();
    assert_eq!(
        cdc.evaluate(&series).unwrap(),
        cdc.decide(&a, &b).unwrap()
    );
}

#[test]
fn test_null_rejection_rate_is_low() {
    let composer = PhaseComposer::new(SeriesParameters::default()).unwrap();
    let spec = PhaseSpec::ab(5, 10, 0.0).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let cdc = CdcEvaluator::new();

    let trials = 500;
    let rejections = (0..trials)
        .map(|_| composer.compose(&spec, &mut rng).unwrap())
        .filter(|series| cdc.evaluate(series).unwrap().is_effect())
        .count();
    let rate = rejections as f64 / trials as f64;
    assert!(rate < 0.2, "type I error rate {rate}");
}

#[test]
fn test_alternating_treatment_is_judged_on_pooled_phases() {
    let composer = PhaseComposer::new(SeriesParameters::default()).unwrap();
    let spec = PhaseSpec::alternating(6, AlternationScheme::Systematic, 50.0).unwrap();
    let series = composer
        .compose(&spec, &mut ChaCha8Rng::seed_from_u64(5))
        .unwrap();
    assert_eq!(CdcEvaluator::new().evaluate(&series).unwrap(), Verdict::Effect);
}

#[test]
fn test_multiple_baseline_judged_per_tier() {
    let composer = PhaseComposer::new(SeriesParameters::default()).unwrap();
    let spec = PhaseSpec::multiple_baseline(3, 5, 2, 3, 50.0).unwrap();
    let series = composer
        .compose(&spec, &mut ChaCha8Rng::seed_from_u64(6))
        .unwrap();

    let cdc = CdcEvaluator::new();
    assert!(matches!(cdc.evaluate(&series), Err(Error::InvalidInput(_))));
    assert_eq!(cdc.evaluate_tiers(&series).unwrap(), vec![Verdict::Effect; 3]);
}

#[test]
fn test_short_intervention_from_composed_series() {
    let composer = PhaseComposer::new(SeriesParameters::default()).unwrap();
    let spec = PhaseSpec::ab(5, 2, 1.0).unwrap();
    let series = composer
        .compose(&spec, &mut ChaCha8Rng::seed_from_u64(9))
        .unwrap();
    assert!(matches!(
        CdcEvaluator::new().evaluate(&series),
        Err(Error::CutoffUnavailable { length: 2, min: 3, max: 23 })
    ));
}
