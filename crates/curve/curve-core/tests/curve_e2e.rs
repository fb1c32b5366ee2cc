//! End-to-end tests for curve-core
//!
//! Tests complete fit-then-predict workflows using only this crate's API.

use curve_core::prelude::*;
use std::collections::HashMap;

fn load() -> Vec<f64> {
    (1..=30).map(|i| i as f64 * 10.0).collect()
}

/// Deterministic multiplicative noise in roughly [0.97, 1.03]
fn jitter(i: usize) -> f64 {
    1.0 + 0.03 * ((i as f64) * 1.7).sin()
}

fn noisy_series(a: f64, b: f64) -> Vec<f64> {
    load()
        .iter()
        .enumerate()
        .map(|(i, x)| a * x.powf(b) * jitter(i))
        .collect()
}

fn metrics_table() -> HashMap<String, Vec<f64>> {
    let mut columns = HashMap::new();
    columns.insert("log generation".to_string(), load());
    columns.insert("RX".to_string(), noisy_series(0.02, 1.1));
    columns.insert("TX".to_string(), noisy_series(0.015, 1.05));
    columns.insert("Read".to_string(), noisy_series(0.4, 0.7));
    columns.insert("Write".to_string(), noisy_series(0.9, 0.95));
    columns.insert("CPU load".to_string(), noisy_series(0.05, 0.8));
    columns
}

#[test]
fn e2e_fit_and_predict_all_metrics() {
    let columns = metrics_table();
    let targets = ["RX", "TX", "Read", "Write", "CPU load"];

    let (engine, report) = PredictionEngine::build(&columns, "log generation", &targets).unwrap();
    assert_eq!(engine.table().len(), 5);
    assert!(report.skipped.is_empty());
    assert!(report.failed.is_empty());
    assert_eq!(report.excluded_samples(), 0);

    let predictions = engine.evaluate_all(&targets, 500.0);
    let names: Vec<&str> = predictions.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(names, vec!["rx", "tx", "read", "write", "cpu load"]);

    // Noise is small, extrapolated values stay within a few percent
    let expected = [
        0.02 * 500f64.powf(1.1),
        0.015 * 500f64.powf(1.05),
        0.4 * 500f64.powf(0.7),
        0.9 * 500f64.powf(0.95),
        0.05 * 500f64.powf(0.8),
    ];
    for ((name, value), want) in predictions.iter().zip(expected.iter()) {
        let rel = (value - want).abs() / want;
        assert!(rel < 0.05, "{} predicted {} vs {}", name, value, want);
    }
}

#[test]
fn e2e_noisy_fit_stays_close() {
    let x = load();
    let y = noisy_series(3.0, 1.5);

    let fit = power_law_fit(&x, &y).unwrap();
    assert!((fit.b - 1.5).abs() < 0.02, "b = {}", fit.b);
    assert!((fit.a / 3.0 - 1.0).abs() < 0.1, "a = {}", fit.a);
}

#[test]
fn e2e_partial_columns_and_zero_cells() {
    let mut columns = HashMap::new();
    columns.insert("log generation".to_string(), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    // Cells a loader coerced to 0.0 show up as zeros here
    columns.insert("RX".to_string(), vec![0.0, 2.0, 0.0, 6.0, 8.0]);

    let (engine, report) =
        PredictionEngine::build(&columns, "log generation", &["RX", "missing_col"]).unwrap();

    assert_eq!(engine.table().keys().collect::<Vec<_>>(), vec!["rx"]);
    assert_eq!(report.skipped, vec!["missing_col".to_string()]);
    assert_eq!(report.fitted[0].1.used, 3);
    assert_eq!(report.fitted[0].1.excluded, 2);

    let rx = engine.table().get("rx").unwrap();
    assert!((rx.a - 2.0).abs() < 1e-10);
    assert!((rx.b - 1.0).abs() < 1e-10);
}

#[test]
fn e2e_zero_load_policy() {
    let mut table = CoefficientTable::new();
    table.insert("rx", FitResult::new(2.0, 1.2));
    table.insert("cpu load", FitResult::new(5.0, -0.3));
    let engine = PredictionEngine::new(table);

    assert_eq!(engine.evaluate("rx", 0.0).unwrap(), 0.0);
    assert!(matches!(
        engine.evaluate("cpu load", 0.0),
        Err(CurveError::Domain { .. })
    ));

    let predictions = engine.evaluate_all(&["RX", "CPU load"], 0.0);
    assert_eq!(predictions, vec![("rx".to_string(), 0.0)]);
}

#[test]
fn e2e_custom_fitter() {
    struct FixedFitter;

    impl CurveFitter for FixedFitter {
        fn fit_report(&self, x: &[f64], _y: &[f64]) -> Result<curve_core::FitReport> {
            Ok(curve_core::FitReport {
                result: FitResult::new(1.0, 1.0),
                used: x.len(),
                excluded: 0,
            })
        }
    }

    let columns = metrics_table();
    let (engine, _) =
        PredictionEngine::build_with(&FixedFitter, &columns, "log generation", &["TX"]).unwrap();

    assert_eq!(engine.evaluate("tx", 42.0).unwrap(), 42.0);
}
